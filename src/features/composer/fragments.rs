//! User supplied fragment values keyed by slot

use crate::features::styles::Slot;
use std::collections::BTreeMap;

/// Free-text values for the slots of one submission
///
/// Missing and empty entries are allowed; they render as empty spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFragments {
    values: BTreeMap<Slot, String>,
}

impl PromptFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot value, returning self for chaining
    pub fn with(mut self, slot: Slot, value: impl Into<String>) -> Self {
        self.set(slot, value);
        self
    }

    pub fn set(&mut self, slot: Slot, value: impl Into<String>) {
        self.values.insert(slot, value.into());
    }

    /// Value for a slot, or an empty string when unset
    pub fn get(&self, slot: Slot) -> &str {
        self.values.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// Whether the slot holds something other than whitespace
    pub fn is_filled(&self, slot: Slot) -> bool {
        !self.get(slot).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.values.iter().map(|(slot, value)| (*slot, value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(Slot, S)> for PromptFragments {
    fn from_iter<I: IntoIterator<Item = (Slot, S)>>(iter: I) -> Self {
        let mut fragments = PromptFragments::new();
        for (slot, value) in iter {
            fragments.set(slot, value);
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_as_empty() {
        let fragments = PromptFragments::new();
        assert_eq!(fragments.get(Slot::Outfit), "");
        assert!(!fragments.is_filled(Slot::Outfit));
    }

    #[test]
    fn test_whitespace_is_not_filled() {
        let fragments = PromptFragments::new().with(Slot::Subject, "   \n");
        assert!(!fragments.is_filled(Slot::Subject));
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let fragments = PromptFragments::new()
            .with(Slot::Title, "BIG SALE")
            .with(Slot::Title, "FLASH SALE");
        assert_eq!(fragments.get(Slot::Title), "FLASH SALE");
    }

    #[test]
    fn test_collect_from_pairs() {
        let fragments: PromptFragments = vec![(Slot::Subject, "a fox"), (Slot::Background, "snow")]
            .into_iter()
            .collect();
        assert_eq!(fragments.get(Slot::Subject), "a fox");
        assert_eq!(fragments.iter().count(), 2);
    }
}
