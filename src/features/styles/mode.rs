//! # Feature: Style Modes
//!
//! Four composition modes (avatar, poster, product, anime). Each mode owns an
//! ordered list of fragment slots and the subset of those slots a caller must
//! fill before a submission is sent.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Optional idea slot for avatars, article moved into base character subjects
//! - 1.1.0: Added product and anime modes, base character presets
//! - 1.0.0: Initial release with avatar and poster modes

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named free-text slot in a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Subject,
    Outfit,
    Background,
    Title,
    RawIdea,
}

impl Slot {
    /// Label used when the slot is rendered into a user instruction
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Subject => "Subject",
            Slot::Outfit => "Outfit",
            Slot::Background => "Background",
            Slot::Title => "Title",
            Slot::RawIdea => "Idea",
        }
    }

    /// Stable snake_case key
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Subject => "subject",
            Slot::Outfit => "outfit",
            Slot::Background => "background",
            Slot::Title => "title",
            Slot::RawIdea => "raw_idea",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Selects which instruction template and fragment set govern one composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    Avatar,
    Poster,
    Product,
    Anime,
}

impl StyleMode {
    pub const ALL: [StyleMode; 4] = [
        StyleMode::Avatar,
        StyleMode::Poster,
        StyleMode::Product,
        StyleMode::Anime,
    ];

    /// Human readable label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            StyleMode::Avatar => "Consistent Avatar",
            StyleMode::Poster => "Poster Ad",
            StyleMode::Product => "Product Shot",
            StyleMode::Anime => "Anime Character",
        }
    }

    /// Short key used in config files and logs
    pub fn slug(&self) -> &'static str {
        match self {
            StyleMode::Avatar => "avatar",
            StyleMode::Poster => "poster",
            StyleMode::Product => "product",
            StyleMode::Anime => "anime",
        }
    }

    /// Slots in the order they are rendered
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            StyleMode::Avatar => &[Slot::Subject, Slot::Outfit, Slot::Background, Slot::RawIdea],
            StyleMode::Poster => &[Slot::Title, Slot::RawIdea],
            StyleMode::Product => &[Slot::Subject, Slot::Background, Slot::RawIdea],
            StyleMode::Anime => &[Slot::Subject, Slot::Outfit, Slot::Background, Slot::RawIdea],
        }
    }

    /// Slots that must be non-blank before a submission is sent
    pub fn required_slots(&self) -> &'static [Slot] {
        match self {
            StyleMode::Avatar | StyleMode::Product | StyleMode::Anime => &[Slot::Subject],
            StyleMode::Poster => &[Slot::RawIdea],
        }
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleMode {
    type Err = anyhow::Error;

    /// Accepts either the slug or the label, case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        StyleMode::ALL
            .into_iter()
            .find(|mode| {
                mode.slug().eq_ignore_ascii_case(needle) || mode.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| anyhow::anyhow!("Unknown style mode: {}", s))
    }
}

/// Fixed character presets for the avatar mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCharacter {
    Valentina,
    Yuki,
    Elena,
}

impl BaseCharacter {
    pub const ALL: [BaseCharacter; 3] = [
        BaseCharacter::Valentina,
        BaseCharacter::Yuki,
        BaseCharacter::Elena,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BaseCharacter::Valentina => "Latina (Valentina)",
            BaseCharacter::Yuki => "Asian (Yuki)",
            BaseCharacter::Elena => "European (Elena)",
        }
    }

    /// Subject description that keeps the face consistent across generations
    pub fn subject(&self) -> &'static str {
        match self {
            BaseCharacter::Valentina => {
                "a stunning 24-year-old Latina woman named Valentina, radiant olive skin, large expressive dark brown eyes"
            }
            BaseCharacter::Yuki => {
                "a stunning 24-year-old Japanese woman named Yuki, porcelain skin, almond-shaped eyes"
            }
            BaseCharacter::Elena => {
                "a stunning 24-year-old Scandinavian woman named Elena, pale skin, blue eyes"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_slug_and_label() {
        assert_eq!("avatar".parse::<StyleMode>().unwrap(), StyleMode::Avatar);
        assert_eq!(
            "Consistent Avatar".parse::<StyleMode>().unwrap(),
            StyleMode::Avatar
        );
        assert_eq!("  POSTER ".parse::<StyleMode>().unwrap(), StyleMode::Poster);
        assert_eq!("anime".parse::<StyleMode>().unwrap(), StyleMode::Anime);
    }

    #[test]
    fn test_parse_unknown_mode_fails() {
        let err = "watercolor".parse::<StyleMode>().unwrap_err();
        assert!(err.to_string().contains("Unknown style mode"));
    }

    #[test]
    fn test_required_slots_are_rendered_slots() {
        for mode in StyleMode::ALL {
            for slot in mode.required_slots() {
                assert!(
                    mode.slots().contains(slot),
                    "{mode} requires {slot} but does not render it"
                );
            }
        }
    }

    #[test]
    fn test_avatar_idea_is_optional() {
        assert!(StyleMode::Avatar.slots().contains(&Slot::RawIdea));
        assert!(!StyleMode::Avatar.required_slots().contains(&Slot::RawIdea));
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = StyleMode::ALL.iter().map(|m| m.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), StyleMode::ALL.len());
    }

    #[test]
    fn test_base_character_subjects_name_the_character() {
        assert!(BaseCharacter::Valentina.subject().contains("Valentina"));
        assert!(BaseCharacter::Yuki.subject().contains("Yuki"));
        assert!(BaseCharacter::Elena.subject().contains("Elena"));
    }

    #[test]
    fn test_mode_yaml_key() {
        let mode: StyleMode = serde_yaml::from_str("product").unwrap();
        assert_eq!(mode, StyleMode::Product);
    }
}
