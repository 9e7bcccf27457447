//! Two-message request construction
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Slots rendered from the mode's slot table instead of per-form format strings
//! - 1.0.0: Initial release

use super::PromptFragments;
use crate::features::styles::{system_instruction, trailing_keywords, StyleMode};
use anyhow::Result;
use serde::Serialize;

/// System and user instruction for one submission
///
/// Built fresh per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    mode: StyleMode,
    system: String,
    user: String,
}

impl CompletionRequest {
    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Build the request for a mode from the current fragment values
///
/// Every slot of the mode is rendered as a `Label: value` line in table
/// order, then the mode's static trailing keywords. Unset slots keep their
/// line with an empty value.
pub fn compose(mode: StyleMode, fragments: &PromptFragments) -> CompletionRequest {
    let mut user = String::new();
    for slot in mode.slots() {
        user.push_str(slot.label());
        user.push_str(": ");
        user.push_str(fragments.get(*slot));
        user.push('\n');
    }
    user.push_str(trailing_keywords(mode));

    CompletionRequest {
        mode,
        system: system_instruction(mode).to_string(),
        user,
    }
}

/// Reject submissions with a blank required slot
///
/// Runs before any request is sent; the error text is meant for the user.
pub fn validate(mode: StyleMode, fragments: &PromptFragments) -> Result<()> {
    if let Some(slot) = mode
        .required_slots()
        .iter()
        .find(|slot| !fragments.is_filled(**slot))
    {
        return Err(anyhow::anyhow!(
            "{} is required for {} mode",
            slot.label(),
            mode.label()
        ));
    }
    Ok(())
}
