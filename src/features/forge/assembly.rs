//! Final image prompt assembly
//!
//! Wraps the model's enhanced description in the mode's fixed image
//! generator template.

use crate::features::composer::PromptFragments;
use crate::features::styles::{template, Slot, StyleMode};

/// Fill the mode's final prompt template
///
/// `${enhanced}` is the model output with surrounding whitespace and a
/// trailing period removed (the template supplies its own punctuation).
pub fn assemble_final_prompt(
    mode: StyleMode,
    fragments: &PromptFragments,
    enhanced: &str,
) -> String {
    let enhanced = enhanced.trim();
    let enhanced = enhanced.strip_suffix('.').unwrap_or(enhanced).trim_end();

    template(mode)
        .final_prompt
        .replace("${subject}", fragments.get(Slot::Subject).trim())
        .replace("${title}", fragments.get(Slot::Title).trim())
        .replace("${enhanced}", enhanced)
}
