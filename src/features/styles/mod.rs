//! # Styles Feature
//!
//! Closed set of style modes, their fragment slots and the static instruction
//! tables bound to each mode.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Added product and anime modes
//! - 1.0.0: Initial release with avatar and poster modes

pub mod mode;
pub mod templates;

pub use mode::{BaseCharacter, Slot, StyleMode};
pub use templates::{system_instruction, template, trailing_keywords, ModeTemplate};
