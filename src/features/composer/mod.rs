//! # Composer Feature
//!
//! Turns a style mode and the user's fragments into a deterministic
//! system + user instruction pair.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Split fragments into their own type, added caller-side validation
//! - 1.0.0: Initial release

pub mod fragments;
pub mod prompt_builder;

pub use fragments::PromptFragments;
pub use prompt_builder::{compose, validate, CompletionRequest};
