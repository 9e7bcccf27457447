//! # Core Module
//!
//! Configuration and completion result types shared by every feature.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Response module now holds CompletionResult
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{preview, CompletionResult, ERROR_PREFIX, PREVIEW_LIMIT};
