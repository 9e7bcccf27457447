//! # Completion Feature
//!
//! Sampling settings, the transport seam to the hosted chat model and the
//! single-shot client that turns every outcome into a `CompletionResult`.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Request timeout and YAML generation profiles
//! - 1.1.0: Transport trait with injected credentials
//! - 1.0.0: Initial release

pub mod client;
pub mod config;
pub mod transport;

pub use client::CompletionClient;
pub use config::{GenerationConfig, GenerationProfiles, ProfileOverride};
pub use transport::{payload, CompletionTransport, OpenAiTransport};
