//! # Features Layer
//!
//! Styles, composition, completion and the submission pipeline built on them.

pub mod completion;
pub mod composer;
pub mod forge;
pub mod styles;

pub use completion::{
    CompletionClient, CompletionTransport, GenerationConfig, GenerationProfiles, OpenAiTransport,
};
pub use composer::{compose, validate, CompletionRequest, PromptFragments};
pub use forge::{assemble_final_prompt, Forge, Submission};
pub use styles::{BaseCharacter, Slot, StyleMode};
