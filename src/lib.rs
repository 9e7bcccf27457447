// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core items
pub use core::{CompletionResult, Config};

// Re-export feature items
pub use features::{
    // Completion
    CompletionClient, CompletionTransport, GenerationConfig, GenerationProfiles, OpenAiTransport,
    // Composer
    compose, validate, CompletionRequest, PromptFragments,
    // Forge
    assemble_final_prompt, Forge, Submission,
    // Styles
    BaseCharacter, Slot, StyleMode,
};
