//! # Forge Feature
//!
//! Submission pipeline shared by every front end.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod assembly;
pub mod session;

pub use assembly::assemble_final_prompt;
pub use session::{Forge, Submission};
