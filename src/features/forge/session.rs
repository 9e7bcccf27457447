//! # Feature: Forge Submission
//!
//! One submission end to end: validate the fragments, compose the request,
//! invoke the model once and assemble the final image prompt.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Submission ids in log lines
//! - 1.0.0: Initial release

use super::assemble_final_prompt;
use crate::core::{preview, CompletionResult, PREVIEW_LIMIT};
use crate::features::completion::{CompletionClient, GenerationProfiles};
use crate::features::composer::{compose, validate, PromptFragments};
use crate::features::styles::StyleMode;
use log::{debug, info, warn};
use uuid::Uuid;

/// Outcome of one submission, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A required fragment was blank; nothing was sent
    Rejected { warning: String },
    /// The model answered and the final prompt was assembled
    Generated {
        request_id: Uuid,
        enhanced: String,
        final_prompt: String,
    },
    /// The call failed; the user may resubmit
    Failed { request_id: Uuid, message: String },
}

/// Shared entry point for submissions
///
/// Holds no per-submission state, so one instance serves any number of
/// concurrent users.
#[derive(Clone)]
pub struct Forge {
    client: CompletionClient,
    profiles: GenerationProfiles,
}

impl Forge {
    pub fn new(client: CompletionClient, profiles: GenerationProfiles) -> Self {
        Self { client, profiles }
    }

    pub async fn submit(&self, mode: StyleMode, fragments: &PromptFragments) -> Submission {
        if let Err(e) = validate(mode, fragments) {
            warn!("Rejected {} submission: {}", mode.slug(), e);
            return Submission::Rejected {
                warning: e.to_string(),
            };
        }

        let request_id = Uuid::new_v4();
        let request = compose(mode, fragments);
        let config = self.profiles.resolve(mode);
        info!("[{request_id}] Composed {} request", mode.slug());
        debug!("[{request_id}] User instruction: {}", request.user());

        match self.client.invoke(&request, &config).await {
            CompletionResult::Success { text } => {
                let final_prompt = assemble_final_prompt(mode, fragments, &text);
                info!(
                    "[{request_id}] Final prompt ready: {}",
                    preview(&final_prompt, PREVIEW_LIMIT)
                );
                Submission::Generated {
                    request_id,
                    enhanced: text,
                    final_prompt,
                }
            }
            CompletionResult::Failure { message } => {
                warn!("[{request_id}] Submission failed: {message}");
                Submission::Failed {
                    request_id,
                    message,
                }
            }
        }
    }
}
