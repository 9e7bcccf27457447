//! # Chat Completion Transport
//!
//! Seam between the completion client and the hosted model. The production
//! transport speaks the OpenAI-compatible chat completions API (Groq by
//! default) with credentials held by the transport instead of process-wide
//! environment state.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Credentials passed explicitly, base URL configurable
//! - 1.0.0: Initial release

use super::GenerationConfig;
use crate::core::Config;
use crate::features::composer::CompletionRequest;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use serde_json::{json, Value};

/// Sends one request and returns the text of the first choice
///
/// Implementations hold no request-scoped state and are shared across
/// concurrent submissions.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn complete(&self, request: &CompletionRequest, config: &GenerationConfig)
        -> Result<String>;
}

/// OpenAI-compatible chat completions over HTTPS
#[derive(Clone)]
pub struct OpenAiTransport {
    credentials: Credentials,
}

impl OpenAiTransport {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            credentials: Credentials::new(api_key, base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.base_url)
    }
}

#[async_trait]
impl CompletionTransport for OpenAiTransport {
    async fn complete(
        &self,
        request: &CompletionRequest,
        config: &GenerationConfig,
    ) -> Result<String> {
        let messages = vec![
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::System,
                content: Some(request.system().to_string()),
                name: None,
                function_call: None,
                tool_call_id: None,
                tool_calls: None,
            },
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::User,
                content: Some(request.user().to_string()),
                name: None,
                function_call: None,
                tool_call_id: None,
                tool_calls: None,
            },
        ];

        // create() is the non-streaming call; create_stream() is never used
        let completion = ChatCompletion::builder(&config.model, messages)
            .credentials(self.credentials.clone())
            .temperature(config.temperature)
            .max_tokens(config.max_tokens)
            .top_p(config.top_p)
            .create()
            .await
            .map_err(|e| anyhow::anyhow!("API error: {}", e))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - Prompt: {}, Completion: {}, Total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("No content in model response"))
    }
}

/// JSON body of the outbound request, for debug logging
pub fn payload(request: &CompletionRequest, config: &GenerationConfig) -> Value {
    json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": request.system() },
            { "role": "user", "content": request.user() },
        ],
        "temperature": config.temperature,
        "max_tokens": config.max_tokens,
        "top_p": config.top_p,
        "stream": false,
    })
}
