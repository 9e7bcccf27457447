//! # Completion Client
//!
//! Single-shot invocation: one request, one bounded wait, one result. Every
//! failure is folded into [`CompletionResult::Failure`]; nothing is retried.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.2.0: Explicit timeout around the outbound call
//! - 1.1.0: Transport injected instead of a global client
//! - 1.0.0: Initial release

use super::{payload, CompletionTransport, GenerationConfig};
use crate::core::{preview, CompletionResult, PREVIEW_LIMIT};
use crate::features::composer::CompletionRequest;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

#[derive(Clone)]
pub struct CompletionClient {
    transport: Arc<dyn CompletionTransport>,
    request_timeout: Duration,
}

impl CompletionClient {
    pub fn new(transport: Arc<dyn CompletionTransport>, request_timeout: Duration) -> Self {
        Self {
            transport,
            request_timeout,
        }
    }

    /// Send the request once and wait for the result
    pub async fn invoke(
        &self,
        request: &CompletionRequest,
        config: &GenerationConfig,
    ) -> CompletionResult {
        if let Err(e) = config.validate() {
            error!("Refusing to send {} request: {}", request.mode().slug(), e);
            return CompletionResult::failure(e.to_string());
        }

        debug!("Outbound payload: {}", payload(request, config));

        let start_time = Instant::now();
        info!(
            "Calling {} for {} mode (timeout: {:?})",
            config.model,
            request.mode().slug(),
            self.request_timeout
        );

        match timeout(self.request_timeout, self.transport.complete(request, config)).await {
            Ok(Ok(text)) => {
                info!(
                    "Completion received after {:?}: {}",
                    start_time.elapsed(),
                    preview(&text, PREVIEW_LIMIT)
                );
                CompletionResult::success(text)
            }
            Ok(Err(e)) => {
                error!("Completion failed after {:?}: {}", start_time.elapsed(), e);
                CompletionResult::failure(e.to_string())
            }
            Err(_) => {
                error!("Completion timed out after {:?}", start_time.elapsed());
                CompletionResult::failure(format!(
                    "request timed out after {} seconds",
                    self.request_timeout.as_secs_f32()
                ))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::ERROR_PREFIX;
    use crate::features::composer::{compose, PromptFragments};
    use crate::features::styles::{Slot, StyleMode};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport stub that counts calls and replays a fixed outcome
    pub(crate) struct StubTransport {
        pub calls: AtomicUsize,
        reply: Result<String, String>,
        delay: Option<Duration>,
    }

    impl StubTransport {
        pub fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
                delay: None,
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(message.to_string()),
                delay: None,
            }
        }

        pub fn hanging(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok("too late".to_string()),
                delay: Some(delay),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionTransport for StubTransport {
        async fn complete(
            &self,
            _request: &CompletionRequest,
            _config: &GenerationConfig,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn avatar_request() -> CompletionRequest {
        let fragments = PromptFragments::new()
            .with(Slot::Subject, "A cyberpunk girl, platinum bob hair, blue eyes")
            .with(Slot::Outfit, "")
            .with(Slot::Background, "");
        compose(StyleMode::Avatar, &fragments)
    }

    fn client_with(stub: &Arc<StubTransport>) -> CompletionClient {
        CompletionClient::new(stub.clone(), Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_invoke_returns_stub_text() {
        let stub = Arc::new(StubTransport::replying("STUBBED_TEXT"));
        let client = client_with(&stub);

        let result = client
            .invoke(&avatar_request(), &GenerationConfig::for_mode(StyleMode::Avatar))
            .await;

        assert_eq!(result, CompletionResult::success("STUBBED_TEXT"));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invoke_transport_error_becomes_failure() {
        let stub = Arc::new(StubTransport::failing("connection timed out"));
        let client = client_with(&stub);

        let result = client
            .invoke(&avatar_request(), &GenerationConfig::for_mode(StyleMode::Avatar))
            .await;

        assert!(!result.is_success());
        assert!(result.to_string().starts_with(ERROR_PREFIX));
        assert!(result.to_string().contains("connection timed out"));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invoke_enforces_timeout() {
        let stub = Arc::new(StubTransport::hanging(Duration::from_secs(5)));
        let client = CompletionClient::new(stub.clone(), Duration::from_millis(20));

        let result = client
            .invoke(&avatar_request(), &GenerationConfig::for_mode(StyleMode::Avatar))
            .await;

        match result {
            CompletionResult::Failure { message } => assert!(message.contains("timed out")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_config_never_calls_transport() {
        let stub = Arc::new(StubTransport::replying("unused"));
        let client = client_with(&stub);
        let mut config = GenerationConfig::for_mode(StyleMode::Avatar);
        config.stream = true;

        let result = client.invoke(&avatar_request(), &config).await;

        assert!(!result.is_success());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_not_deduplicated() {
        let stub = Arc::new(StubTransport::replying("same"));
        let client = client_with(&stub);
        let request = avatar_request();
        let config = GenerationConfig::for_mode(StyleMode::Avatar);

        client.invoke(&request, &config).await;
        client.invoke(&request, &config).await;

        assert_eq!(stub.call_count(), 2);
    }
}
