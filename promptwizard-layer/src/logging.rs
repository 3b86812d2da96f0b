//! Logging layer for provider operations.

use async_trait::async_trait;
use promptwizard_core::error::AiError;
use promptwizard_core::layer::{Layer, LayeredProvider};
use promptwizard_core::provider::Provider;
use promptwizard_core::types::*;
use std::sync::Arc;

/// Logging layer that logs provider operations.
///
/// The request credential is never logged.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self {
            prefix: "[PromptWizard]".to_string(),
        }
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
    prefix: String,
}

/// Short label for how a generation call ended
fn outcome(result: &Result<ContentResponse, AiError>) -> &'static str {
    match result {
        Ok(response) if response.text.as_deref().map_or(true, |t| t.trim().is_empty()) => {
            "empty_payload"
        }
        Ok(_) => "payload",
        Err(e) if e.is_credential_rejection() => "credential_rejected",
        Err(AiError::RateLimit(_)) => "rate_limited",
        Err(_) => "failed",
    }
}

#[async_trait]
impl<P: Provider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_generate_content(
        &self,
        req: ContentRequest,
    ) -> Result<ContentResponse, AiError> {
        let model = req.model.clone();
        let schema_bound = matches!(req.response_format, ResponseFormat::JsonSchema { .. });

        tracing::debug!(
            provider = %self.inner.info().id,
            model = %model,
            idea_chars = req.contents.chars().count(),
            instruction_chars = req.system_instruction.as_deref().map_or(0, |s| s.chars().count()),
            temperature = ?req.temperature,
            schema_bound,
            "{} sending enhancement request",
            self.prefix
        );

        let start = std::time::Instant::now();
        let result = self.inner.generate_content(req).await;
        let elapsed = start.elapsed();
        let outcome = outcome(&result);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    model = %model,
                    outcome,
                    payload_chars = response.text.as_deref().map_or(0, |t| t.chars().count()),
                    total_tokens = response.usage.as_ref().map_or(0, |u| u.total_tokens),
                    finish_reason = ?response.finish_reason,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "{} enhancement reply received",
                    self.prefix
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %model,
                    outcome,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "{} enhancement request failed: {}",
                    self.prefix,
                    e
                );
            }
        }

        result
    }
}

#[async_trait]
impl<P: Provider> Provider for LoggingProvider<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        LayeredProvider::layered_info(self)
    }

    async fn generate_content(&self, req: ContentRequest) -> Result<ContentResponse, AiError> {
        LayeredProvider::layered_generate_content(self, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubProvider {
        fail: bool,
    }

    #[async_trait]
    impl Provider for StubProvider {
        fn info(&self) -> Arc<ProviderInfo> {
            ProviderInfo::new("stub", "Stub")
        }

        async fn generate_content(
            &self,
            req: ContentRequest,
        ) -> Result<ContentResponse, AiError> {
            if self.fail {
                Err(AiError::http(500, "boom"))
            } else {
                Ok(ContentResponse::text(req.model, "[]"))
            }
        }
    }

    fn request() -> ContentRequest {
        ContentRequest::new("m", "a cat", Credential::new("secret").unwrap())
    }

    #[tokio::test]
    async fn test_logging_layer_is_transparent() {
        let provider = LoggingLayer::new().layer(StubProvider { fail: false });

        assert_eq!(provider.info().id, "stub");
        let response = provider.generate_content(request()).await.unwrap();
        assert_eq!(response.text.as_deref(), Some("[]"));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome(&Ok(ContentResponse::text("m", "[]"))), "payload");
        assert_eq!(outcome(&Ok(ContentResponse::text("m", "  "))), "empty_payload");
        assert_eq!(outcome(&Ok(ContentResponse::empty("m"))), "empty_payload");
        assert_eq!(
            outcome(&Err(AiError::authentication("bad key"))),
            "credential_rejected"
        );
        assert_eq!(outcome(&Err(AiError::rate_limit("slow down"))), "rate_limited");
        assert_eq!(outcome(&Err(AiError::http(500, "boom"))), "failed");
    }

    #[tokio::test]
    async fn test_logging_layer_passes_errors_through() {
        let provider = LoggingLayer::with_prefix("[test]").layer(StubProvider { fail: true });

        let err = provider.generate_content(request()).await.unwrap_err();
        assert!(matches!(err, AiError::Http { status: 500, .. }));
    }
}
