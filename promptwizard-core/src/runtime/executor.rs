//! RequestExecutor implementation.
//!
//! The executor performs exactly one provider call per request, races it
//! against a fixed deadline, parses the payload into [`EnhancedResult`]s and
//! classifies every failure into an [`EnhanceError`].

use crate::compiler;
use crate::credential::CredentialSource;
use crate::error::{AiError, EnhanceError};
use crate::layer::Layer;
use crate::provider::Provider;
use crate::strategy::{NativeSchemaStrategy, SchemaStrategy};
use crate::types::*;
use std::sync::Arc;
use std::time::Duration;

/// Deadline for one provider call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Message returned when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty";

/// Message returned when the provider produced no content
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response from the model";

/// Type-erased provider that can be shared across threads
type BoxedProvider = Arc<dyn Provider>;

/// Executor configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// How long to wait for the provider before giving up
    pub timeout: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Builder for composing a provider with layers.
///
/// # Example
///
/// ```ignore
/// let executor = RequestExecutor::builder(GeminiProvider::new())
///     .layer(LoggingLayer::new())
///     .credentials(CredentialSource::from_env())
///     .finish();
/// ```
pub struct RequestExecutorBuilder<P> {
    provider: P,
    credentials: CredentialSource,
    config: ExecutorConfig,
    schema_strategy: Option<Box<dyn SchemaStrategy>>,
}

impl<P: Provider> RequestExecutorBuilder<P> {
    /// Create a new builder with a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            credentials: CredentialSource::none(),
            config: ExecutorConfig::default(),
            schema_strategy: None,
        }
    }

    /// Add a layer to wrap the provider
    pub fn layer<L>(self, layer: L) -> RequestExecutorBuilder<L::LayeredProvider>
    where
        L: Layer<P>,
    {
        RequestExecutorBuilder {
            provider: layer.layer(self.provider),
            credentials: self.credentials,
            config: self.config,
            schema_strategy: self.schema_strategy,
        }
    }

    /// Set the process-level credential fallback
    pub fn credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }

    /// Override the provider deadline
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom schema strategy
    ///
    /// Defaults to [`NativeSchemaStrategy`].
    pub fn schema_strategy(mut self, strategy: Box<dyn SchemaStrategy>) -> Self {
        self.schema_strategy = Some(strategy);
        self
    }

    /// Finish building and create a RequestExecutor
    pub fn finish(self) -> RequestExecutor {
        let schema_strategy = self
            .schema_strategy
            .unwrap_or_else(|| Box::new(NativeSchemaStrategy::new()));

        RequestExecutor {
            provider: Arc::new(self.provider),
            credentials: self.credentials,
            config: self.config,
            schema_strategy,
        }
    }
}

/// Stateless executor for enhancement requests.
///
/// Safe to share between tasks; concurrent calls share no mutable state.
pub struct RequestExecutor {
    provider: BoxedProvider,
    credentials: CredentialSource,
    config: ExecutorConfig,
    schema_strategy: Box<dyn SchemaStrategy>,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("provider", &self.provider.info().id)
            .field("config", &self.config)
            .field("schema_strategy", &self.schema_strategy.name())
            .finish()
    }
}

impl RequestExecutor {
    /// Create a new builder
    pub fn builder<P: Provider>(provider: P) -> RequestExecutorBuilder<P> {
        RequestExecutorBuilder::new(provider)
    }

    /// Get provider information
    pub fn info(&self) -> Arc<ProviderInfo> {
        self.provider.info()
    }

    /// Get the executor configuration
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Compile `input` with `settings` and execute the request
    pub async fn enhance(
        &self,
        input: &str,
        settings: &Settings,
        credential: Option<&str>,
    ) -> Result<Vec<EnhancedResult>, EnhanceError> {
        let request = compiler::compile(input, settings);
        self.execute(&request, credential).await
    }

    /// Execute one compiled request.
    ///
    /// The caller-supplied credential takes precedence over the process-level
    /// one. Without any credential this fails with
    /// [`EnhanceError::MissingCredential`] before touching the provider.
    pub async fn execute(
        &self,
        request: &GenerationRequest,
        credential: Option<&str>,
    ) -> Result<Vec<EnhancedResult>, EnhanceError> {
        if request.input_text.trim().is_empty() {
            return Err(EnhanceError::Unknown(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let credential = self.credentials.resolve(credential).map_err(|e| {
            tracing::error!("no credential available, skipping provider call");
            e
        })?;

        let mut content_request = ContentRequest::new(
            request.model.clone(),
            request.input_text.clone(),
            credential,
        )
        .with_system_instruction(request.instruction.clone())
        .with_temperature(request.temperature);

        self.schema_strategy
            .apply(&mut content_request, &request.response_schema)
            .map_err(|e| EnhanceError::Unknown(e.message()))?;

        tracing::debug!(
            "dispatching request: model={}, variations={}, image_model={:?}, strategy={}",
            request.model,
            request.quantity,
            request.image_model,
            self.schema_strategy.name()
        );

        let response = self.race(content_request).await?;
        let results = parse_payload(response)?;

        tracing::debug!(
            "received {} variations (requested {})",
            results.len(),
            request.quantity
        );

        Ok(results)
    }

    /// Race the provider call against the deadline.
    ///
    /// The call runs on its own task so that losing the race detaches it
    /// rather than cancelling it; its eventual result is dropped with the
    /// task.
    async fn race(&self, req: ContentRequest) -> Result<ContentResponse, EnhanceError> {
        let provider = Arc::clone(&self.provider);
        let call = tokio::spawn(async move { provider.generate_content(req).await });
        let timeout = self.config.timeout;

        tokio::select! {
            joined = call => match joined {
                Ok(Ok(response)) => Ok(response),
                Ok(Err(err)) => Err(classify(err)),
                Err(join_err) => {
                    tracing::error!("provider task failed: {}", join_err);
                    Err(EnhanceError::Unknown(join_err.to_string()))
                }
            },
            _ = tokio::time::sleep(timeout) => {
                tracing::warn!("provider did not respond within {:?}", timeout);
                Err(EnhanceError::Timeout(timeout_message(timeout)))
            }
        }
    }
}

/// Map a provider error to the caller-facing taxonomy
fn classify(err: AiError) -> EnhanceError {
    if err.is_credential_rejection() {
        tracing::error!("provider rejected the credential");
        return EnhanceError::InvalidCredential;
    }

    tracing::error!("provider error: {}", err);
    EnhanceError::Unknown(err.message())
}

/// Parse the response text as an ordered list of results, unmodified
fn parse_payload(response: ContentResponse) -> Result<Vec<EnhancedResult>, EnhanceError> {
    let text = match response.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            tracing::error!(
                "empty response payload, finish_reason={:?}",
                response.finish_reason
            );
            return Err(EnhanceError::Unknown(EMPTY_RESPONSE_MESSAGE.to_string()));
        }
    };

    serde_json::from_str::<Vec<EnhancedResult>>(&text).map_err(|e| {
        tracing::error!("response does not match the schema: {}", e);
        EnhanceError::Malformed(e.to_string())
    })
}

fn timeout_message(timeout: Duration) -> String {
    format!(
        "Request timed out after {} seconds. The AI model is taking too long to respond.",
        timeout.as_secs()
    )
}
