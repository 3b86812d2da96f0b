//! Gemini provider implementation over the Generative Language REST API.
//!
//! Maps a [`ContentRequest`] onto a single `generateContent` call and the
//! reply back onto a [`ContentResponse`]. Higher-level concerns (schema
//! strategy, timeout, error classification) live in the executor.

use async_trait::async_trait;
use promptwizard_core::compiler::RESPONSE_MIME_TYPE;
use promptwizard_core::error::AiError;
use promptwizard_core::provider::Provider;
use promptwizard_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider using reqwest
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_base: String,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_base", &self.api_base)
            .field("info", &self.info)
            .finish()
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiProvider {
    /// Create a provider against the public endpoint
    pub fn new() -> Self {
        GeminiBuilder::default().build()
    }

    /// Create a builder for more configuration options
    pub fn builder() -> GeminiBuilder {
        GeminiBuilder::default()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }

    /// Build the wire body for a request
    fn build_request(req: &ContentRequest) -> GenerateContentRequest {
        let (response_mime_type, response_schema) = match &req.response_format {
            ResponseFormat::Text => (None, None),
            ResponseFormat::Json => (Some(RESPONSE_MIME_TYPE.to_string()), None),
            ResponseFormat::JsonSchema { schema } => {
                (Some(RESPONSE_MIME_TYPE.to_string()), Some(schema.clone()))
            }
        };

        GenerateContentRequest {
            contents: vec![WireContent {
                role: Some("user".to_string()),
                parts: vec![WirePart {
                    text: Some(req.contents.clone()),
                }],
            }],
            system_instruction: req.system_instruction.as_ref().map(|text| WireContent {
                role: None,
                parts: vec![WirePart {
                    text: Some(text.clone()),
                }],
            }),
            generation_config: WireGenerationConfig {
                temperature: req.temperature,
                response_mime_type,
                response_schema,
            },
        }
    }

    /// Convert the wire reply into our response
    fn convert_response(model: &str, response: GenerateContentResponse) -> ContentResponse {
        let candidate = response.candidates.into_iter().next();

        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(|r| match r {
                "STOP" => FinishReason::Stop,
                "MAX_TOKENS" => FinishReason::MaxTokens,
                "SAFETY" => FinishReason::Safety,
                "RECITATION" => FinishReason::Recitation,
                other => FinishReason::Other(other.to_string()),
            });

        let text = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());

        let usage = response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        ContentResponse {
            model: response.model_version.unwrap_or_else(|| model.to_string()),
            text,
            finish_reason,
            usage,
        }
    }

    /// Map a non-success status and body onto an error
    fn convert_error(status: u16, body: &str) -> AiError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|e| e.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            400 => AiError::invalid_request(message),
            401 | 403 => AiError::authentication(message),
            429 => AiError::rate_limit(message),
            _ => AiError::http(status, message),
        }
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn generate_content(&self, req: ContentRequest) -> Result<ContentResponse, AiError> {
        let body = Self::build_request(&req);

        let response = self
            .client
            .post(self.endpoint(&req.model))
            .header(API_KEY_HEADER, req.credential.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Gemini returned {}: {}", status, raw);
            return Err(Self::convert_error(status.as_u16(), &raw));
        }

        let reply: GenerateContentResponse = serde_json::from_str(&raw)?;
        Ok(Self::convert_response(&req.model, reply))
    }
}

/// Builder for Gemini provider with custom configuration
#[derive(Debug, Default)]
pub struct GeminiBuilder {
    api_base: Option<String>,
    client: Option<reqwest::Client>,
}

impl GeminiBuilder {
    /// Set API base URL (for proxies and test servers)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Use a preconfigured HTTP client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the provider
    pub fn build(self) -> GeminiProvider {
        GeminiProvider {
            client: self.client.unwrap_or_default(),
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            info: ProviderInfo::new("gemini", "Google Gemini"),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
    usage_metadata: Option<WireUsage>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}
