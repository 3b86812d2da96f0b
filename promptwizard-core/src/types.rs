//! Core types for prompt enhancement.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Smallest number of variations a request may ask for
pub const MIN_QUANTITY: u32 = 1;

/// Largest number of variations a request may ask for
pub const MAX_QUANTITY: u32 = 50;

// ============================================================================
// Settings
// ============================================================================

/// Target use-case the enhanced prompts are written for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum PromptMode {
    #[serde(rename = "Image Generation (Midjourney/DALL-E)")]
    ImageGeneration,
    #[serde(rename = "LLM (ChatGPT/Gemini/Claude)")]
    TextGeneration,
    #[serde(rename = "Coding Assistant")]
    CodingAssistance,
    #[serde(rename = "Creative Writing")]
    CreativeWriting,
    #[serde(rename = "Academic/Research")]
    Academic,
}

impl PromptMode {
    /// All modes, in menu order
    pub const ALL: [PromptMode; 5] = [
        PromptMode::ImageGeneration,
        PromptMode::TextGeneration,
        PromptMode::CodingAssistance,
        PromptMode::CreativeWriting,
        PromptMode::Academic,
    ];

    /// Label used in the instruction text and in stored data
    pub fn label(&self) -> &'static str {
        match self {
            PromptMode::ImageGeneration => "Image Generation (Midjourney/DALL-E)",
            PromptMode::TextGeneration => "LLM (ChatGPT/Gemini/Claude)",
            PromptMode::CodingAssistance => "Coding Assistant",
            PromptMode::CreativeWriting => "Creative Writing",
            PromptMode::Academic => "Academic/Research",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, PromptMode::ImageGeneration)
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Voice of the generated prompts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum PromptTone {
    Creative,
    Precise,
    Descriptive,
    Concise,
    Professional,
}

impl PromptTone {
    pub fn label(&self) -> &'static str {
        match self {
            PromptTone::Creative => "Creative",
            PromptTone::Precise => "Precise",
            PromptTone::Descriptive => "Descriptive",
            PromptTone::Concise => "Concise",
            PromptTone::Professional => "Professional",
        }
    }
}

impl fmt::Display for PromptTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Image model targeted in image generation mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ImageModel {
    #[serde(rename = "Midjourney v6")]
    Midjourney,
    #[serde(rename = "DALL-E 3")]
    DallE,
    #[serde(rename = "Stable Diffusion XL")]
    StableDiffusion,
    #[serde(rename = "Wisk AI")]
    Wisk,
}

impl ImageModel {
    pub const ALL: [ImageModel; 4] = [
        ImageModel::Midjourney,
        ImageModel::DallE,
        ImageModel::StableDiffusion,
        ImageModel::Wisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImageModel::Midjourney => "Midjourney v6",
            ImageModel::DallE => "DALL-E 3",
            ImageModel::StableDiffusion => "Stable Diffusion XL",
            ImageModel::Wisk => "Wisk AI",
        }
    }
}

impl fmt::Display for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Requested level of prompt sophistication
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-selected configuration for one enhancement request.
///
/// Built through [`Settings::builder`], which validates the variation count
/// and drops image-only options outside image generation mode. The image
/// model is therefore only observable when `mode` is
/// [`PromptMode::ImageGeneration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    mode: PromptMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_model: Option<ImageModel>,
    tone: PromptTone,
    include_negatives: bool,
    complexity: Complexity,
    quantity: u32,
}

impl Settings {
    /// Create a builder seeded with the default settings
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    /// Image model, present only in image generation mode
    pub fn image_model(&self) -> Option<ImageModel> {
        if self.mode.is_image() {
            self.image_model
        } else {
            None
        }
    }

    pub fn tone(&self) -> PromptTone {
        self.tone
    }

    /// Whether negative prompts were requested; always false outside image mode
    pub fn include_negatives(&self) -> bool {
        self.mode.is_image() && self.include_negatives
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Start a builder from these settings
    pub fn to_builder(&self) -> SettingsBuilder {
        SettingsBuilder {
            mode: self.mode,
            image_model: self.image_model,
            tone: self.tone,
            include_negatives: self.include_negatives,
            complexity: self.complexity,
            quantity: self.quantity,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: PromptMode::ImageGeneration,
            image_model: Some(ImageModel::Midjourney),
            tone: PromptTone::Creative,
            include_negatives: true,
            complexity: Complexity::Intermediate,
            quantity: 1,
        }
    }
}

/// Builder for [`Settings`]
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    mode: PromptMode,
    image_model: Option<ImageModel>,
    tone: PromptTone,
    include_negatives: bool,
    complexity: Complexity,
    quantity: u32,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Settings::default().to_builder()
    }
}

impl SettingsBuilder {
    /// Set the target mode
    pub fn mode(mut self, mode: PromptMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set or clear the image model
    pub fn image_model(mut self, image_model: Option<ImageModel>) -> Self {
        self.image_model = image_model;
        self
    }

    /// Set the tone
    pub fn tone(mut self, tone: PromptTone) -> Self {
        self.tone = tone;
        self
    }

    /// Request negative prompts (image mode only)
    pub fn include_negatives(mut self, include_negatives: bool) -> Self {
        self.include_negatives = include_negatives;
        self
    }

    /// Set the complexity
    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set the number of variations
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Validate and build the settings
    pub fn build(self) -> Result<Settings, SettingsError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(SettingsError::QuantityOutOfRange(self.quantity));
        }

        let image = self.mode.is_image();

        Ok(Settings {
            mode: self.mode,
            image_model: if image { self.image_model } else { None },
            tone: self.tone,
            include_negatives: image && self.include_negatives,
            complexity: self.complexity,
            quantity: self.quantity,
        })
    }
}

// ============================================================================
// Results
// ============================================================================

/// One generated prompt variation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResult {
    /// The fully engineered, improved prompt
    pub enhanced_prompt: String,
    /// A brief explanation of the improvements
    pub explanation: String,
    /// Key themes
    pub tags: Vec<String>,
    /// Optional negative prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_negative_prompt: Option<String>,
}

impl EnhancedResult {
    /// Negative prompt, if the model produced a non-empty one
    pub fn negative_prompt(&self) -> Option<&str> {
        self.suggested_negative_prompt
            .as_deref()
            .filter(|n| !n.trim().is_empty())
    }
}

/// An enhanced result kept in the saved-results archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    #[serde(flatten)]
    pub result: EnhancedResult,
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub saved_at: i64,
}

// ============================================================================
// Credentials
// ============================================================================

/// Secret used to authorize calls to the AI service.
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a credential, trimming surrounding whitespace. Blank input yields `None`.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Access the raw secret
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ============================================================================
// Generation request (compiler output)
// ============================================================================

/// Fully compiled request parameters for one enhancement call.
///
/// Produced by [`crate::compiler::compile`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The user's raw prompt, passed verbatim
    pub input_text: String,
    /// System-level directive describing the transformation
    pub instruction: String,
    /// Structural descriptor of the expected response
    pub response_schema: serde_json::Value,
    /// MIME type the response must be returned in
    pub response_mime_type: String,
    pub temperature: f32,
    pub model: String,
    /// Number of variations requested
    pub quantity: u32,
    /// Image model the instruction targets, image mode only
    pub image_model: Option<ImageModel>,
}

// ============================================================================
// Provider interface types
// ============================================================================

/// Output format requested from the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text response
    Text,
    /// JSON response without a declared schema
    Json,
    /// JSON response constrained by a schema
    JsonSchema { schema: serde_json::Value },
}

/// Single-turn content generation request sent to a provider
#[derive(Debug, Clone)]
pub struct ContentRequest {
    pub model: String,
    /// User content
    pub contents: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
    pub credential: Credential,
}

impl ContentRequest {
    /// Create a plain text request
    pub fn new(
        model: impl Into<String>,
        contents: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            model: model.into(),
            contents: contents.into(),
            system_instruction: None,
            temperature: None,
            response_format: ResponseFormat::Text,
            credential,
        }
    }

    /// Set the system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set response format
    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Finish reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Other(String),
}

/// Provider response to a [`ContentRequest`]
#[derive(Debug, Clone, PartialEq)]
pub struct ContentResponse {
    pub model: String,
    /// Concatenated text of the first candidate, if any
    pub text: Option<String>,
    pub finish_reason: Option<FinishReason>,
    pub usage: Option<Usage>,
}

impl ContentResponse {
    /// Response carrying only text
    pub fn text(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: Some(text.into()),
            finish_reason: Some(FinishReason::Stop),
            usage: None,
        }
    }

    /// Response with no content at all
    pub fn empty(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: None,
            finish_reason: None,
            usage: None,
        }
    }
}

/// Provider information
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
}

impl ProviderInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            name: name.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.mode(), PromptMode::ImageGeneration);
        assert_eq!(settings.image_model(), Some(ImageModel::Midjourney));
        assert!(settings.include_negatives());
        assert_eq!(settings.quantity(), 1);
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(Settings::builder().quantity(1).build().is_ok());
        assert!(Settings::builder().quantity(50).build().is_ok());

        let err = Settings::builder().quantity(0).build().unwrap_err();
        assert!(matches!(err, SettingsError::QuantityOutOfRange(0)));

        let err = Settings::builder().quantity(51).build().unwrap_err();
        assert!(matches!(err, SettingsError::QuantityOutOfRange(51)));
    }

    #[test]
    fn test_image_options_dropped_outside_image_mode() {
        let settings = Settings::builder()
            .mode(PromptMode::CodingAssistance)
            .image_model(Some(ImageModel::DallE))
            .include_negatives(true)
            .build()
            .unwrap();

        assert_eq!(settings.image_model(), None);
        assert!(!settings.include_negatives());

        // Switching back to image mode does not resurrect the dropped model
        let back = settings
            .to_builder()
            .mode(PromptMode::ImageGeneration)
            .build()
            .unwrap();
        assert_eq!(back.image_model(), None);
    }

    #[test]
    fn test_enum_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&PromptMode::CodingAssistance).unwrap();
        assert_eq!(json, "\"Coding Assistant\"");

        let model: ImageModel = serde_json::from_str("\"Stable Diffusion XL\"").unwrap();
        assert_eq!(model, ImageModel::StableDiffusion);
    }

    #[test]
    fn test_enhanced_result_requires_tags() {
        let missing_tags = r#"{"enhancedPrompt": "a", "explanation": "b"}"#;
        assert!(serde_json::from_str::<EnhancedResult>(missing_tags).is_err());

        let ok = r#"{"enhancedPrompt": "a", "explanation": "b", "tags": []}"#;
        let result: EnhancedResult = serde_json::from_str(ok).unwrap();
        assert!(result.suggested_negative_prompt.is_none());
    }

    #[test]
    fn test_negative_prompt_ignores_blank() {
        let mut result = EnhancedResult {
            enhanced_prompt: "p".into(),
            explanation: "e".into(),
            tags: vec![],
            suggested_negative_prompt: Some("  ".into()),
        };
        assert_eq!(result.negative_prompt(), None);

        result.suggested_negative_prompt = Some("blur".into());
        assert_eq!(result.negative_prompt(), Some("blur"));
    }

    #[test]
    fn test_credential_is_trimmed_and_redacted() {
        assert!(Credential::new("   ").is_none());

        let credential = Credential::new("  secret-key ").unwrap();
        assert_eq!(credential.expose(), "secret-key");
        assert!(!format!("{:?}", credential).contains("secret"));
    }

    #[test]
    fn test_saved_result_flattens_fields() {
        let saved = SavedResult {
            result: EnhancedResult {
                enhanced_prompt: "p".into(),
                explanation: "e".into(),
                tags: vec!["t".into()],
                suggested_negative_prompt: None,
            },
            id: "abc".into(),
            saved_at: 42,
        };

        let value = serde_json::to_value(&saved).unwrap();
        assert_eq!(value["enhancedPrompt"], "p");
        assert_eq!(value["savedAt"], 42);
        assert_eq!(value["id"], "abc");
    }
}
