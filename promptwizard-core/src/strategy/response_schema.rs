//! Response schema strategies.
//!
//! The default [`NativeSchemaStrategy`] hands the schema to the provider's
//! response-schema field; executors accept any other [`SchemaStrategy`].

use crate::error::AiError;
use crate::types::{ContentRequest, ResponseFormat};

/// Strategy for attaching the response schema descriptor to a request.
pub trait SchemaStrategy: Send + Sync {
    /// Get the strategy name for debugging
    fn name(&self) -> &str;

    /// Apply this strategy so the provider returns JSON matching `schema`.
    fn apply(&self, req: &mut ContentRequest, schema: &serde_json::Value) -> Result<(), AiError>;
}

/// Passes the schema through the provider's native response-schema field.
#[derive(Debug, Clone, Default)]
pub struct NativeSchemaStrategy;

impl NativeSchemaStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaStrategy for NativeSchemaStrategy {
    fn name(&self) -> &str {
        "NativeSchemaStrategy"
    }

    fn apply(&self, req: &mut ContentRequest, schema: &serde_json::Value) -> Result<(), AiError> {
        req.response_format = ResponseFormat::JsonSchema {
            schema: schema.clone(),
        };
        Ok(())
    }
}
