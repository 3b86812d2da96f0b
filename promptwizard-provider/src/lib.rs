//! # PromptWizard Providers
//!
//! Provider implementations for the AI services PromptWizard talks to.

pub mod gemini;

// Re-exports
pub use gemini::{GeminiBuilder, GeminiProvider, DEFAULT_API_BASE};

/// Create a Gemini provider pointed at the public endpoint
pub fn gemini() -> GeminiProvider {
    GeminiProvider::new()
}
