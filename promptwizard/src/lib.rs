//! # PromptWizard
//!
//! Turns a rough prompt idea into several engineered prompt variations by
//! sending a layered instruction to a generative model and validating the
//! structured reply.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! promptwizard = { version = "0.1", features = ["gemini", "layers"] }
//! ```
//!
//! ```ignore
//! use promptwizard::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = RequestExecutor::builder(GeminiProvider::new())
//!     .layer(LoggingLayer::new())
//!     .credentials(CredentialSource::from_env())
//!     .finish();
//!
//! let settings = Settings::builder()
//!     .mode(PromptMode::ImageGeneration)
//!     .image_model(Some(ImageModel::Midjourney))
//!     .quantity(3)
//!     .build()?;
//!
//! for result in executor.enhance("a cat on a skateboard", &settings, None).await? {
//!     println!("{}", result.enhanced_prompt);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: `gemini` and `layers`
//! - `gemini`: Gemini provider
//! - `layers`: Built-in layers (logging)
//! - `schema`: `JsonSchema` derives on the public data types
//! - `full`: All features enabled

// Re-export core types and traits
pub use promptwizard_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "promptwizard-provider")]
pub mod provider {
    //! AI provider implementations.
    pub use promptwizard_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "promptwizard-layer")]
pub mod layer {
    //! Built-in middleware layers.
    pub use promptwizard_core::layer::*;
    pub use promptwizard_layer::*;
}

// Re-export schemars when schema feature is enabled
#[cfg(feature = "schema")]
pub mod schemars {
    pub use ::schemars::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use promptwizard::prelude::*;
    //! ```

    pub use crate::{
        Complexity, CredentialSource, CredentialStore, EnhanceError, EnhancedResult,
        ExportFormat, ImageModel, KeyValueStore, Layer, PromptMode, PromptTone, Provider,
        RequestExecutor, SavedResults, Settings,
    };

    #[cfg(feature = "promptwizard-provider")]
    pub use crate::provider::GeminiProvider;

    #[cfg(feature = "promptwizard-layer")]
    pub use crate::layer::LoggingLayer;
}
