//! # PromptWizard Layers
//!
//! Built-in layers for PromptWizard providers.
//!
//! Currently implemented layers:
//! - `LoggingLayer`: Logs every content request with timing information
//!
//! ## Usage
//!
//! ```ignore
//! use promptwizard_core::RequestExecutor;
//! use promptwizard_layer::LoggingLayer;
//!
//! let executor = RequestExecutor::builder(provider)
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;

// Re-exports
pub use logging::{LoggingLayer, LoggingProvider};
