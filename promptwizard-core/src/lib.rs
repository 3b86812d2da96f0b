//! # PromptWizard Core
//!
//! Core abstractions and runtime for turning rough prompt ideas into
//! engineered prompt variations.
//!
//! This crate provides the settings model, the instruction compiler, the
//! provider and middleware traits, the request executor with its timeout
//! and error classification, and the client-side stores.

pub mod compiler;
pub mod credential;
pub mod error;
pub mod export;
pub mod layer;
pub mod provider;
pub mod runtime;
pub mod storage;
pub mod strategy;
pub mod types;

// Re-exports
pub use compiler::{compile, GEMINI_MODEL, SAMPLING_TEMPERATURE};
pub use credential::CredentialSource;
pub use error::{AiError, EnhanceError, SettingsError, StoreError};
pub use export::ExportFormat;
pub use layer::{Layer, LayeredProvider};
pub use provider::Provider;
pub use runtime::{ExecutorConfig, RequestExecutor, RequestSequencer, RequestTicket};
pub use storage::{CredentialStore, JsonFileStore, KeyValueStore, MemoryStore, SavedResults};
pub use strategy::{NativeSchemaStrategy, SchemaStrategy};
pub use types::*;

/// Result type alias for AI operations
pub type Result<T> = std::result::Result<T, AiError>;
