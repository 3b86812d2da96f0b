//! Runtime layer.
//!
//! Sits between the compiled [`GenerationRequest`](crate::types::GenerationRequest)
//! and the low-level provider interface:
//! - Resolving the credential for each request
//! - Attaching the response schema with the provider's strategy
//! - Racing the provider call against the deadline
//! - Parsing and classifying the outcome

pub mod executor;
pub mod sequencer;

pub use executor::{ExecutorConfig, RequestExecutor, RequestExecutorBuilder, DEFAULT_TIMEOUT};
pub use sequencer::{RequestSequencer, RequestTicket};
