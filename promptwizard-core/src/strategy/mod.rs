//! Strategy layer for provider-specific behaviors.
//!
//! A strategy decides how the declared response structure reaches the
//! provider.

pub mod response_schema;

pub use response_schema::{NativeSchemaStrategy, SchemaStrategy};
