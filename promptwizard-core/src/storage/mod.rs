//! Client-side persistence collaborators.
//!
//! Everything here sits on top of an injected [`KeyValueStore`], so callers
//! choose where data lives and tests substitute [`MemoryStore`].

pub mod credentials;
pub mod file;
pub mod memory;
pub mod saved;

pub use credentials::{CredentialStore, CREDENTIAL_KEY};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use saved::{SavedResults, SAVED_RESULTS_KEY};

use crate::error::StoreError;
use std::fmt::Debug;

/// String key-value storage
pub trait KeyValueStore: Send + Sync + Debug {
    /// Read a value; absence is not an error
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete a value; deleting a missing key is a no-op
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently stored, sorted
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
