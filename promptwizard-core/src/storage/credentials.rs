//! Persisted user credential.

use super::KeyValueStore;
use crate::error::StoreError;
use crate::types::Credential;
use std::sync::Arc;

/// Storage key for the user's credential
pub const CREDENTIAL_KEY: &str = "user_gemini_api_key";

/// The user's own credential, kept across sessions.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored credential, if any
    pub fn load(&self) -> Result<Option<Credential>, StoreError> {
        Ok(self.store.get(CREDENTIAL_KEY)?.and_then(Credential::new))
    }

    /// Save a credential. Saving a blank value clears it.
    pub fn save(&self, value: &str) -> Result<(), StoreError> {
        match Credential::new(value) {
            Some(credential) => {
                tracing::debug!("saving user credential");
                self.store
                    .set(CREDENTIAL_KEY, credential.expose().to_string())
            }
            None => self.clear(),
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        tracing::debug!("clearing user credential");
        self.store.remove(CREDENTIAL_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_trims_and_loads() {
        let kv = Arc::new(MemoryStore::new());
        let credentials = CredentialStore::new(kv.clone());

        assert!(credentials.load().unwrap().is_none());
        credentials.save("  my-key \n").unwrap();

        assert_eq!(credentials.load().unwrap().unwrap().expose(), "my-key");
        assert_eq!(kv.get(CREDENTIAL_KEY).unwrap().as_deref(), Some("my-key"));
    }

    #[test]
    fn test_blank_save_clears() {
        let kv = Arc::new(MemoryStore::new());
        let credentials = CredentialStore::new(kv.clone());

        credentials.save("my-key").unwrap();
        credentials.save("   ").unwrap();

        assert!(credentials.load().unwrap().is_none());
        assert!(kv.keys().unwrap().is_empty());
    }
}
