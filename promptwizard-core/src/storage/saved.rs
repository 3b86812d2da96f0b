//! Saved-results archive.

use super::KeyValueStore;
use crate::error::StoreError;
use crate::types::{EnhancedResult, SavedResult};
use std::sync::{Arc, Mutex};

/// Storage key for the archive
pub const SAVED_RESULTS_KEY: &str = "savedPrompts";

/// Newest-first list of results the user chose to keep.
///
/// The whole list is stored as one JSON array under [`SAVED_RESULTS_KEY`].
#[derive(Debug)]
pub struct SavedResults {
    store: Arc<dyn KeyValueStore>,
    // serializes read-modify-write cycles
    guard: Mutex<()>,
}

impl SavedResults {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            guard: Mutex::new(()),
        }
    }

    /// All saved results, newest first
    pub fn list(&self) -> Result<Vec<SavedResult>, StoreError> {
        match self.store.get(SAVED_RESULTS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Save a result at the front of the archive.
    ///
    /// Returns `false` without changing anything when a result with the same
    /// enhanced prompt is already saved.
    pub fn save(&self, result: &EnhancedResult) -> Result<bool, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        let mut saved = self.list()?;

        if saved
            .iter()
            .any(|s| s.result.enhanced_prompt == result.enhanced_prompt)
        {
            return Ok(false);
        }

        let entry = SavedResult {
            result: result.clone(),
            id: uuid::Uuid::new_v4().to_string(),
            saved_at: chrono::Utc::now().timestamp_millis(),
        };
        tracing::debug!("saving result {}", entry.id);
        saved.insert(0, entry);

        self.write(&saved)?;
        Ok(true)
    }

    /// Whether a result with this enhanced prompt is saved
    pub fn contains(&self, enhanced_prompt: &str) -> Result<bool, StoreError> {
        Ok(self
            .list()?
            .iter()
            .any(|s| s.result.enhanced_prompt == enhanced_prompt))
    }

    /// Remove one saved result by id. Returns whether it existed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        let mut saved = self.list()?;
        let before = saved.len();
        saved.retain(|s| s.id != id);

        if saved.len() == before {
            return Ok(false);
        }
        self.write(&saved)?;
        Ok(true)
    }

    /// Remove every saved result
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        self.store.remove(SAVED_RESULTS_KEY)
    }

    fn write(&self, saved: &[SavedResult]) -> Result<(), StoreError> {
        self.store
            .set(SAVED_RESULTS_KEY, serde_json::to_string(saved)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn result(prompt: &str) -> EnhancedResult {
        EnhancedResult {
            enhanced_prompt: prompt.to_string(),
            explanation: "why".to_string(),
            tags: vec!["tag".to_string()],
            suggested_negative_prompt: None,
        }
    }

    #[test]
    fn test_save_prepends_and_skips_duplicates() {
        let archive = SavedResults::new(Arc::new(MemoryStore::new()));

        assert!(archive.save(&result("first")).unwrap());
        assert!(archive.save(&result("second")).unwrap());
        assert!(!archive.save(&result("first")).unwrap());

        let mut reworded = result("second");
        reworded.explanation = "different reasoning".to_string();
        reworded.tags = vec!["other".to_string()];
        assert!(!archive.save(&reworded).unwrap());

        let saved = archive.list().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].result.enhanced_prompt, "second");
        assert_eq!(saved[1].result.enhanced_prompt, "first");
        assert_ne!(saved[0].id, saved[1].id);
        assert!(saved[0].saved_at >= saved[1].saved_at);
        assert!(archive.contains("first").unwrap());
    }

    #[test]
    fn test_remove_and_clear() {
        let archive = SavedResults::new(Arc::new(MemoryStore::new()));
        archive.save(&result("first")).unwrap();
        archive.save(&result("second")).unwrap();

        let id = archive.list().unwrap()[1].id.clone();
        assert!(archive.remove(&id).unwrap());
        assert!(!archive.remove(&id).unwrap());
        assert!(!archive.contains("first").unwrap());

        archive.clear().unwrap();
        assert!(archive.list().unwrap().is_empty());
    }

    #[test]
    fn test_stored_shape() {
        let kv = Arc::new(MemoryStore::new());
        let archive = SavedResults::new(kv.clone());
        archive.save(&result("first")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&kv.get(SAVED_RESULTS_KEY).unwrap().unwrap()).unwrap();
        let entry = &raw[0];
        assert_eq!(entry["enhancedPrompt"], "first");
        assert!(entry["id"].is_string());
        assert!(entry["savedAt"].is_i64());
        assert!(entry.get("suggestedNegativePrompt").is_none());
    }
}
