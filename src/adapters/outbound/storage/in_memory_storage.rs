use crate::ports::outbound::KeyValueStorage;
use crate::shared::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// InMemoryStorage adapter keeping values for the lifetime of the process
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a consistent map of strings
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = InMemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("isLoggedIn", "true").unwrap();
        assert_eq!(storage.get_item("isLoggedIn").unwrap().as_deref(), Some("true"));

        storage.remove_item("isLoggedIn").unwrap();
        assert!(storage.get_item("isLoggedIn").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = InMemoryStorage::new();
        assert!(storage.remove_item("token").is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let storage = InMemoryStorage::new();
        let clone = storage.clone();
        clone.set_item("k", "v").unwrap();
        assert_eq!(storage.len(), 1);
    }
}
