//! In-memory pre-shared key store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Identity → pre-shared key table shared by every session a connector opens.
///
/// Cloning is cheap; clones share the same table.
#[derive(Clone, Default)]
pub struct KeyStore {
    keys: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl KeyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the key for `identity`.
    pub fn add_key(&self, identity: impl Into<String>, key: impl Into<Vec<u8>>) {
        self.keys
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identity.into(), key.into());
    }

    /// Key registered for `identity`, if any.
    #[must_use]
    pub fn get_key(&self, identity: &str) -> Option<Vec<u8>> {
        self.keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identity)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("identities", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_registered_key() {
        let store = KeyStore::new();
        store.add_key("panel", "secret");
        assert_eq!(store.get_key("panel"), Some(b"secret".to_vec()));
        assert_eq!(store.get_key("other"), None);
    }

    #[test]
    fn should_replace_existing_key() {
        let store = KeyStore::new();
        store.add_key("panel", "old");
        store.add_key("panel", "new");
        assert_eq!(store.get_key("panel"), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_share_table_between_clones() {
        let store = KeyStore::new();
        let clone = store.clone();
        clone.add_key("Client_identity", "0123456789abcdef");
        assert!(!store.is_empty());
    }

    #[test]
    fn should_not_print_keys_in_debug_output() {
        let store = KeyStore::new();
        store.add_key("panel", "s3cr3t");
        assert!(!format!("{store:?}").contains("s3cr3t"));
    }
}
