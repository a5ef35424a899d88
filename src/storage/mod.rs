//! Browser-style key/value storage and the property search cache.
//!
//! The last property search is kept so a results page can be rebuilt after
//! navigating away. Entries are `bitcode` bytes wrapped in base64, since the
//! storage only holds strings.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::Property;
use crate::error::StorageError;

/// String key/value storage, shaped after `window.localStorage`.
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: LocalStorage + ?Sized> LocalStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LocalStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::LockPoisoned)?;
        items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::LockPoisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// A property search together with the results it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub filters: Vec<(String, String)>,
    pub results: Vec<Property>,
}

/// Persists the most recent [`SavedSearch`].
#[derive(Clone)]
pub struct SearchCache<S> {
    storage: S,
}

impl<S: LocalStorage> SearchCache<S> {
    pub const KEY: &'static str = "property_search_results";

    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&self, search: &SavedSearch) -> Result<(), StorageError> {
        let bytes = bitcode::serialize(search).map_err(|e| StorageError::Encode(e.to_string()))?;
        debug!(results = search.results.len(), "saving property search");
        self.storage.set_item(Self::KEY, STANDARD.encode(bytes))
    }

    pub fn load(&self) -> Result<Option<SavedSearch>, StorageError> {
        let Some(encoded) = self.storage.get_item(Self::KEY)? else {
            return Ok(None);
        };
        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| StorageError::Decode(e.to_string()))?;
        let search = bitcode::deserialize(&bytes).map_err(|e| StorageError::Decode(e.to_string()))?;
        Ok(Some(search))
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(Self::KEY)
    }
}
