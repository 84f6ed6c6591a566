//! In-memory content store.

use super::{BoxFuture, ContentStore, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn put(&self, id: &str, json: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let json = json.to_string();
        Box::pin(async move {
            let mut records = self
                .records
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            records.insert(id, json);
            Ok(())
        })
    }

    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<String>> {
        let id = id.to_string();
        Box::pin(async move {
            let records = self
                .records
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            records
                .get(&id)
                .cloned()
                .ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut records = self
                .records
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            records.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let records = self
                .records
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            Ok(records.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let records = self
                .records
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
            Ok(records.contains_key(&id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageContent;
    use pollster::block_on;

    #[test]
    fn test_put_and_get() {
        let store = MemoryStore::new();
        let json = PageContent::default().to_json().unwrap();

        block_on(store.put("page-1", &json)).unwrap();
        let loaded = block_on(store.get("page-1")).unwrap();
        assert_eq!(loaded, json);
    }

    #[test]
    fn test_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            block_on(store.get("nope")),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_and_exists() {
        let store = MemoryStore::new();
        block_on(store.put("page-1", "{}")).unwrap();
        assert!(block_on(store.exists("page-1")).unwrap());

        block_on(store.delete("page-1")).unwrap();
        assert!(!block_on(store.exists("page-1")).unwrap());
    }

    #[test]
    fn test_list() {
        let store = MemoryStore::new();
        block_on(store.put("a", "{}")).unwrap();
        block_on(store.put("b", "{}")).unwrap();

        let mut ids = block_on(store.list()).unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
