//! Filesystem-backed content store.

use super::{BoxFuture, ContentStore, StorageError, StorageResult};
use std::fs;
use std::path::PathBuf;

/// Stores content records as JSON files under a base directory.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory, creating it if
    /// missing.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| StorageError::Io(format!("failed to create store directory: {e}")))?;
        }
        Ok(Self { base_path })
    }

    /// The store's base directory.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn record_path(&self, id: &str) -> PathBuf {
        // Record ids come from callers; keep the filename safe.
        let safe_id: String = id
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{safe_id}.json"))
    }
}

impl ContentStore for FileStore {
    fn put(&self, id: &str, json: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(id);
        let json = json.to_string();
        Box::pin(async move {
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))
        })
    }

    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<String>> {
        let path = self.record_path(id);
        let id = id.to_string();
        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id));
            }
            fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(id);
        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();
        Box::pin(async move {
            let entries = fs::read_dir(&base)
                .map_err(|e| StorageError::Io(format!("failed to list {}: {e}", base.display())))?;
            let mut ids = Vec::new();
            for entry in entries {
                let entry =
                    entry.map_err(|e| StorageError::Io(format!("failed to read entry: {e}")))?;
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json")
                    && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                {
                    ids.push(stem.to_string());
                }
            }
            Ok(ids)
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.record_path(id);
        Box::pin(async move { Ok(path.exists()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollster::block_on;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        block_on(store.put("page-1", r#"{"mode":"classic","html":""}"#)).unwrap();
        let loaded = block_on(store.get("page-1")).unwrap();
        assert_eq!(loaded, r#"{"mode":"classic","html":""}"#);

        assert_eq!(block_on(store.list()).unwrap(), vec!["page-1".to_string()]);
        block_on(store.delete("page-1")).unwrap();
        assert!(!block_on(store.exists("page-1")).unwrap());
    }

    #[test]
    fn test_ids_are_sanitized_for_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        block_on(store.put("weird/../id", "{}")).unwrap();
        assert!(block_on(store.exists("weird/../id")).unwrap());
        // The record landed inside the base directory.
        assert_eq!(block_on(store.list()).unwrap().len(), 1);
    }
}
