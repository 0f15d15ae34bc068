use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{KeyValueStore, StorageError};

/// File-per-key backend rooted at a directory.
///
/// `key` maps to `<root>/<key>.json`. Writes go to a temporary sibling first
/// and are renamed into place, so a crash mid-write leaves the previous value
/// readable.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Opens (and creates if needed) the root directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "Directory store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

/// Keys double as file names: non-empty, `[A-Za-z0-9_.-]` only, not `.` or `..`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for DirectoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value.as_bytes()).await?;
        fs::rename(&staging, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();
        store.set("ecom_cart_items", "[1]").await.unwrap();
        drop(store);

        let reopened = DirectoryStore::open(dir.path()).await.unwrap();
        assert_eq!(
            reopened.get("ecom_cart_items").await.unwrap().as_deref(),
            Some("[1]")
        );
        assert!(dir.path().join("ecom_cart_items.json").exists());
    }

    #[tokio::test]
    async fn missing_key_reads_as_none_and_removes_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();
        assert!(store.get("absent").await.unwrap().is_none());
        store.remove("absent").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();
        for key in ["", "..", "a/b", "../escape", "spa ce"] {
            let err = store.set(key, "x").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[tokio::test]
    async fn non_utf8_contents_are_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::open(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("cart.json"), [0xff, 0xfe, 0x00]).unwrap();

        let err = store.get("cart").await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
