//! File-per-entry cache store

use async_trait::async_trait;
use folio_ports::{CacheError, CacheResult, CacheStore};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file extension for entries
pub const DEFAULT_EXTENSION: &str = "json";

/// Cache store keeping each entry in `<dir>/<name>.<ext>`
///
/// The directory is created on first write. Writes land in a temporary file
/// that is renamed over the entry, so a reader never observes a half-written
/// entry from this process. Separate processes writing the same name race.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    extension: String,
}

impl DiskCache {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `name`
    pub fn entry_path(&self, name: &str) -> CacheResult<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{}.{}", name, self.extension)))
    }
}

/// Names become file names, so they must not escape the directory
fn validate_name(name: &str) -> CacheResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(CacheError::io(
            name,
            std::io::Error::new(ErrorKind::InvalidInput, "invalid cache entry name"),
        ));
    }
    Ok(())
}

#[async_trait]
impl CacheStore for DiskCache {
    async fn get(&self, name: &str) -> CacheResult<Option<Vec<u8>>> {
        let path = self.entry_path(name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(name, e)),
        }
    }

    async fn put(&self, name: &str, bytes: &[u8]) -> CacheResult<()> {
        let path = self.entry_path(name)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::io(name, e))?;

        let tmp = path.with_extension(format!("{}.tmp", self.extension));
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| CacheError::io(name, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| CacheError::io(name, e))?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    async fn remove(&self, name: &str) -> CacheResult<bool> {
        let path = self.entry_path(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::io(name, e)),
        }
    }

    async fn contains(&self, name: &str) -> CacheResult<bool> {
        let path = self.entry_path(name)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| CacheError::io(name, e))
    }

    fn name(&self) -> &str {
        "DiskCache"
    }
}
