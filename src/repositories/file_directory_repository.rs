//! File-backed directory repository.

use super::snapshot;
use super::traits::DirectoryRepository;
use crate::error::StorageResult;
use crate::models::Directory;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores the directory as a JSON snapshot in a single file.
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target,
/// so an interrupted save leaves the previous snapshot in place.
pub struct FileDirectoryRepository {
    path: PathBuf,
}

impl FileDirectoryRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl DirectoryRepository for FileDirectoryRepository {
    async fn load(&self) -> StorageResult<Directory> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let directory = snapshot::decode(&bytes).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Rejected address book snapshot");
            e
        })?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Address book loaded"
        );
        Ok(directory)
    }

    async fn save(&self, directory: &Directory) -> StorageResult<()> {
        let bytes = snapshot::encode(directory)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &bytes).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Address book saved"
        );
        Ok(())
    }
}
