use crate::error::StorageResult;
use crate::models::Directory;
use async_trait::async_trait;

/// Repository for persisting the whole directory.
///
/// Provides abstraction over where the snapshot lives, enabling different
/// implementations (file, in-memory mock).
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Load the stored directory, or an empty one if nothing has been saved yet.
    async fn load(&self) -> StorageResult<Directory>;

    /// Replace the stored directory with `directory`.
    async fn save(&self, directory: &Directory) -> StorageResult<()>;
}
