use address_book::error::{StorageError, StorageResult};
use address_book::models::Directory;
use address_book::repositories::{snapshot, DirectoryRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the last saved snapshot bytes in memory, so saves go through the
/// real encoder, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    stored: Arc<Mutex<Option<Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new empty MockDirectoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: &Directory) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(snapshot::encode(directory).unwrap());
        repo
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The directory held by the last successful save, if any.
    pub fn saved(&self) -> Option<Directory> {
        let stored = self.stored.lock().unwrap();
        stored.as_ref().map(|bytes| snapshot::decode(bytes).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");

        let stored = self.stored.lock().unwrap();
        match stored.as_ref() {
            Some(bytes) => snapshot::decode(bytes),
            None => Ok(Directory::new()),
        }
    }

    async fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }

        let bytes = snapshot::encode(directory)?;
        *self.stored.lock().unwrap() = Some(bytes);
        Ok(())
    }
}
