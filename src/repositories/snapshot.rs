//! Versioned JSON snapshot of a directory.
//!
//! ```json
//! { "version": 1, "contacts": [ { "name": "Ann", "phones": ["123-4567-890"], "birthday": "12.06.1990" } ] }
//! ```
//!
//! Field values are re-validated while decoding, so a hand-edited file cannot
//! smuggle an invalid phone or birthday into the directory.

use crate::error::{StorageError, StorageResult};
use crate::models::{Directory, Record};
use serde::{Deserialize, Serialize};

/// Format version written by [`encode`].
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a [Record],
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Serialize the full directory, contacts in directory order.
pub fn encode(directory: &Directory) -> StorageResult<Vec<u8>> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        contacts: directory.records(),
    };
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

/// Rebuild a directory from bytes produced by [`encode`].
///
/// # Errors
///
/// - `Json` when the bytes are not a snapshot or a field fails validation
/// - `UnsupportedVersion` when the snapshot has a different version
/// - `Corrupt` when two contacts share a name
pub fn decode(bytes: &[u8]) -> StorageResult<Directory> {
    let probe: VersionProbe = serde_json::from_slice(bytes)?;
    if probe.version != SNAPSHOT_VERSION {
        return Err(StorageError::UnsupportedVersion(probe.version));
    }

    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    Directory::try_from_records(snapshot.contacts)
        .map_err(|name| StorageError::Corrupt(format!("duplicate contact {}", name)))
}
