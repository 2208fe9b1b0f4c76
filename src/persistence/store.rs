//! Snapshot storage backends.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::snapshot::EngineSnapshot;
use crate::error::SnapshotError;

/// Where engine snapshots are kept.
///
/// The engine takes a store as a parameter of `save`/`load`; it never owns
/// one.
pub trait SnapshotStore {
    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &EngineSnapshot) -> Result<(), SnapshotError>;

    /// The stored snapshot, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<EngineSnapshot>, SnapshotError>;
}

/// Keeps the encoded snapshot in memory. For tests and local sessions.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    bytes: Option<Vec<u8>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded snapshot, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Overwrite the stored bytes directly.
    pub fn set_bytes(&mut self, bytes: Vec<u8>) {
        self.bytes = Some(bytes);
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&mut self, snapshot: &EngineSnapshot) -> Result<(), SnapshotError> {
        self.bytes = Some(snapshot.to_bytes()?);
        Ok(())
    }

    fn load(&self) -> Result<Option<EngineSnapshot>, SnapshotError> {
        self.bytes
            .as_deref()
            .map(EngineSnapshot::from_bytes)
            .transpose()
    }
}

/// Keeps the encoded snapshot in a file.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-save leaves the previous snapshot intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, snapshot: &EngineSnapshot) -> Result<(), SnapshotError> {
        let bytes = snapshot.to_bytes()?;
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<EngineSnapshot>, SnapshotError> {
        match fs::read(&self.path) {
            Ok(bytes) => EngineSnapshot::from_bytes(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
