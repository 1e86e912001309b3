//! Persistence of game snapshots
//!
//! Reads happen once at startup and may fail; writes are fire-and-forget.
//! [`FileStore`] hands writes to a background thread so saving never blocks
//! the interaction loop.

use super::PersistedState;
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Error type for snapshot loading
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot read saved game: {e}"),
            Self::Corrupt(e) => write!(f, "Saved game is corrupt: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(e) => Some(e),
        }
    }
}

/// Where snapshots live between sessions
pub trait SnapshotStore {
    /// Read the saved snapshot, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<PersistedState>, StoreError>;

    /// Persist a snapshot. Failures are logged, never reported.
    fn save(&self, snapshot: &PersistedState);

    /// Forget the saved snapshot
    fn clear(&self);
}

/// Serialize a snapshot to its JSON blob
///
/// # Errors
/// Returns `StoreError::Corrupt` if serialization fails.
pub fn encode(snapshot: &PersistedState) -> Result<String, StoreError> {
    serde_json::to_string(snapshot).map_err(StoreError::Corrupt)
}

/// Parse a snapshot from its JSON blob
///
/// # Errors
/// Returns `StoreError::Corrupt` on malformed JSON.
pub fn decode(text: &str) -> Result<PersistedState, StoreError> {
    serde_json::from_str(text).map_err(StoreError::Corrupt)
}

enum WriteOp {
    Save(String),
    Clear,
}

/// JSON file store with a background writer thread
///
/// Dropping the store flushes pending writes.
pub struct FileStore {
    path: PathBuf,
    writer: Option<(Sender<WriteOp>, JoinHandle<()>)>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel::<WriteOp>();
        let writer_path = path.clone();

        let writer = thread::Builder::new()
            .name("snapshot-writer".to_string())
            .spawn(move || {
                for op in rx {
                    apply(&writer_path, op);
                }
            })
            .map(|handle| (tx, handle))
            .map_err(|e| warn!(error = %e, "Could not start snapshot writer, saving inline"))
            .ok();

        Self { path, writer }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn submit(&self, op: WriteOp) {
        match &self.writer {
            Some((tx, _)) => {
                if let Err(mpsc::SendError(op)) = tx.send(op) {
                    apply(&self.path, op);
                }
            }
            None => apply(&self.path, op),
        }
    }
}

fn apply(path: &Path, op: WriteOp) {
    match op {
        WriteOp::Save(json) => {
            let tmp = path.with_extension("tmp");
            let result = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path));
            match result {
                Ok(()) => debug!(path = %path.display(), "Saved game"),
                Err(e) => warn!(path = %path.display(), error = %e, "Failed to save game"),
            }
        }
        WriteOp::Clear => match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "Cleared saved game"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to clear saved game"),
        },
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(&text).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn save(&self, snapshot: &PersistedState) {
        match encode(snapshot) {
            Ok(json) => self.submit(WriteOp::Save(json)),
            Err(e) => warn!(error = %e, "Failed to encode game"),
        }
    }

    fn clear(&self) {
        self.submit(WriteOp::Clear);
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        if let Some((tx, handle)) = self.writer.take() {
            drop(tx);
            let _ = handle.join();
        }
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<String>>>,
    saves: Rc<RefCell<usize>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a raw blob, which need not be valid
    #[must_use]
    pub fn with_contents(blob: impl Into<String>) -> Self {
        let store = Self::default();
        *store.blob.borrow_mut() = Some(blob.into());
        store
    }

    /// The raw blob currently stored
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of saves performed
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        self.blob.borrow().as_deref().map(decode).transpose()
    }

    fn save(&self, snapshot: &PersistedState) {
        match encode(snapshot) {
            Ok(json) => {
                *self.blob.borrow_mut() = Some(json);
                *self.saves.borrow_mut() += 1;
            }
            Err(e) => warn!(error = %e, "Failed to encode game"),
        }
    }

    fn clear(&self) {
        *self.blob.borrow_mut() = None;
    }
}
