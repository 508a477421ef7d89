//! Persisted session storage.
//!
//! Two keyed entries under the app directory: an opaque bearer token and
//! the JSON-serialized session record. Read at startup and written or
//! cleared on every login, register, and logout.

use std::path::PathBuf;

use entities::Session;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access session storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Home directory not found")]
    HomeDirNotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Session storage manager.
pub struct SessionStorage {
    /// Directory holding both entries.
    dir: PathBuf,
}

impl SessionStorage {
    /// Creates storage under `~/.bancario/`.
    pub fn new() -> StorageResult<Self> {
        let dir = dirs::home_dir()
            .map(|p| p.join(".bancario"))
            .ok_or(StorageError::HomeDirNotFound)?;
        Self::with_dir(dir)
    }

    /// Creates storage under an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the bearer token entry.
    pub fn token_path(&self) -> PathBuf {
        self.dir.join("token")
    }

    /// Path of the serialized session record.
    pub fn session_path(&self) -> PathBuf {
        self.dir.join("session.json")
    }

    /// Persists the session as both entries.
    pub fn save(&self, session: &Session) -> StorageResult<()> {
        std::fs::write(self.token_path(), &session.token)?;
        let record = serde_json::to_string(session)?;
        std::fs::write(self.session_path(), record)?;
        Ok(())
    }

    /// Loads the persisted session, if any.
    ///
    /// A record that exists but fails to parse is discarded along with the
    /// token entry and reported as absent; restoration never fails the
    /// caller.
    pub fn load(&self) -> Option<Session> {
        let token_path = self.token_path();
        let session_path = self.session_path();
        if !token_path.exists() || !session_path.exists() {
            return None;
        }

        let raw = match std::fs::read_to_string(&session_path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                self.clear();
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding malformed persisted session: {}", e);
                self.clear();
                None
            }
        }
    }

    /// Removes both entries. Already-missing entries are fine.
    pub fn clear(&self) {
        for path in [self.token_path(), self.session_path()] {
            if let Err(e) = std::fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to clear session entry {:?}: {}", path, e);
                }
            }
        }
    }
}
