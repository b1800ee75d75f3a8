//! Session persistence
//!
//! One JSON blob per store, always a full snapshot. Loading replaces whatever
//! is in memory; saving overwrites the previous snapshot.

use std::path::{Path, PathBuf};

use crate::session::{DrawSession, SessionError};

/// Durable home for the single active session
pub trait SessionStore {
    /// Load the stored session, `None` if nothing has been saved
    fn load(&self) -> Result<Option<DrawSession>, StoreError>;

    /// Overwrite the stored session
    fn save(&mut self, session: &DrawSession) -> Result<(), StoreError>;

    /// Remove the stored session. Returns whether anything was removed.
    fn clear(&mut self) -> Result<bool, StoreError>;
}

/// Default snapshot location
pub fn default_session_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("raffle")
        .join("session.json")
}

// ============ JSON File Store ============

/// Pretty-printed JSON file, replaced atomically on save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(default_session_path())
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<DrawSession>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let session: DrawSession = serde_json::from_str(&json)?;
        session.validate()?;

        log::info!(
            "Loaded session from {} ({}/{} revealed)",
            self.path.display(),
            session.cursor,
            session.total()
        );
        Ok(Some(session))
    }

    fn save(&mut self, session: &DrawSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        log::debug!("Session saved: {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, StoreError> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        log::info!("Session cleared: {}", self.path.display());
        Ok(true)
    }
}

// ============ Memory Store ============

/// In-memory store for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    session: Option<DrawSession>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every save
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Default::default()
        }
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&DrawSession> {
        self.session.as_ref()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<DrawSession>, StoreError> {
        Ok(self.session.clone())
    }

    fn save(&mut self, session: &DrawSession) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("memory store is read-only".to_string()));
        }
        self.session = Some(session.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, StoreError> {
        Ok(self.session.take().is_some())
    }
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid session snapshot: {0}")]
    Invalid(#[from] SessionError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
