//! Credential Store
//!
//! Holds the session's bearer token in memory, with a JSON mirror on disk
//! so a restarted client can recover the token without re-authenticating.
//! The mirror is best-effort: a failed write is logged and the in-memory
//! value stays authoritative for the rest of the session.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Credential store errors
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Mirror IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Mirror serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk mirror format
#[derive(Debug, Serialize, Deserialize)]
struct MirrorFile {
    version: u32,
    token: String,
}

/// In-memory bearer token with a persistent mirror
pub struct CredentialStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Create a store mirroring to the given path
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            token: RwLock::new(None),
        }
    }

    /// Store a token in memory and mirror it to disk.
    ///
    /// The login flow always overwrites whatever is present. Mirror
    /// failures do not fail the call; the session keeps working from
    /// memory and the next restart simply has nothing to recover.
    pub fn set(&self, token: &str) {
        *self.token.write() = Some(token.to_string());

        if let Err(e) = self.write_mirror(token) {
            warn!("Token mirror write failed ({}): {}", self.path.display(), e);
        }
    }

    /// Current token: the in-memory value, or the mirror if memory is
    /// empty (cross-restart recovery). A recovered value is cached.
    pub fn get(&self) -> Option<String> {
        if let Some(token) = self.token.read().clone() {
            return Some(token);
        }

        match self.read_mirror() {
            Ok(Some(token)) => {
                debug!("Recovered bearer token from mirror");
                *self.token.write() = Some(token.clone());
                Some(token)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Token mirror read failed ({}): {}", self.path.display(), e);
                None
            }
        }
    }

    /// Whether a credential is currently available
    pub fn has_token(&self) -> bool {
        self.get().is_some()
    }

    /// Remove the token from memory and from the mirror
    pub fn clear(&self) -> Result<(), CredentialError> {
        *self.token.write() = None;

        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }

        Ok(())
    }

    fn write_mirror(&self, token: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(&MirrorFile {
            version: 1,
            token: token.to_string(),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &data)?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn read_mirror(&self) -> Result<Option<String>, CredentialError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = std::fs::read_to_string(&self.path)?;
        let mirror: MirrorFile = serde_json::from_str(&data)?;

        Ok(Some(mirror.token))
    }
}
