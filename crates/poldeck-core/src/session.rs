//! Session token storage and the navigation guard.
//!
//! Stores the access token in `${POLDECK_HOME}/session.json` with restricted
//! permissions (0600). The token is never logged or displayed in full.
//!
//! The session is an explicit object handed to the views and the guard;
//! it starts empty and its single mutation point is the post-login write.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// In-memory session state.
///
/// Holds at most one access token; a new login overwrites any prior value.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The access token issued at login, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Session {
    /// Returns the current token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Overwrites the stored token.
    pub fn set_token(&mut self, token: String) {
        self.access_token = Some(token);
    }
}

/// Navigation guard predicate.
///
/// A guarded route may be entered iff a token is present. No expiry check,
/// no validity check against the server.
pub fn can_enter(session: &Session) -> bool {
    session.token().is_some()
}

/// On-disk persistence for [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by the default session path under POLDECK_HOME.
    pub fn new() -> Self {
        Self::at(paths::session_path())
    }

    /// Store backed by a specific file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the session from disk.
    /// Returns an empty session if the file doesn't exist.
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))
    }

    /// Saves the session to disk with restricted permissions (0600).
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| {
                    format!("Failed to open {} for writing", self.path.display())
                })?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the session file. Used by `poldeck logout`.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
