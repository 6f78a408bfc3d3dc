//! Directory-backed session cache.
//!
//! Persists the signed-in user and bearer token between runs under two
//! fixed keys, `user` (JSON) and `token` (raw string). A missing or
//! unreadable cache simply means "not signed in".

use std::fs;
use std::io;
use std::path::PathBuf;

use tienda_client::models::AuthUser;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

/// Failures while writing or clearing the cache.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session cache i/o failed")]
    Io(#[from] io::Error),
    #[error("session cache entry is not valid JSON")]
    Corrupt(#[from] serde_json::Error),
}

/// A restored session: the cached user plus the raw bearer token.
#[derive(Debug, Clone)]
pub struct CachedSession {
    pub user: AuthUser,
    pub token: String,
}

/// Reads and writes the session cache directory.
#[derive(Debug, Clone)]
pub struct SessionCache {
    dir: PathBuf,
}

impl SessionCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the user
    /// cannot be serialized, or either file cannot be written.
    pub fn store(&self, user: &AuthUser, token: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(user)?;
        fs::write(self.dir.join(USER_KEY), json)?;
        fs::write(self.dir.join(TOKEN_KEY), token)?;
        Ok(())
    }

    /// Load the cached session, if any.
    ///
    /// Absent or unreadable entries yield `None`; a present but corrupt
    /// user entry is logged and also treated as no session.
    #[must_use]
    pub fn load(&self) -> Option<CachedSession> {
        let user_raw = fs::read_to_string(self.dir.join(USER_KEY)).ok()?;
        let token = fs::read_to_string(self.dir.join(TOKEN_KEY)).ok()?;
        match serde_json::from_str(&user_raw) {
            Ok(user) => Some(CachedSession { user, token }),
            Err(error) => {
                tracing::warn!(%error, "discarding corrupt cached session");
                None
            }
        }
    }

    /// Remove any cached session. Missing entries are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        for key in [USER_KEY, TOKEN_KEY] {
            match fs::remove_file(self.dir.join(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}
