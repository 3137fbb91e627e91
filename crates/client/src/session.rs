use domain::{AuthResponse, User};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::error::Result;

/// Where the bearer token lives between runs.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl MemoryCredentials {
    /// Recovers a poisoned lock; the slot is only ever replaced whole.
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Keeps the token in a single file, creating parent directories on save.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentials {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The caller's authentication state.
///
/// The token is set when login or register succeeds and cleared on logout; it is
/// written through to the backing [`CredentialStore`] so it survives restarts.
/// The signed-in user is only known for the lifetime of this value.
pub struct Session {
    store: Box<dyn CredentialStore>,
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Restores any token the store already holds.
    pub fn restore(store: impl CredentialStore + 'static) -> Result<Self> {
        let token = store.load()?;
        debug!(authenticated = token.is_some(), "Session restored");
        Ok(Self {
            store: Box::new(store),
            token,
            user: None,
        })
    }

    pub fn anonymous() -> Self {
        Self {
            store: Box::new(MemoryCredentials::new()),
            token: None,
            user: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn start(&mut self, auth: &AuthResponse) -> Result<()> {
        self.store.save(&auth.token)?;
        self.token = Some(auth.token.clone());
        self.user = Some(auth.user.clone());
        info!(username = %auth.user.username, "Session started");
        Ok(())
    }

    pub fn end(&mut self) -> Result<()> {
        self.store.clear()?;
        self.token = None;
        self.user = None;
        info!("Session ended");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user)
            .finish()
    }
}
