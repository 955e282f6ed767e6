//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the session registry, the user directory, the settings, and the
//! authentication backend. Nothing here is persisted; a restart returns every
//! piece to its seeded default.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::auth::AuthBackend;
use crate::services::directory::UserDirectory;
use crate::services::session::SessionStore;
use crate::services::settings::Settings;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum: all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub directory: Arc<RwLock<UserDirectory>>,
    pub settings: Arc<RwLock<Settings>>,
    pub auth: Arc<dyn AuthBackend>,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthBackend>, cookie_secure: bool) -> Self {
        Self::with_directory(auth, UserDirectory::seeded(), cookie_secure)
    }

    #[must_use]
    pub fn with_directory(auth: Arc<dyn AuthBackend>, directory: UserDirectory, cookie_secure: bool) -> Self {
        Self {
            sessions: SessionStore::new(),
            directory: Arc::new(RwLock::new(directory)),
            settings: Arc::new(RwLock::new(Settings::default())),
            auth,
            cookie_secure,
        }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
