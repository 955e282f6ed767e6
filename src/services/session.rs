//! Session state and the per-browser session registry.
//!
//! ARCHITECTURE
//! ============
//! A `Session` is a plain value describing one browser's login state. It is
//! never reached through a global: the `SessionStore` in `AppState` owns one
//! session per opaque cookie token and hands copies out to handlers.
//!
//! TRADE-OFFS
//! ==========
//! Login marks the session as loading, releases the lock while the backend
//! runs, then re-acquires it and records the outcome on the live entry, so a
//! logout or error reset that lands mid-flight is not overwritten. Concurrent
//! logins on the same token race; the last one to finish wins. Sessions are
//! only created by a successful login or an explicit `create`, which keeps
//! rejected anonymous attempts from growing the map.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::auth::{self, AuthBackend, AuthError, Credentials};

/// Message shown for a rejected credential pair.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Message shown when the backend could not answer.
pub const BACKEND_FAILURE_MESSAGE: &str = "Authentication failed";

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// SESSION
// =============================================================================

/// Login state of one browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Session {
    /// A logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the in-flight state of a login attempt.
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    /// Record the outcome of a credential check. Returns whether it succeeded.
    pub fn finish_login(&mut self, email: &str, outcome: Result<(), AuthError>) -> bool {
        self.loading = false;
        match outcome {
            Ok(()) => {
                self.authenticated = true;
                self.username = Some(auth::local_part(email).to_owned());
                self.last_error = None;
                true
            }
            Err(err) => {
                self.authenticated = false;
                self.username = None;
                self.last_error = Some(
                    match err {
                        AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
                        AuthError::Backend(_) => BACKEND_FAILURE_MESSAGE,
                    }
                    .to_owned(),
                );
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.username = None;
        self.last_error = None;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

/// Run one login attempt against `backend`, updating `session` in place.
///
/// A single best-effort attempt: no retry, no backoff.
pub async fn login(session: &mut Session, backend: &dyn AuthBackend, credentials: &Credentials) -> bool {
    session.begin_login();
    let outcome = backend.authenticate(credentials).await;
    log_backend_fault(&outcome);
    session.finish_login(&credentials.email, outcome)
}

fn log_backend_fault(outcome: &Result<(), AuthError>) {
    if let Err(AuthError::Backend(e)) = outcome {
        warn!(error = %e, "auth backend failed");
    }
}

fn log_outcome(session: &Session) {
    match session.username.as_deref() {
        Some(username) if session.authenticated => info!(%username, "login succeeded"),
        _ => info!("login rejected"),
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Sessions keyed by cookie token. Clone shares the underlying map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh logged-out session and return its token.
    pub async fn create(&self) -> String {
        let token = generate_token();
        let mut sessions = self.inner.write().await;
        sessions.insert(token.clone(), Session::new());
        debug!(sessions = sessions.len(), "session created");
        token
    }

    /// Snapshot of the session for `token`, if one exists.
    pub async fn get(&self, token: &str) -> Option<Session> {
        self.inner.read().await.get(token).cloned()
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        self.inner
            .read()
            .await
            .get(token)
            .is_some_and(|s| s.authenticated)
    }

    /// Log in on the session for `token`.
    ///
    /// A known session is marked loading, the backend runs without the store
    /// lock held, then the outcome is recorded on whatever the entry holds at
    /// that point. An unknown token is only stored once a login succeeds, so
    /// rejected attempts leave nothing behind.
    pub async fn login(&self, token: &str, backend: &dyn AuthBackend, credentials: &Credentials) -> Session {
        let known = match self.inner.write().await.get_mut(token) {
            Some(session) => {
                session.begin_login();
                true
            }
            None => false,
        };

        if !known {
            let mut session = Session::new();
            if login(&mut session, backend, credentials).await {
                self.inner.write().await.insert(token.to_owned(), session.clone());
            }
            log_outcome(&session);
            return session;
        }

        let outcome = backend.authenticate(credentials).await;
        log_backend_fault(&outcome);

        let mut sessions = self.inner.write().await;
        let session = match sessions.get_mut(token) {
            Some(session) => {
                session.finish_login(&credentials.email, outcome);
                session.clone()
            }
            // Logged out mid-flight: treat like an unknown token.
            None => {
                let mut session = Session::new();
                if session.finish_login(&credentials.email, outcome) {
                    sessions.insert(token.to_owned(), session.clone());
                }
                session
            }
        };
        log_outcome(&session);
        session
    }

    /// Log out and forget the session. Always yields a logged-out session.
    pub async fn logout(&self, token: &str) -> Session {
        let mut session = self.inner.write().await.remove(token).unwrap_or_default();
        session.logout();
        session
    }

    /// Clear the last error. Unknown tokens yield a logged-out session.
    pub async fn clear_error(&self, token: &str) -> Session {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(token) {
            Some(session) => {
                session.clear_error();
                session.clone()
            }
            None => Session::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
