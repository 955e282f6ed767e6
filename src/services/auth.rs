//! Credential validation behind a pluggable backend.
//!
//! DESIGN
//! ======
//! Login never talks to a concrete validator directly. Callers hold an
//! `Arc<dyn AuthBackend>` chosen at startup: the mock backend checks a single
//! demo credential pair after an artificial delay, while the HTTP backend
//! forwards the pair to a remote endpoint. Swapping one for the other does not
//! touch any call site.
//!
//! ERROR HANDLING
//! ==============
//! Backends report `AuthError`; the session layer folds every variant into a
//! user-facing message so nothing escapes the login boundary.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AuthBackendConfig;

/// Demo account accepted by the mock backend.
pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Default artificial latency of the mock backend.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(500);

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("auth backend error: {0}")]
    Backend(String),
}

/// Provider-neutral credential check. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    /// Check a credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair is rejected and
    /// [`AuthError::Backend`] when the backend itself could not answer.
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Username shown for an account: the part of the email before `@`.
#[must_use]
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

// =============================================================================
// MOCK BACKEND
// =============================================================================

/// Fixed allow-list of one credential pair with simulated network latency.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    email: String,
    password: String,
    delay: Duration,
}

impl MockAuthBackend {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { email: DEMO_EMAIL.into(), password: DEMO_PASSWORD.into(), delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait::async_trait]
impl AuthBackend for MockAuthBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if credentials.email == self.email && credentials.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

// =============================================================================
// HTTP BACKEND
// =============================================================================

/// Forwards credentials as JSON to a remote verification endpoint.
///
/// 2xx accepts, 401/403 rejects, anything else is a backend fault.
pub struct HttpAuthBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthBackend {
    /// # Errors
    ///
    /// Returns [`AuthError::Backend`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Backend(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(&self.url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let status = resp.status().as_u16();
        debug!(%status, url = %self.url, "auth backend responded");
        classify_status(status)
    }
}

/// Map a remote verification status code onto the login outcome.
pub(crate) fn classify_status(status: u16) -> Result<(), AuthError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(AuthError::InvalidCredentials),
        other => Err(AuthError::Backend(format!("unexpected status {other}"))),
    }
}

/// Build the configured backend.
///
/// # Errors
///
/// Returns [`AuthError::Backend`] if the HTTP backend cannot be constructed.
pub fn backend_from_config(config: &AuthBackendConfig) -> Result<Arc<dyn AuthBackend>, AuthError> {
    match config {
        AuthBackendConfig::Mock { delay } => {
            let backend = MockAuthBackend::new(*delay);
            info!(delay_ms = backend.delay().as_millis(), "using mock auth backend");
            Ok(Arc::new(backend))
        }
        AuthBackendConfig::Http { url, timeout } => {
            let backend = HttpAuthBackend::new(url.clone(), *timeout)?;
            if !backend.url().starts_with("https://") {
                warn!(url = backend.url(), "auth backend url is not https");
            }
            info!(url = backend.url(), "using http auth backend");
            Ok(Arc::new(backend))
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
