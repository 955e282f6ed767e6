//! Runtime configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_DELAY_MS: u64 = 500;
pub const DEFAULT_AUTH_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unknown AUTH_BACKEND: {0}")]
    UnknownBackend(String),
    #[error("missing required env var: {var}")]
    MissingVar { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthBackendConfig {
    Mock { delay: Duration },
    Http { url: String, timeout: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub auth: AuthBackendConfig,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_BACKEND`: `mock` (default) or `http`
    /// - `AUTH_DELAY_MS`: mock backend latency, default 500
    /// - `AUTH_HTTP_URL`: required when `AUTH_BACKEND=http`
    /// - `AUTH_HTTP_TIMEOUT_SECS`: default 10
    /// - `COOKIE_SECURE`: mark the session cookie `Secure`, default false
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unparseable port, an unknown backend,
    /// or a missing backend URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let auth = match get("AUTH_BACKEND").as_deref().unwrap_or("mock") {
            "mock" => AuthBackendConfig::Mock {
                delay: Duration::from_millis(parse_or(get("AUTH_DELAY_MS"), DEFAULT_AUTH_DELAY_MS)),
            },
            "http" => {
                let url = get("AUTH_HTTP_URL").ok_or_else(|| ConfigError::MissingVar { var: "AUTH_HTTP_URL".into() })?;
                AuthBackendConfig::Http {
                    url: url.trim_end_matches('/').to_owned(),
                    timeout: Duration::from_secs(parse_or(get("AUTH_HTTP_TIMEOUT_SECS"), DEFAULT_AUTH_HTTP_TIMEOUT_SECS)),
                }
            }
            other => return Err(ConfigError::UnknownBackend(other.to_owned())),
        };

        let cookie_secure = get("COOKIE_SECURE").as_deref().and_then(parse_bool).unwrap_or(false);

        Ok(Self { port, auth, cookie_secure })
    }
}

/// Lenient boolean: `1/true/yes/on` and `0/false/no/off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
