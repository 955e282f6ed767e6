//! Route guard: decides whether a page navigation proceeds or redirects.
//!
//! The decision is a pure function of the requested path and whether the
//! current session is authenticated. It is recomputed on every navigation.

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";
/// Default protected page, shown after login.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Whether `path` is behind the login gate. Everything except the exact
/// login path is, including unknown paths and `/login/`.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    path != LOGIN_PATH
}

#[must_use]
pub fn guard(path: &str, authenticated: bool) -> Navigation {
    match (is_protected(path), authenticated) {
        (true, false) => Navigation::Redirect(LOGIN_PATH),
        (false, true) => Navigation::Redirect(HOME_PATH),
        _ => Navigation::Proceed,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
