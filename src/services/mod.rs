//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the session, directory, and settings logic so route
//! handlers can stay focused on HTTP translation and cookie plumbing.

pub mod auth;
pub mod dashboard;
pub mod directory;
pub mod guard;
pub mod session;
pub mod settings;
pub mod validation;
