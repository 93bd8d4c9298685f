//! Authentication support for the titledesk TUI.
//!
//! This module provides credential storage and management. The login and
//! registration flows themselves live in [`crate::session`].

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager};
