//! titledesk - a terminal client for the title search workflow service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod polling;
pub mod retry;
pub mod session;
pub mod traits;
pub mod ui;
pub mod upload;
pub mod validate;
