//! Test utilities for Bento services.
//!
//! Provides bearer-token helpers and an in-memory SQLite connection.
//! Import from `[dev-dependencies]` only; never in production code.

pub mod auth;
pub mod db;
