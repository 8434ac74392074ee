//! Service plumbing shared by every Bento HTTP service.

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
