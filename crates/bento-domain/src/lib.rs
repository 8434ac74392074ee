//! Domain types shared across all Bento services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod id;
pub mod iris;
pub mod pagination;
pub mod recipe;
