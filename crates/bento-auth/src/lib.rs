//! Account authentication shared across Bento services.
//!
//! Provides JWT issuing/validation, password hashing, bearer-header parsing,
//! the `AccountRepository` port, and the register/login/authenticate use cases.
//! Each service implements the port over its own schema.

pub mod account;
pub mod bearer;
pub mod password;
pub mod token;
pub mod usecase;
