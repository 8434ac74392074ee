pub mod account;
pub mod guard;
pub mod iris;
