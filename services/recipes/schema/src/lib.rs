pub mod accounts;
pub mod recipes;
