//! Core business logic modules.

pub mod client;
pub mod error;
pub mod password;
pub mod token;
