//! Data structures shared by the client and the CLI.

pub mod config;
pub mod credential;
pub mod token;
