//! Device password client for the credential microservice.
//!
//! Fetches, stores, and deletes device passwords over HTTP, authenticating
//! each request with a bearer token, and generates random passwords.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Business logic (client, token providers, password generation)
//! - `models` — Data structures (credential record, token, configuration)
//! - `util` — Logging setup

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
