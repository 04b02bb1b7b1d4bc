//! Error taxonomy for credential microservice calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// Required configuration is missing or empty.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed URL, empty hostname, or request builder failure.
    #[error("unable to build request: {0}")]
    InvalidRequest(String),

    /// The token provider failed; the request was never sent.
    #[error("cannot get bearer token: {0}")]
    Token(String),

    #[error("unable to complete request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unable to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// The service answered a fetch with a bare JSON string.
    #[error("password not found: {0}")]
    NotFound(String),

    /// The body was neither a credential record nor a JSON string.
    #[error("unable to parse response body: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unable to marshal credential: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("non-200 response: {0}")]
    UnexpectedStatus(u16),

    #[error("secure random source failed: {0}")]
    RandomSource(#[source] rand::Error),
}

impl CredentialError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CredentialError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_unexpected_status() {
        assert_eq!(CredentialError::UnexpectedStatus(404).status(), Some(404));
        assert_eq!(CredentialError::NotFound("x".into()).status(), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CredentialError::UnexpectedStatus(500).to_string(),
            "non-200 response: 500"
        );
        assert_eq!(
            CredentialError::NotFound("device not found".into()).to_string(),
            "password not found: device not found"
        );
    }
}
