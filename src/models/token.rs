//! Bearer token and token endpoint payloads.

use serde::Deserialize;
use std::fmt;

/// Opaque bearer token, valid for a single outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Response body of an OAuth2 client-credentials token endpoint.
#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
