//! Bearer token providers.
//!
//! The client asks a [`TokenProvider`] for a fresh token before every request
//! (unless running in local mode). [`HttpTokenProvider`] performs an OAuth2
//! client-credentials grant; tests substitute their own implementations.

use crate::core::error::CredentialError;
use crate::models::config::TokenConfig;
use crate::models::token::{BearerToken, TokenResponse};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

/// Capability to issue a bearer token for one outgoing request.
pub trait TokenProvider {
    fn issue_token(&self) -> Result<BearerToken, CredentialError>;
}

/// Fetches tokens from a client-credentials token endpoint.
pub struct HttpTokenProvider {
    http: Client,
    config: TokenConfig,
}

impl HttpTokenProvider {
    pub fn new(config: TokenConfig) -> Result<Self, CredentialError> {
        let http = Client::builder()
            .build()
            .map_err(|e| CredentialError::Token(format!("build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }
}

impl TokenProvider for HttpTokenProvider {
    fn issue_token(&self) -> Result<BearerToken, CredentialError> {
        if let Some(field) = self.config.missing_field() {
            return Err(CredentialError::Token(format!("{} is not set", field)));
        }

        debug!(url = %self.config.token_url, "requesting bearer token");
        let resp = self
            .http
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_key, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|e| CredentialError::Token(format!("token request failed: {}", e)))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(CredentialError::Token(format!(
                "token endpoint returned {}",
                status.as_u16()
            )));
        }

        let body: TokenResponse = resp
            .json()
            .map_err(|e| CredentialError::Token(format!("invalid token response: {}", e)))?;
        if body.access_token.is_empty() {
            return Err(CredentialError::Token("token endpoint returned an empty token".into()));
        }
        Ok(BearerToken::new(body.access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_fails_before_request() {
        // Unroutable URL: if a request were attempted the error would differ.
        let provider =
            HttpTokenProvider::new(TokenConfig::new("http://127.0.0.1:9/token", "", "s")).unwrap();
        let err = provider.issue_token().unwrap_err();
        assert!(matches!(err, CredentialError::Token(_)));
        assert!(err.to_string().contains("CLIENT_KEY is not set"));
    }
}
