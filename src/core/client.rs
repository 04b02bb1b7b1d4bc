//! HTTP client for the credential microservice.
//!
//! Every operation is a single blocking round trip against
//! `{base_url}/devices/{hostname}`. Nothing is retried or cached; failures are
//! logged and returned to the caller as they happen.

use crate::constants;
use crate::core::error::CredentialError;
use crate::core::token::TokenProvider;
use crate::models::config::ClientConfig;
use crate::models::credential::DeviceCredential;
use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use tracing::{debug, error, info};

fn logged(err: CredentialError) -> CredentialError {
    error!("{}", err);
    err
}

pub struct CredentialClient<P> {
    http: Client,
    config: ClientConfig,
    tokens: P,
}

impl<P: TokenProvider> CredentialClient<P> {
    pub fn new(config: ClientConfig, tokens: P) -> Result<Self, CredentialError> {
        let http = Client::builder()
            .build()
            .map_err(|e| logged(CredentialError::InvalidRequest(format!("build HTTP client: {}", e))))?;
        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    pub fn token_provider(&self) -> &P {
        &self.tokens
    }

    /// `{base_url}/devices/{hostname}`, with no query string.
    ///
    /// The hostname is always a single path segment: `/`, `?` and `#` are
    /// percent-encoded, and `.` or `..` are rejected.
    pub fn device_url(&self, hostname: &str) -> Result<Url, CredentialError> {
        if hostname.is_empty() {
            return Err(logged(CredentialError::InvalidRequest(
                "hostname cannot be empty".into(),
            )));
        }
        if hostname == "." || hostname == ".." {
            return Err(logged(CredentialError::InvalidRequest(format!(
                "invalid hostname: {}",
                hostname
            ))));
        }

        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            logged(CredentialError::InvalidRequest(format!(
                "{}: {}",
                self.config.base_url, e
            )))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                logged(CredentialError::InvalidRequest(format!(
                    "{}: cannot be a base URL",
                    self.config.base_url
                )))
            })?
            .pop_if_empty()
            .push(constants::DEVICES_SEGMENT)
            .push(hostname);
        Ok(url)
    }

    /// Return the stored password for `hostname`.
    pub fn fetch(&self, hostname: &str) -> Result<String, CredentialError> {
        let mut req = self.build(Method::GET, hostname, None)?;
        self.attach_bearer_token(&mut req)?;
        let resp = self.send(req)?;
        let body = resp
            .bytes()
            .map_err(|e| logged(CredentialError::ResponseRead(e)))?;
        parse_fetch_body(&body)
    }

    /// Store `cred` under its hostname. Only HTTP 200 counts as success.
    pub fn store(&self, cred: &DeviceCredential) -> Result<(), CredentialError> {
        let body =
            serde_json::to_vec(cred).map_err(|e| logged(CredentialError::Serialize(e)))?;
        let mut req = self.build(Method::POST, &cred.hostname, Some(body))?;
        self.attach_bearer_token(&mut req)?;
        let resp = self.send(req)?;
        expect_ok(&resp)
    }

    /// Remove the password for `hostname`. Only HTTP 200 counts as success.
    pub fn delete(&self, hostname: &str) -> Result<(), CredentialError> {
        let mut req = self.build(Method::DELETE, hostname, None)?;
        self.attach_bearer_token(&mut req)?;
        let resp = self.send(req)?;
        expect_ok(&resp)
    }

    /// Set `Authorization: Bearer <token>` unless running in local mode.
    pub fn attach_bearer_token(&self, request: &mut Request) -> Result<(), CredentialError> {
        if self.config.local_environment {
            return Ok(());
        }

        info!("setting bearer token...");
        let token = self.tokens.issue_token().map_err(logged)?;
        let mut value = HeaderValue::from_str(&token.header_value()).map_err(|e| {
            logged(CredentialError::Token(format!("invalid token characters: {}", e)))
        })?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    fn build(
        &self,
        method: Method,
        hostname: &str,
        json_body: Option<Vec<u8>>,
    ) -> Result<Request, CredentialError> {
        let url = self.device_url(hostname)?;
        let mut builder = self.http.request(method, url);
        if let Some(body) = json_body {
            builder = builder
                .header(CONTENT_TYPE, constants::JSON_CONTENT_TYPE)
                .body(body);
        }
        builder
            .build()
            .map_err(|e| logged(CredentialError::InvalidRequest(e.to_string())))
    }

    fn send(&self, req: Request) -> Result<Response, CredentialError> {
        debug!(method = %req.method(), url = %req.url(), "sending request");
        self.http
            .execute(req)
            .map_err(|e| logged(CredentialError::Transport(e)))
    }
}

fn expect_ok(resp: &Response) -> Result<(), CredentialError> {
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(logged(CredentialError::UnexpectedStatus(status.as_u16())));
    }
    Ok(())
}

/// Interpret a fetch response body.
///
/// A credential record yields its password. A bare JSON string is the
/// service's error message. Anything else reports the record parse error.
pub fn parse_fetch_body(body: &[u8]) -> Result<String, CredentialError> {
    let record_err = match serde_json::from_slice::<DeviceCredential>(body) {
        Ok(cred) => return Ok(cred.password),
        Err(e) => e,
    };
    match serde_json::from_slice::<String>(body) {
        Ok(msg) => Err(CredentialError::NotFound(msg)),
        Err(_) => Err(logged(CredentialError::Parse(record_err))),
    }
}
