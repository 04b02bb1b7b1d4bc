//! Client and token provider configuration.

use crate::constants;
use crate::core::error::CredentialError;
use std::env;

/// Settings for talking to the credential microservice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; requests go to `{base_url}/devices/{hostname}`.
    pub base_url: String,
    /// When set, no `Authorization` header is attached.
    pub local_environment: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, local_environment: bool) -> Self {
        Self {
            base_url: base_url.into(),
            local_environment,
        }
    }

    /// Read the base URL and local-mode flag from the environment.
    pub fn from_env() -> Result<Self, CredentialError> {
        let base_url = env::var(constants::ENV_BASE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                CredentialError::Config(format!("{} is not set", constants::ENV_BASE_URL))
            })?;
        Ok(Self {
            base_url,
            local_environment: local_environment_from_env(),
        })
    }
}

/// True when `LOCAL_ENVIRONMENT` holds any non-empty value.
pub fn local_environment_from_env() -> bool {
    env::var_os(constants::ENV_LOCAL_ENVIRONMENT)
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

/// Settings for the client-credentials token endpoint.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenConfig {
    pub token_url: String,
    pub client_key: String,
    pub client_secret: String,
}

impl TokenConfig {
    pub fn new(
        token_url: impl Into<String>,
        client_key: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            client_key: client_key.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Missing variables are left empty and reported when a token is requested,
    /// so local mode works without them.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();
        Self {
            token_url: var(constants::ENV_TOKEN_URL),
            client_key: var(constants::ENV_CLIENT_KEY),
            client_secret: var(constants::ENV_CLIENT_SECRET),
        }
    }

    /// Name of the first required setting that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.token_url.is_empty() {
            Some(constants::ENV_TOKEN_URL)
        } else if self.client_key.is_empty() {
            Some(constants::ENV_CLIENT_KEY)
        } else if self.client_secret.is_empty() {
            Some(constants::ENV_CLIENT_SECRET)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("token_url", &self.token_url)
            .field("client_key", &self.client_key)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_from_env() {
        temp_env::with_vars(
            [
                (constants::ENV_BASE_URL, Some("http://creds.local:8080")),
                (constants::ENV_LOCAL_ENVIRONMENT, None),
            ],
            || {
                let cfg = ClientConfig::from_env().unwrap();
                assert_eq!(cfg.base_url, "http://creds.local:8080");
                assert!(!cfg.local_environment);
            },
        );
    }

    #[test]
    fn test_client_config_missing_base_url() {
        temp_env::with_var_unset(constants::ENV_BASE_URL, || {
            let err = ClientConfig::from_env().unwrap_err();
            assert!(matches!(err, CredentialError::Config(_)));
            assert!(err.to_string().contains(constants::ENV_BASE_URL));
        });
    }

    #[test]
    fn test_client_config_empty_base_url() {
        temp_env::with_var(constants::ENV_BASE_URL, Some(""), || {
            assert!(ClientConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_local_environment_any_non_empty_value() {
        temp_env::with_var(constants::ENV_LOCAL_ENVIRONMENT, Some("false"), || {
            assert!(local_environment_from_env());
        });
        temp_env::with_var(constants::ENV_LOCAL_ENVIRONMENT, Some("1"), || {
            assert!(local_environment_from_env());
        });
    }

    #[test]
    fn test_local_environment_empty_or_unset() {
        temp_env::with_var(constants::ENV_LOCAL_ENVIRONMENT, Some(""), || {
            assert!(!local_environment_from_env());
        });
        temp_env::with_var_unset(constants::ENV_LOCAL_ENVIRONMENT, || {
            assert!(!local_environment_from_env());
        });
    }

    #[test]
    fn test_token_config_from_env() {
        temp_env::with_vars(
            [
                (constants::ENV_TOKEN_URL, Some("https://auth.local/token")),
                (constants::ENV_CLIENT_KEY, Some("key")),
                (constants::ENV_CLIENT_SECRET, None),
            ],
            || {
                let cfg = TokenConfig::from_env();
                assert_eq!(cfg.token_url, "https://auth.local/token");
                assert_eq!(cfg.client_key, "key");
                assert_eq!(cfg.missing_field(), Some(constants::ENV_CLIENT_SECRET));
            },
        );
    }

    #[test]
    fn test_token_config_debug_redacts_secret() {
        let cfg = TokenConfig::new("u", "k", "s3cret");
        assert!(!format!("{:?}", cfg).contains("s3cret"));
        assert_eq!(cfg.missing_field(), None);
    }
}
