//! Centralized constants for environment variables, wire format, and limits.

/// Base URL of the credential microservice.
pub const ENV_BASE_URL: &str = "RASPI_CRED_MICROSERVICE_ADDRESS";

/// Any non-empty value disables bearer token attachment.
pub const ENV_LOCAL_ENVIRONMENT: &str = "LOCAL_ENVIRONMENT";

/// Token endpoint used by the HTTP token provider.
pub const ENV_TOKEN_URL: &str = "BEARER_TOKEN_URL";

/// Client key for the client-credentials grant.
pub const ENV_CLIENT_KEY: &str = "CLIENT_KEY";

/// Client secret for the client-credentials grant.
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";

/// Path segment under the base URL that holds device credentials.
pub const DEVICES_SEGMENT: &str = "devices";

/// Content-Type sent with stored credential bodies.
pub const JSON_CONTENT_TYPE: &str = "Application/JSON";

/// Number of random bytes in a generated password.
pub const PASSWORD_LENGTH: usize = 512;

/// Encoded length of a generated password (padded base64).
pub const ENCODED_PASSWORD_LENGTH: usize = PASSWORD_LENGTH.div_ceil(3) * 4;

/// Maximum password size accepted from stdin or a prompt (1 MiB).
pub const MAX_SECRET_SIZE: usize = 1_048_576;

/// Log prefix for errors reported by the command-line entry point.
pub const MAIN_LOG_PREFIX: &str = "[main]";
