//! Device credential record exchanged with the credential microservice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored device password, keyed by hostname.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCredential {
    pub hostname: String,
    pub password: String,
}

impl DeviceCredential {
    pub fn new(hostname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for DeviceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceCredential")
            .field("hostname", &self.hostname)
            .field("password", &"<redacted>")
            .finish()
    }
}
