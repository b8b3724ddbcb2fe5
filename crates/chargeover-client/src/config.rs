//! Client configuration.

use serde::Deserialize;
use std::path::Path;

use chargeover_auth::{AuthMode, Credentials, Scheme};

use crate::client::{ChargeOverClient, ClientOptions};
use crate::error::{ClientError, Result};

/// Paths searched for a secrets file, in order.
const SECRET_PATHS: [&str; 3] = [
    ".secrets/chargeover.json",
    "../.secrets/chargeover.json",
    "../../.secrets/chargeover.json",
];

/// Client configuration loaded from a secrets file or environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account credentials.
    pub credentials: Credentials,

    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

/// ChargeOver secrets file structure.
#[derive(Debug, Deserialize)]
struct ChargeOverSecrets {
    endpoint: String,
    username: String,
    password: String,
    #[serde(default)]
    basic_auth: bool,
    #[serde(default)]
    timeout_seconds: Option<u64>,
}

impl ClientConfig {
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Load configuration from a secrets file, falling back to environment variables.
    ///
    /// Environment variables: `CHARGEOVER_ENDPOINT`, `CHARGEOVER_USERNAME`,
    /// `CHARGEOVER_PASSWORD`, `CHARGEOVER_BASIC_AUTH`, `CHARGEOVER_TIMEOUT_SECONDS`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a required value is missing.
    pub fn from_env() -> Result<Self> {
        for path in &SECRET_PATHS {
            if let Ok(config) = Self::from_secrets_file(path) {
                tracing::info!(path = %path, "Loaded ChargeOver secrets from file");
                return Ok(config);
            }
        }

        tracing::debug!("ChargeOver secrets file not found, using environment variables");
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from a JSON secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file is missing or malformed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: ChargeOverSecrets = serde_json::from_str(&contents).map_err(|e| {
            ClientError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;

        Ok(Self {
            credentials: Credentials::from_flag(
                secrets.username,
                secrets.password,
                secrets.basic_auth,
                secrets.endpoint,
            ),
            timeout_seconds: secrets
                .timeout_seconds
                .unwrap_or(Self::DEFAULT_TIMEOUT_SECONDS),
        })
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if endpoint, username, or
    /// password is missing.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ClientError::Configuration(format!("{key} is not set")))
        };

        let endpoint = required("CHARGEOVER_ENDPOINT")?;
        let username = required("CHARGEOVER_USERNAME")?;
        let password = required("CHARGEOVER_PASSWORD")?;

        let auth_mode = AuthMode::from_basic_flag(
            lookup("CHARGEOVER_BASIC_AUTH")
                .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")),
        );
        let timeout_seconds = lookup("CHARGEOVER_TIMEOUT_SECONDS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            credentials: Credentials::new(username, password, auth_mode, endpoint),
            timeout_seconds,
        })
    }

    /// Build a client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn into_client(self) -> Result<ChargeOverClient> {
        ChargeOverClient::with_options(
            self.credentials,
            ClientOptions::default()
                .with_scheme(Scheme::Https)
                .with_timeout_seconds(self.timeout_seconds),
        )
    }
}
