//! API credentials.

use std::fmt;

/// Which `Authorization` scheme to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// `Basic base64(public_key:private_key)`.
    Basic,
    /// COv1 HMAC-SHA256 signed header.
    #[default]
    Signature,
}

impl AuthMode {
    /// Map ChargeOver's `basic_auth` boolean to a mode.
    #[must_use]
    pub const fn from_basic_flag(use_basic_auth: bool) -> Self {
        if use_basic_auth {
            Self::Basic
        } else {
            Self::Signature
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Signature => "cov1",
        }
    }
}

/// The four values needed to talk to a ChargeOver account.
///
/// Values are taken as-is; an empty key produces a well-formed header the
/// server will reject.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    account_id: String,
    secret_key: String,
    auth_mode: AuthMode,
    endpoint_host: String,
}

impl Credentials {
    /// Create credentials.
    ///
    /// # Arguments
    ///
    /// * `account_id` - API username / public key
    /// * `secret_key` - API password / private key
    /// * `auth_mode` - Basic or COv1 signature
    /// * `endpoint_host` - Account host name (e.g., `"acme.chargeover.com"`)
    #[must_use]
    pub fn new(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        auth_mode: AuthMode,
        endpoint_host: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            secret_key: secret_key.into(),
            auth_mode,
            endpoint_host: endpoint_host.into(),
        }
    }

    /// Credentials using HTTP Basic authentication.
    #[must_use]
    pub fn basic(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        endpoint_host: impl Into<String>,
    ) -> Self {
        Self::new(account_id, secret_key, AuthMode::Basic, endpoint_host)
    }

    /// Credentials using COv1 signed requests.
    #[must_use]
    pub fn signature(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        endpoint_host: impl Into<String>,
    ) -> Self {
        Self::new(account_id, secret_key, AuthMode::Signature, endpoint_host)
    }

    /// Credentials from ChargeOver's `(user, pass, basic_auth, endpoint)` quadruple.
    #[must_use]
    pub fn from_flag(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        use_basic_auth: bool,
        endpoint_host: impl Into<String>,
    ) -> Self {
        Self::new(
            account_id,
            secret_key,
            AuthMode::from_basic_flag(use_basic_auth),
            endpoint_host,
        )
    }

    /// API username / public key.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// API password / private key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Selected auth scheme.
    #[must_use]
    pub const fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Account host name.
    #[must_use]
    pub fn endpoint_host(&self) -> &str {
        &self.endpoint_host
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("secret_key", &"<redacted>")
            .field("auth_mode", &self.auth_mode)
            .field("endpoint_host", &self.endpoint_host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_maps_to_mode() {
        let basic = Credentials::from_flag("u", "p", true, "host");
        assert_eq!(basic.auth_mode(), AuthMode::Basic);

        let signed = Credentials::from_flag("u", "p", false, "host");
        assert_eq!(signed.auth_mode(), AuthMode::Signature);
    }

    #[test]
    fn every_field_is_stored() {
        let creds = Credentials::signature("pub", "priv", "acme.chargeover.com");
        assert_eq!(creds.account_id(), "pub");
        assert_eq!(creds.secret_key(), "priv");
        assert_eq!(creds.endpoint_host(), "acme.chargeover.com");
    }

    #[test]
    fn empty_values_are_accepted() {
        let creds = Credentials::basic("", "", "");
        assert_eq!(creds.account_id(), "");
        assert_eq!(creds.endpoint_host(), "");
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::basic("pub", "super-secret", "host");
        let debug = format!("{creds:?}");
        assert!(debug.contains("pub"));
        assert!(!debug.contains("super-secret"));
    }
}
