//! `Authorization` header construction.
//!
//! # COv1
//!
//! The signed message is
//!
//! ```text
//! public_key || lowercase(url) || nonce || timestamp || [raw body]
//! ```
//!
//! keyed with the private key. The body is appended exactly as it goes on the
//! wire, so callers must sign the same string they send. The HTTP method is
//! not part of the message.

use std::fmt;

use crate::credentials::{AuthMode, Credentials};
use crate::crypto::{basic_token, hmac_sha256_hex};
use crate::nonce::Nonce;

const SEPARATOR: &str = "||";
const SIGNATURE_METHOD: &str = "HMAC-SHA256";
const VERSION: &str = "1.0";

/// URL scheme used to reach the account host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Production: ChargeOver only serves TLS.
    #[default]
    Https,
    /// Plain HTTP, for local stub servers.
    Http,
}

impl Scheme {
    /// Scheme name without the `://`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

/// A computed COv1 signature.
///
/// `Display` renders the full `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSignature {
    /// The account's public key.
    pub public_key: String,
    /// The nonce mixed into the message.
    pub nonce: Nonce,
    /// Unix timestamp (seconds) mixed into the message.
    pub timestamp: i64,
    /// Lowercase hex HMAC-SHA256 digest.
    pub signature: String,
}

impl fmt::Display for AuthSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChargeOver co_public_key=\"{}\" co_nonce=\"{}\" co_timestamp=\"{}\" \
             co_signature_method=\"{SIGNATURE_METHOD}\" co_version=\"{VERSION}\" \
             co_signature=\"{}\"",
            self.public_key, self.nonce, self.timestamp, self.signature
        )
    }
}

/// Everything needed to issue one request, minus the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequestDescriptor {
    /// HTTP method (e.g., `"POST"`).
    pub method: String,
    /// Request path, as given.
    pub path: String,
    /// Absolute URL the request is sent to.
    pub url: String,
    /// Value for the `Content-Type` header.
    pub content_type: &'static str,
    /// Value for the `Authorization` header.
    pub authorization: String,
}

/// Builds `Authorization` headers for one set of credentials.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    scheme: Scheme,
}

impl Authenticator {
    /// Create an authenticator that targets `https://<endpoint_host>`.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            scheme: Scheme::default(),
        }
    }

    /// Override the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// The credentials in use.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The URL scheme in use.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// `<scheme>://<endpoint_host>`, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}",
            self.scheme.as_str(),
            self.credentials.endpoint_host().trim_end_matches('/')
        )
    }

    /// The absolute request URL, lowercased, as fed into the signature.
    #[must_use]
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path).to_lowercase()
    }

    /// Produce the `Authorization` header value for one request.
    ///
    /// `payload` must be the exact serialized body that will be sent, or
    /// `None` for body-less requests.
    #[must_use]
    pub fn build_auth_header(&self, method: &str, path: &str, payload: Option<&str>) -> String {
        tracing::debug!(
            method = %method,
            path = %path,
            auth_mode = self.credentials.auth_mode().as_str(),
            "Building ChargeOver authorization header"
        );

        match self.credentials.auth_mode() {
            AuthMode::Basic => format!(
                "Basic {}",
                basic_token(self.credentials.account_id(), self.credentials.secret_key())
            ),
            AuthMode::Signature => {
                let timestamp = chrono::Utc::now().timestamp();
                self.sign_with(path, payload, Nonce::generate(), timestamp)
                    .to_string()
            }
        }
    }

    /// Compute a COv1 signature with a fixed nonce and timestamp.
    ///
    /// This ignores the configured [`AuthMode`].
    #[must_use]
    pub fn sign_with(
        &self,
        path: &str,
        payload: Option<&str>,
        nonce: Nonce,
        timestamp: i64,
    ) -> AuthSignature {
        let message = self.signing_message(path, payload, &nonce, timestamp);
        let signature = hmac_sha256_hex(self.credentials.secret_key(), &message);

        AuthSignature {
            public_key: self.credentials.account_id().to_string(),
            nonce,
            timestamp,
            signature,
        }
    }

    /// Build the full request description for one call.
    #[must_use]
    pub fn describe(
        &self,
        method: &str,
        path: &str,
        payload: Option<&str>,
    ) -> SignedRequestDescriptor {
        SignedRequestDescriptor {
            method: method.to_string(),
            path: path.to_string(),
            url: format!("{}{}", self.base_url(), path),
            content_type: "application/json",
            authorization: self.build_auth_header(method, path, payload),
        }
    }

    fn signing_message(
        &self,
        path: &str,
        payload: Option<&str>,
        nonce: &Nonce,
        timestamp: i64,
    ) -> String {
        let mut message = [
            self.credentials.account_id(),
            self.canonical_url(path).as_str(),
            nonce.as_str(),
            timestamp.to_string().as_str(),
        ]
        .join(SEPARATOR);
        message.push_str(SEPARATOR);

        if let Some(body) = payload.filter(|body| !body.is_empty()) {
            message.push_str(body);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "example.chargeover.com";
    const PATH: &str = "/api/v3/item";

    fn signer() -> Authenticator {
        Authenticator::new(Credentials::signature("pubkey", "secret", HOST))
    }

    #[test]
    fn basic_mode_returns_base64_token() {
        let auth = Authenticator::new(Credentials::basic("u", "p", HOST));
        assert_eq!(auth.build_auth_header("GET", PATH, None), "Basic dTpw");
    }

    #[test]
    fn basic_mode_ignores_payload() {
        let auth = Authenticator::new(Credentials::basic("u", "p", HOST));
        assert_eq!(
            auth.build_auth_header("POST", PATH, Some(r#"{"a":1}"#)),
            "Basic dTpw"
        );
    }

    #[test]
    fn signature_matches_reference_value() {
        let sig = signer().sign_with(PATH, None, Nonce::new("AbC123xyZ"), 1_700_000_000);
        assert_eq!(
            sig.signature,
            "72f7f17856209c5753a03c43c2f271b6c079f8c77d35fca25555ba929a0b63a4"
        );
    }

    #[test]
    fn signature_covers_raw_payload() {
        let sig = signer().sign_with(
            PATH,
            Some(r#"{"name":"Widget"}"#),
            Nonce::new("AbC123xyZ"),
            1_700_000_000,
        );
        assert_eq!(
            sig.signature,
            "abff9069ee9dbcd61acfda9d6d6d5a71c681d25e4d8c4051ebed657caf439a53"
        );
    }

    #[test]
    fn empty_payload_is_not_appended() {
        let nonce = Nonce::new("AbC123xyZ");
        let none = signer().sign_with(PATH, None, nonce.clone(), 1);
        let empty = signer().sign_with(PATH, Some(""), nonce, 1);
        assert_eq!(none.signature, empty.signature);
    }

    #[test]
    fn signature_is_reproducible() {
        let a = signer().sign_with(PATH, Some("{}"), Nonce::new("n"), 42);
        let b = signer().sign_with(PATH, Some("{}"), Nonce::new("n"), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_url_is_lowercase() {
        let auth = Authenticator::new(Credentials::signature("k", "s", "Example.ChargeOver.com"));
        assert_eq!(
            auth.canonical_url("/API/V3/Item"),
            "https://example.chargeover.com/api/v3/item"
        );

        let upper = auth.sign_with("/API/V3/ITEM", None, Nonce::new("n"), 7);
        let lower = auth.sign_with("/api/v3/item", None, Nonce::new("n"), 7);
        assert_eq!(upper.signature, lower.signature);
    }

    #[test]
    fn header_has_fixed_format() {
        let sig = signer().sign_with(PATH, None, Nonce::new("AbC123xyZ"), 1_700_000_000);
        assert_eq!(
            sig.to_string(),
            "ChargeOver co_public_key=\"pubkey\" co_nonce=\"AbC123xyZ\" \
             co_timestamp=\"1700000000\" co_signature_method=\"HMAC-SHA256\" \
             co_version=\"1.0\" \
             co_signature=\"72f7f17856209c5753a03c43c2f271b6c079f8c77d35fca25555ba929a0b63a4\""
        );
    }

    #[test]
    fn generated_headers_use_fresh_nonces() {
        let auth = signer();
        let a = auth.build_auth_header("GET", PATH, None);
        let b = auth.build_auth_header("GET", PATH, None);

        let nonce_of = |header: &str| {
            let start = header.find("co_nonce=\"").unwrap() + "co_nonce=\"".len();
            header[start..start + Nonce::LENGTH].to_string()
        };
        assert!(a.starts_with("ChargeOver co_public_key=\"pubkey\""));
        assert!(nonce_of(&a).chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(nonce_of(&a), nonce_of(&b));
    }

    #[test]
    fn generated_header_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let header = signer().build_auth_header("GET", PATH, None);
        let after = chrono::Utc::now().timestamp();

        let start = header.find("co_timestamp=\"").unwrap() + "co_timestamp=\"".len();
        let end = start + header[start..].find('"').unwrap();
        let ts: i64 = header[start..end].parse().unwrap();
        assert!((before..=after).contains(&ts));
    }

    #[test]
    fn descriptor_targets_endpoint_host() {
        let auth = Authenticator::new(Credentials::basic("u", "p", "127.0.0.1:8080"))
            .with_scheme(Scheme::Http);
        let desc = auth.describe("GET", PATH, None);

        assert_eq!(desc.method, "GET");
        assert_eq!(desc.url, "http://127.0.0.1:8080/api/v3/item");
        assert_eq!(desc.content_type, "application/json");
        assert_eq!(desc.authorization, "Basic dTpw");
    }
}
