//! Request authentication for the ChargeOver REST API.
//!
//! ChargeOver accepts two `Authorization` schemes:
//!
//! - **HTTP Basic**: `Basic base64(public_key:private_key)`
//! - **COv1**: a per-request HMAC-SHA256 signature over the account key, the
//!   lowercased request URL, a random nonce, the Unix timestamp, and the raw
//!   request body
//!
//! ```
//! use chargeover_auth::{Authenticator, Credentials};
//!
//! let auth = Authenticator::new(Credentials::basic("u", "p", "example.chargeover.com"));
//! assert_eq!(auth.build_auth_header("GET", "/api/v3/item", None), "Basic dTpw");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod credentials;
pub mod crypto;
pub mod nonce;
pub mod signer;

pub use credentials::{AuthMode, Credentials};
pub use nonce::Nonce;
pub use signer::{AuthSignature, Authenticator, Scheme, SignedRequestDescriptor};
