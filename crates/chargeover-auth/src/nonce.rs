//! Random nonces for COv1 signatures.

use rand::Rng;
use std::fmt;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A single-use token mixed into every signed request.
///
/// The server rejects reused nonces; nothing is tracked client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Number of characters in a generated nonce.
    pub const LENGTH: usize = 9;

    /// Draw a fresh nonce uniformly from `[A-Za-z0-9]`.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let value = (0..Self::LENGTH)
            .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
            .collect();
        Self(value)
    }

    /// Wrap a caller-chosen value, e.g. to reproduce a captured signature.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The nonce text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_nonce_is_nine_alphanumerics() {
        for _ in 0..100 {
            let nonce = Nonce::generate();
            assert_eq!(nonce.as_str().len(), Nonce::LENGTH);
            assert!(nonce.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn consecutive_nonces_differ() {
        let a = Nonce::generate();
        let b = Nonce::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_nonce_is_kept_verbatim() {
        assert_eq!(Nonce::new("AbC123xyZ").to_string(), "AbC123xyZ");
    }
}
