//! Identifier types for ChargeOver resources.
//!
//! ChargeOver keys every resource by a positive integer. Each resource gets
//! its own newtype so an invoice id can never be passed where an item id is
//! expected.
//!
//! # Macro-based ID Types
//!
//! The `integer_id_type!` macro reduces boilerplate for the identifier types,
//! ensuring consistent implementation of serialization, parsing, and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define an integer identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `u64` with implementations for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as a JSON number)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<u64>`, `From<$name> for u64`
///
/// # Example
///
/// ```ignore
/// integer_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::new(7).unwrap();
/// let parsed: MyId = "7".parse().unwrap();
/// ```
macro_rules! integer_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "u64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// Create an identifier, rejecting zero (ChargeOver ids start at 1).
            ///
            /// # Errors
            ///
            /// Returns [`IdError::Zero`] when `value` is zero.
            pub const fn new(value: u64) -> Result<Self, IdError> {
                if value == 0 {
                    return Err(IdError::Zero);
                }
                Ok(Self(value))
            }

            /// Return the raw integer value.
            #[must_use]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| IdError::NotAnInteger(s.to_string()))?;
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = IdError;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id_type!(ItemId, "An item (product, service, or discount) identifier.");
integer_id_type!(CustomerId, "A customer identifier.");
integer_id_type!(
    SubscriptionId,
    "A recurring subscription identifier.\n\nChargeOver calls these `package_id` on the wire."
);
integer_id_type!(InvoiceId, "An invoice identifier.");
integer_id_type!(TransactionId, "A payment or refund transaction identifier.");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a non-negative integer.
    #[error("invalid identifier: {0:?} is not an integer")]
    NotAnInteger(String),

    /// Zero is never a valid ChargeOver identifier.
    #[error("invalid identifier: 0")]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_parses_from_string() {
        let id: ItemId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn item_id_rejects_garbage_and_zero() {
        assert!(matches!(
            "abc".parse::<ItemId>(),
            Err(IdError::NotAnInteger(_))
        ));
        assert_eq!("0".parse::<ItemId>(), Err(IdError::Zero));
        assert_eq!(ItemId::new(0), Err(IdError::Zero));
    }

    #[test]
    fn ids_serialize_as_numbers() {
        let id = InvoiceId::new(10).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "10");

        let parsed: CustomerId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.get(), 3);
    }

    #[test]
    fn zero_is_rejected_on_deserialize() {
        assert!(serde_json::from_str::<TransactionId>("0").is_err());
    }

    #[test]
    fn debug_names_the_type() {
        let id = SubscriptionId::new(5).unwrap();
        assert_eq!(format!("{id:?}"), "SubscriptionId(5)");
    }
}
