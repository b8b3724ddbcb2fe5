//! Core types for the ChargeOver client.
//!
//! This crate provides the domain types shared by the auth and client crates:
//!
//! - **Identifiers**: `ItemId`, `CustomerId`, `SubscriptionId`, `InvoiceId`, `TransactionId`
//! - **Items**: `ItemInput`, `Item`, `PriceModel`, `Paycycle`, `PricingModel`
//! - **Envelope**: `ApiEnvelope`, the `{status, code, message, response}` wrapper
//!   every ChargeOver v3 response arrives in

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod envelope;
pub mod ids;
pub mod item;

pub use envelope::ApiEnvelope;
pub use ids::{CustomerId, IdError, InvoiceId, ItemId, SubscriptionId, TransactionId};
pub use item::{Item, ItemInput, ItemType, Paycycle, PriceModel, PricingModel};
