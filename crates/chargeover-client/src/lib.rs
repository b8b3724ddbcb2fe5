//! ChargeOver Client SDK.
//!
//! This crate provides an async client for the ChargeOver subscription-billing
//! REST API. Requests are authenticated with either HTTP Basic or ChargeOver's
//! COv1 HMAC-SHA256 signed header (see [`chargeover_auth`]).
//!
//! # Example
//!
//! ```no_run
//! use chargeover_client::{ChargeOverClient, Credentials, ItemInput, Paycycle};
//!
//! # async fn example() -> Result<(), chargeover_client::ClientError> {
//! let client = ChargeOverClient::new(Credentials::signature(
//!     "public-key",
//!     "private-key",
//!     "acme.chargeover.com",
//! ))?;
//!
//! let item_id = client
//!     .create_item(&ItemInput::service("Gold plan", 49.0, Paycycle::Monthly))
//!     .await?;
//! println!("Created item {item_id}");
//!
//! for item in client.list_items().await? {
//!     println!("{}: {:?}", item.item_id, item.name());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod unsupported;

pub use chargeover_auth::{AuthMode, Credentials, Scheme};
pub use chargeover_core::*;
pub use client::{ChargeOverClient, ClientOptions};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
