//! ChargeOver HTTP client implementation.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::time::Duration;

use chargeover_auth::{Authenticator, Credentials, Scheme};
use chargeover_core::{ApiEnvelope, Item, ItemId, ItemInput};

use crate::error::{ClientError, Result};

const ITEM_PATH: &str = "/api/v3/item";

/// ChargeOver API client.
///
/// Cheap to clone; clones share the connection pool. Every call is one
/// request with no retries. Dropping the returned future cancels the call.
#[derive(Debug, Clone)]
pub struct ChargeOverClient {
    client: Client,
    auth: Authenticator,
}

impl ChargeOverClient {
    /// Create a new client with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn with_options(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            auth: Authenticator::new(credentials).with_scheme(options.scheme),
        })
    }

    /// The authenticator used to sign requests.
    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Create an item, product, or discount.
    ///
    /// Returns the id ChargeOver assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if ChargeOver rejects the item, and
    /// [`ClientError::Internal`] on transport or decoding failures.
    pub async fn create_item(&self, input: &ItemInput) -> Result<ItemId> {
        let body = serde_json::to_string(input)
            .map_err(|e| ClientError::internal("Failed to serialize item", &e))?;

        let response = self.send(Method::POST, ITEM_PATH, Some(body)).await?;

        let item_id = response
            .get("item_id")
            .cloned()
            .ok_or_else(|| {
                tracing::error!(response = %response, "Create item response has no item_id");
                ClientError::Internal
            })
            .and_then(|id| {
                serde_json::from_value::<ItemId>(id)
                    .map_err(|e| ClientError::internal("Invalid item_id in response", &e))
            })?;

        tracing::info!(item_id = %item_id, name = %input.name, "Created ChargeOver item");
        Ok(item_id)
    }

    /// List every item on the account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if ChargeOver reports an error, and
    /// [`ClientError::Internal`] on transport or decoding failures.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.list_items_raw().await?;
        serde_json::from_value(response)
            .map_err(|e| ClientError::internal("Failed to decode item list", &e))
    }

    /// List every item, returning the `response` array untouched.
    ///
    /// # Errors
    ///
    /// Same as [`ChargeOverClient::list_items`].
    pub async fn list_items_raw(&self) -> Result<serde_json::Value> {
        self.send(Method::GET, ITEM_PATH, None).await
    }

    /// Send one signed request and unwrap the response envelope.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<serde_json::Value> {
        let request = self.auth.describe(method.as_str(), path, body.as_deref());

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            auth_mode = self.auth.credentials().auth_mode().as_str(),
            "Sending ChargeOver request"
        );

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(CONTENT_TYPE, request.content_type)
            .header(AUTHORIZATION, request.authorization);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::internal("ChargeOver request failed", &e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::internal("Failed to read ChargeOver response", &e))?;

        let envelope: ApiEnvelope = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(
                status = %status,
                body = %String::from_utf8_lossy(&bytes),
                error = %e,
                "Unparsable ChargeOver response"
            );
            ClientError::Internal
        })?;

        if envelope.is_error() {
            let code = envelope.code.unwrap_or_else(|| status.as_u16());
            let message = envelope.message.unwrap_or_default();
            tracing::warn!(code, message = %message, path = %path, "ChargeOver returned an error");
            return Err(ClientError::Api { code, message });
        }

        Ok(envelope.response)
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// URL scheme (default: https).
    pub scheme: Scheme,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            scheme: Scheme::Https,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }
}
