//! Customer, subscription, invoice, and transaction operations.
//!
//! These mirror ChargeOver's resource surface but are not implemented yet.
//! Each one logs and fails with [`ClientError::NotSupported`] without
//! touching the network.

#![allow(clippy::unused_async)]

use chargeover_core::{CustomerId, InvoiceId, SubscriptionId, TransactionId};

use crate::client::ChargeOverClient;
use crate::error::{ClientError, Result};

fn not_supported<T>(operation: &'static str) -> Result<T> {
    tracing::warn!(operation, "ChargeOver operation not implemented");
    Err(ClientError::NotSupported { operation })
}

impl ChargeOverClient {
    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn create_customer(&self, _customer: serde_json::Value) -> Result<CustomerId> {
        not_supported("create_customer")
    }

    /// Fetch a customer.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn get_customer(&self, customer_id: CustomerId) -> Result<serde_json::Value> {
        tracing::debug!(customer_id = %customer_id, "get_customer");
        not_supported("get_customer")
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn update_customer(
        &self,
        customer_id: CustomerId,
        _changes: serde_json::Value,
    ) -> Result<CustomerId> {
        tracing::debug!(customer_id = %customer_id, "update_customer");
        not_supported("update_customer")
    }

    /// Start a recurring subscription.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn create_subscription(
        &self,
        _subscription: serde_json::Value,
    ) -> Result<SubscriptionId> {
        not_supported("create_subscription")
    }

    /// Fetch a subscription.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn get_subscription(
        &self,
        subscription_id: SubscriptionId,
    ) -> Result<serde_json::Value> {
        tracing::debug!(subscription_id = %subscription_id, "get_subscription");
        not_supported("get_subscription")
    }

    /// Cancel a recurring subscription.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn cancel_subscription(&self, subscription_id: SubscriptionId) -> Result<()> {
        tracing::debug!(subscription_id = %subscription_id, "cancel_subscription");
        not_supported("cancel_subscription")
    }

    /// Create an invoice.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn create_invoice(&self, _invoice: serde_json::Value) -> Result<InvoiceId> {
        not_supported("create_invoice")
    }

    /// Fetch an invoice.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn get_invoice(&self, invoice_id: InvoiceId) -> Result<serde_json::Value> {
        tracing::debug!(invoice_id = %invoice_id, "get_invoice");
        not_supported("get_invoice")
    }

    /// Void an invoice.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn void_invoice(&self, invoice_id: InvoiceId) -> Result<()> {
        tracing::debug!(invoice_id = %invoice_id, "void_invoice");
        not_supported("void_invoice")
    }

    /// Record a payment transaction.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn create_transaction(
        &self,
        _transaction: serde_json::Value,
    ) -> Result<TransactionId> {
        not_supported("create_transaction")
    }

    /// Fetch a transaction.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn get_transaction(&self, transaction_id: TransactionId) -> Result<serde_json::Value> {
        tracing::debug!(transaction_id = %transaction_id, "get_transaction");
        not_supported("get_transaction")
    }

    /// Refund a transaction, returning the refund's transaction id.
    ///
    /// # Errors
    ///
    /// Always returns [`ClientError::NotSupported`].
    pub async fn refund_transaction(&self, transaction_id: TransactionId) -> Result<TransactionId> {
        tracing::debug!(transaction_id = %transaction_id, "refund_transaction");
        not_supported("refund_transaction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargeover_auth::Credentials;

    fn client() -> ChargeOverClient {
        ChargeOverClient::new(Credentials::basic("u", "p", "acme.chargeover.com")).unwrap()
    }

    #[tokio::test]
    async fn stubs_report_not_supported() {
        let client = client();
        let invoice = InvoiceId::new(1).unwrap();

        match client.void_invoice(invoice).await {
            Err(ClientError::NotSupported { operation }) => assert_eq!(operation, "void_invoice"),
            other => panic!("expected NotSupported, got {other:?}"),
        }

        let err = client
            .create_customer(serde_json::json!({"company": "Acme"}))
            .await
            .unwrap_err();
        assert_eq!(err.code(), 501);

        let err = client
            .refund_transaction(TransactionId::new(3).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::NotSupported {
                operation: "refund_transaction"
            }
        ));
    }
}
