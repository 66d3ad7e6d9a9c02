//! Domain-level wrapper around the API client.

use educoin_api::types::Center;
use educoin_api::Client;

use crate::checkout::CheckoutForm;
use crate::error::EducoinError;
use crate::records::{flatten_payments, PaymentRecord};

/// API client wrapper that speaks in payment records and validated forms
/// instead of raw wire types.
pub struct EducoinClient {
    inner: Client,
}

impl Default for EducoinClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EducoinClient {
    /// Creates a client using the production API URL.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    /// Fetches every payment and flattens them into table rows.
    pub async fn payment_records(&self) -> Result<Vec<PaymentRecord>, EducoinError> {
        let centers = self.inner.get_payments().await.map_err(|e| {
            tracing::error!("Error fetching payments: {}", e);
            e
        })?;
        let center_count = centers.len();
        let records = flatten_payments(centers);
        tracing::debug!(
            "Fetched {} payments across {} centers",
            records.len(),
            center_count
        );
        Ok(records)
    }

    /// Fetches the centers a payment can be made to.
    pub async fn centers(&self) -> Result<Vec<Center>, EducoinError> {
        Ok(self.inner.get_centers().await?)
    }

    /// Validates the form, starts a checkout, and returns the payment link.
    pub async fn checkout(&self, form: CheckoutForm) -> Result<String, EducoinError> {
        let request = form.into_request()?;
        let resp = self.inner.checkout(&request).await?;
        match resp.payment_url {
            Some(url) if !url.trim().is_empty() => {
                tracing::info!("Checkout created for center {}", request.center_id);
                Ok(url)
            }
            _ => {
                tracing::warn!("Checkout response carried no payment link");
                Err(EducoinError::MissingPaymentUrl)
            }
        }
    }
}
