//! Checkout request and response bodies for `/api/payment/checkout`.

use serde::{Deserialize, Serialize};

/// Body of a checkout request. All fields are sent as strings, the amount
/// being the bare digit string the user typed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub center_id: String,
    /// First day of the paid period, `YYYY-MM-DD`.
    pub from_date: String,
    /// Last day of the paid period, `YYYY-MM-DD`.
    pub to_date: String,
    pub amount: String,
}

/// Response to a checkout request. The payment provider URL is absent when
/// the server could not create a payment link.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(default)]
    pub payment_url: Option<String>,
}
