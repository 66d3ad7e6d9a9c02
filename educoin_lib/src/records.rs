//! Flattened payment rows, one per payment, each carrying its center's name.

use educoin_api::types::{Amount, CenterPayments, RecordId};
use serde::{Deserialize, Serialize};

/// A payment as shown in the payments table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: RecordId,
    pub center_name: String,
    pub start_date: String,
    pub end_date: String,
    pub paid_via: String,
    pub amount: Amount,
}

/// Flattens center-grouped payments, preserving center order and then
/// payment order within each center.
pub fn flatten_payments(centers: Vec<CenterPayments>) -> Vec<PaymentRecord> {
    centers
        .into_iter()
        .flat_map(|center| {
            let center_name = center.name;
            center.payments.into_iter().map(move |p| PaymentRecord {
                id: p.id,
                center_name: center_name.clone(),
                start_date: p.start_date,
                end_date: p.end_date,
                paid_via: p.paid_via,
                amount: p.amount,
            })
        })
        .collect()
}
