use serde::{Deserialize, Serialize};

use super::{Amount, RecordId};

/// A single payment made to a center.
///
/// Dates are kept as the raw strings the API sent; they are only parsed
/// when rendered, so one malformed date never fails a whole listing.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: RecordId,

    /// Start of the paid period (ISO-8601).
    pub start_date: String,

    /// End of the paid period (ISO-8601).
    pub end_date: String,

    /// Payment provider or method, e.g. `click` or `payme`.
    #[serde(default)]
    pub paid_via: String,

    pub amount: Amount,
}
