//! Center-related types: the education centers that receive payments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Payment;

/// Identifier of a center or payment. The API returns numeric IDs for some
/// records and string IDs for others, so both are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A center as returned by the `/centers` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Center {
    pub id: RecordId,
    pub name: String,
}

/// A center together with its payments, as returned by the `/payments` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CenterPayments {
    #[serde(default)]
    pub id: Option<RecordId>,

    pub name: String,

    /// Payments in the order the API returned them. Missing means none.
    #[serde(default)]
    pub payments: Vec<Payment>,
}
