//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation and checkout failures.
#[derive(Debug)]
pub enum EducoinError {
    /// An error from the underlying API client.
    Api(educoin_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The checkout succeeded at the HTTP level but no payment link came back.
    MissingPaymentUrl,
}

impl fmt::Display for EducoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingPaymentUrl => {
                write!(f, "Checkout failed: the server did not return a payment link")
            }
        }
    }
}

impl std::error::Error for EducoinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<educoin_api::Error> for EducoinError {
    fn from(e: educoin_api::Error) -> Self {
        Self::Api(e)
    }
}
