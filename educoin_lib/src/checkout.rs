//! The payment form: raw user input turned into a checkout request.

use educoin_api::types::CheckoutRequest;

use crate::error::EducoinError;
use crate::validation;

/// Unvalidated payment form fields, exactly as the user entered them.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub center_id: String,
    pub from_date: String,
    pub to_date: String,
    /// Free text; grouping spaces and the currency suffix are tolerated.
    pub amount: String,
}

impl CheckoutForm {
    /// Validates every field and builds the request body. The period must
    /// not end before it starts.
    pub fn into_request(self) -> Result<CheckoutRequest, EducoinError> {
        let center_id = validation::validate_center_id(&self.center_id)?;
        let from = validation::validate_date(&self.from_date)?;
        let to = validation::validate_date(&self.to_date)?;
        if to < from {
            return Err(EducoinError::InvalidInput(format!(
                "end date {} is before start date {}",
                to, from
            )));
        }
        let (amount, _) = validation::parse_amount_input(&self.amount)?;

        Ok(CheckoutRequest {
            center_id,
            from_date: from.to_string(),
            to_date: to.to_string(),
            amount,
        })
    }
}
