use chrono::NaiveDate;
use educoin_api::types::Amount;

use crate::error::EducoinError;

pub const MAX_CENTER_ID_LENGTH: usize = 64;
pub const MAX_PAGE_SIZE: usize = 100;

/// Validate a center ID: strip control characters, trim, enforce length.
pub fn validate_center_id(input: &str) -> Result<String, EducoinError> {
    if input.len() > MAX_CENTER_ID_LENGTH {
        return Err(EducoinError::InvalidInput(format!(
            "center id exceeds maximum length of {} bytes",
            MAX_CENTER_ID_LENGTH
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(EducoinError::InvalidInput(
            "center id is required".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: usize) -> Result<usize, EducoinError> {
    if page < 1 {
        return Err(EducoinError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: usize) -> Result<usize, EducoinError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(EducoinError::InvalidInput(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, EducoinError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        EducoinError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2025-10-24)",
            trimmed
        ))
    })
}

/// Parse a typed amount the way the payment form does: every non-digit is
/// dropped (`"500 000 so'm"` is 500000). Returns the bare digit string sent
/// to the API together with its value. Zero and digit-less input are rejected.
pub fn parse_amount_input(input: &str) -> Result<(String, Amount), EducoinError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(EducoinError::InvalidInput(format!(
            "amount '{}' contains no digits",
            input
        )));
    }
    let amount: Amount = digits.parse().map_err(|_| {
        EducoinError::InvalidInput(format!("amount '{}' is too large", input))
    })?;
    if amount.value() == 0 {
        return Err(EducoinError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok((amount.value().to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_id_trimmed() {
        assert_eq!(validate_center_id("  12 ").unwrap(), "12");
    }

    #[test]
    fn center_id_control_chars_removed() {
        assert_eq!(validate_center_id("1\u{0000}2\n").unwrap(), "12");
    }

    #[test]
    fn center_id_empty() {
        assert!(validate_center_id("").is_err());
        assert!(validate_center_id("   ").is_err());
    }

    #[test]
    fn center_id_too_long() {
        assert!(validate_center_id(&"9".repeat(MAX_CENTER_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn page_bounds() {
        assert!(validate_page(0).is_err());
        assert_eq!(validate_page(1).unwrap(), 1);
        assert_eq!(validate_page(42).unwrap(), 42);
    }

    #[test]
    fn page_size_bounds() {
        assert!(validate_page_size(0).is_err());
        assert_eq!(validate_page_size(1).unwrap(), 1);
        assert_eq!(validate_page_size(100).unwrap(), 100);
        assert!(validate_page_size(101).is_err());
    }

    #[test]
    fn date_valid() {
        let d = validate_date(" 2025-10-24 ").unwrap();
        assert_eq!(d.to_string(), "2025-10-24");
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("24.10.2025").is_err());
        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn amount_input_grouped() {
        let (raw, amount) = parse_amount_input("500 000 so'm").unwrap();
        assert_eq!(raw, "500000");
        assert_eq!(amount, Amount::new(500_000));
    }

    #[test]
    fn amount_input_leading_zeros() {
        let (raw, _) = parse_amount_input("000750").unwrap();
        assert_eq!(raw, "750");
    }

    #[test]
    fn amount_input_rejects_empty_and_zero() {
        assert!(parse_amount_input("").is_err());
        assert!(parse_amount_input("so'm").is_err());
        assert!(parse_amount_input("0").is_err());
    }

    #[test]
    fn amount_input_rejects_overflow() {
        assert!(parse_amount_input("99999999999999999999999").is_err());
    }
}
