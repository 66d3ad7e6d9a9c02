//! Library layer for Educoin: payment records, pagination, locale formatting
//! and checkout validation on top of the `educoin_api` client.

pub mod checkout;
pub mod client;
pub mod error;
pub mod formatting;
pub mod pagination;
pub mod records;
pub mod validation;

pub use educoin_api;
pub use educoin_api::types;

pub use checkout::CheckoutForm;
pub use client::EducoinClient;
pub use error::EducoinError;
pub use formatting::{
    format_amount, format_amount_input, format_date, Locale, CURRENCY_SUFFIX, INVALID_DATE,
};
pub use pagination::{advance, get_page, total_pages, Direction, Page, PaginationState};
pub use records::{flatten_payments, PaymentRecord};
