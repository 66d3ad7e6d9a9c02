//! Locale-aware rendering of so'm amounts and calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use educoin_api::types::Amount;

use crate::error::EducoinError;

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Appended to every formatted amount.
pub const CURRENCY_SUFFIX: &str = "so'm";

/// Zoned timestamp layouts RFC 3339 misses: minute precision and
/// basic-format offsets such as `+0500`.
const ZONED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// Timestamp layouts without an offset. A trailing `Z` is UTC, so the
/// written date is already the date in that zone.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%MZ",
];

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Uzbek (Uzbekistan): `500 000`, `24/10/2025`.
    #[default]
    UzUz,
    /// Russian (Russia): `500 000`, `24.10.2025`.
    RuRu,
    /// English (United States): `500,000`, `10/24/2025`.
    EnUs,
}

impl Locale {
    /// BCP 47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::UzUz => "uz-UZ",
            Self::RuRu => "ru-RU",
            Self::EnUs => "en-US",
        }
    }

    fn group_separator(self) -> char {
        match self {
            Self::UzUz | Self::RuRu => ' ',
            Self::EnUs => ',',
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            Self::UzUz => "%d/%m/%Y",
            Self::RuRu => "%d.%m.%Y",
            Self::EnUs => "%-m/%-d/%Y",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = EducoinError;

    /// Case-insensitive; accepts `_` for `-` and bare language codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "uz" | "uz-uz" | "uz-latn" | "uz-latn-uz" => Ok(Self::UzUz),
            "ru" | "ru-ru" => Ok(Self::RuRu),
            "en" | "en-us" => Ok(Self::EnUs),
            _ => Err(EducoinError::InvalidInput(format!(
                "unsupported locale '{}'. Valid values: uz-UZ, ru-RU, en-US",
                s
            ))),
        }
    }
}

/// Groups a run of ASCII digits in threes from the right. Leading zeros are
/// dropped so that `"007"` and `7` render the same.
fn group_digits(digits: &str, separator: char) -> String {
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Formats an amount with the locale's thousands grouping, no decimals, and
/// the so'm suffix: `format_amount(500_000u64, Locale::UzUz) == "500 000 so'm"`.
pub fn format_amount(value: impl Into<Amount>, locale: Locale) -> String {
    let amount = value.into();
    format!(
        "{} {}",
        group_digits(&amount.value().to_string(), locale.group_separator()),
        CURRENCY_SUFFIX
    )
}

/// Live display for the amount field of the payment form: keeps only the
/// digits of what was typed and groups them. `None` when no digits remain.
pub fn format_amount_input(input: &str, locale: Locale) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(group_digits(&digits, locale.group_separator()))
}

/// Parses the calendar date out of an ISO 8601 date or timestamp. For
/// timestamps with an offset, the date is taken in that offset.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = ZONED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Renders day, month and year in the locale's order, or [`INVALID_DATE`].
pub fn format_date(iso: &str, locale: Locale) -> String {
    match parse_calendar_date(iso) {
        Some(date) => date.format(locale.date_pattern()).to_string(),
        None => {
            tracing::debug!("Unparseable date '{}'", iso);
            INVALID_DATE.to_string()
        }
    }
}
