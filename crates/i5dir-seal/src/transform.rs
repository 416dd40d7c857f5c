//! Raw record → canonical [`Business`] conversion.
//!
//! Infallible by construction: every input has already passed the
//! required-field checks, so a missing name or address here is a pipeline
//! ordering bug, not a runtime path.

use i5dir_core::{
    normalize_city_name, slugify, slugify_truncated, trade_for_industry, Address, Business,
    RawBusinessRecord, FALLBACK_TRADE,
};

/// Maximum characters of the business name contributing to the ID slug.
const ID_NAME_SLUG_MAX: usize = 30;

/// Convert one field-valid raw record into a canonical business.
///
/// `id_counter` increments once per call, whether or not the record is
/// later rejected by the business-rule validator, so IDs stay stable
/// across reorderings of downstream checks.
#[must_use]
pub fn transform_record(raw: &RawBusinessRecord, id_counter: &mut u64) -> Business {
    *id_counter += 1;

    let name = raw.name.as_deref().unwrap_or_default().trim().to_string();
    let raw_address = raw.address.clone().unwrap_or_default();
    let city = normalize_city_name(raw_address.city.as_deref().unwrap_or_default());

    let id = format!(
        "{}-{}-{}",
        slugify_truncated(&name, ID_NAME_SLUG_MAX),
        slugify(&city),
        id_counter
    );

    let verified = non_blank(raw.license_number.as_deref()).is_some()
        || non_blank(raw.bbb_rating.as_deref()).is_some();

    Business {
        id,
        name,
        trade: resolve_trade(raw),
        phone: format_phone(raw.phone.as_deref().unwrap_or_default()),
        email: non_blank(raw.email.as_deref()),
        website: normalize_website(raw.website.as_deref().unwrap_or_default()),
        address: Address {
            street: raw_address.street.unwrap_or_default().trim().to_string(),
            city,
            // Forced regardless of input; the field validator already
            // rejected records claiming another state.
            state: "OR".to_string(),
            zip: raw_address.zip_code.unwrap_or_default().trim().to_string(),
        },
        services: normalize_services(raw.services.as_ref()),
        specialties: raw
            .specialties
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        hours: non_blank(raw.hours.as_deref()),
        rating: raw.rating,
        review_count: raw.review_count,
        license_number: non_blank(raw.license_number.as_deref()),
        years_in_business: raw.years_in_business,
        verified,
        featured: raw.featured.unwrap_or(false),
        emergency_service: raw.emergency_service.unwrap_or(false),
        bbb_rating: non_blank(raw.bbb_rating.as_deref()),
    }
}

/// `(NNN) NNN-NNNN` for 10-digit numbers, 11-digit numbers shed a leading
/// `1` first. Anything else passes through unchanged; the business-rule
/// validator rejects out-of-range digit counts.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    match digits.len() {
        10 => format_ten(&digits),
        11 if digits.starts_with('1') => format_ten(&digits[1..]),
        _ => raw.to_string(),
    }
}

/// The digit characters of a phone string, in order.
#[must_use]
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

fn format_ten(digits: &str) -> String {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Trim, then prefix `https://` when no scheme is present. Empty becomes
/// `None`.
#[must_use]
pub fn normalize_website(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Array-typed input only: string elements trimmed, empties dropped. Any
/// non-array shape yields an empty list.
fn normalize_services(raw: Option<&serde_json::Value>) -> Vec<String> {
    match raw {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// The raw `industry` slug wins when present; otherwise the scraped trade
/// display name passes through as-is. Records with neither get the
/// generic fallback label and are rejected downstream.
fn resolve_trade(raw: &RawBusinessRecord) -> String {
    if let Some(industry) = non_blank(raw.industry.as_deref()) {
        return trade_for_industry(&industry).to_string();
    }
    non_blank(raw.trade.as_deref()).unwrap_or_else(|| FALLBACK_TRADE.to_string())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
