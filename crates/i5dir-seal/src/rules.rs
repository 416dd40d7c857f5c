//! Domain rules applied to canonical records, in a fixed order.
//!
//! Hard failures drop the record; soft failures annotate it and let it
//! proceed. Checks run until the first hard failure, collecting any soft
//! advisories raised before it.

use std::sync::OnceLock;

use i5dir_core::{industry_for_trade, is_supported_city, is_supported_industry, Business};
use regex::Regex;

use crate::transform::phone_digits;

/// Area codes in service across Oregon.
pub const OREGON_AREA_CODES: [&str; 4] = ["503", "971", "458", "541"];

/// ZIP prefix shared by every Oregon ZIP code.
const OREGON_ZIP_PREFIX: &str = "97";

fn zip_pattern() -> &'static Regex {
    static ZIP: OnceLock<Regex> = OnceLock::new();
    ZIP.get_or_init(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern is valid"))
}

/// Outcome of the rule pass for one record.
#[derive(Debug, PartialEq, Eq)]
pub enum RuleVerdict {
    Accepted {
        /// Supported industry slug the record's trade maps to; drives the
        /// bucket key.
        industry_slug: &'static str,
        advisories: Vec<String>,
    },
    Rejected {
        reason: String,
        /// Soft advisories raised before the hard failure; still recorded.
        advisories: Vec<String>,
    },
}

/// Apply all business rules to one canonical record.
#[must_use]
pub fn apply_business_rules(business: &Business) -> RuleVerdict {
    let mut advisories = Vec::new();

    let digits = phone_digits(&business.phone);
    if !(10..=11).contains(&digits.len()) {
        return RuleVerdict::Rejected {
            reason: format!(
                "phone \"{}\" has {} digits, expected 10 or 11",
                business.phone,
                digits.len()
            ),
            advisories,
        };
    }

    let area_code = &digits[..3];
    if !OREGON_AREA_CODES.contains(&area_code) {
        advisories.push(format!("area code {area_code} is outside Oregon"));
    }

    let zip = &business.address.zip;
    if !zip_pattern().is_match(zip) {
        return RuleVerdict::Rejected {
            reason: format!("ZIP code \"{zip}\" is malformed"),
            advisories,
        };
    }
    if !zip.starts_with(OREGON_ZIP_PREFIX) {
        advisories.push(format!("ZIP code {zip} is outside Oregon"));
    }

    if !is_supported_city(&business.address.city) {
        return RuleVerdict::Rejected {
            reason: format!(
                "city \"{}\" is not a supported corridor city",
                business.address.city
            ),
            advisories,
        };
    }

    match industry_for_trade(&business.trade).filter(|slug| is_supported_industry(slug)) {
        Some(industry_slug) => RuleVerdict::Accepted {
            industry_slug,
            advisories,
        },
        None => RuleVerdict::Rejected {
            reason: format!(
                "trade \"{}\" does not map to a supported industry",
                business.trade
            ),
            advisories,
        },
    }
}
