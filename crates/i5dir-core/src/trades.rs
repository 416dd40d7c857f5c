//! Trade display name ↔ industry slug cross-map.

/// Supported industries in declared output order, paired with their trade
/// display names.
pub const SUPPORTED_INDUSTRIES: [(&str, &str); 6] = [
    ("electricians", "Electrician"),
    ("plumbers", "Plumber"),
    ("roofers", "Roofer"),
    ("general-contractors", "General Contractor"),
    ("attorneys", "Attorney"),
    ("real-estate-agents", "Real Estate Agent"),
];

/// Display label for records whose raw industry has no mapping.
pub const FALLBACK_TRADE: &str = "Service Provider";

/// Trade display name for an industry slug. Unknown slugs get the generic
/// [`FALLBACK_TRADE`] label; the business-rule validator later rejects
/// records whose trade cannot be mapped back to a supported industry.
#[must_use]
pub fn trade_for_industry(industry_slug: &str) -> &'static str {
    SUPPORTED_INDUSTRIES
        .iter()
        .find(|(slug, _)| *slug == industry_slug)
        .map_or(FALLBACK_TRADE, |(_, trade)| trade)
}

/// Industry slug for a trade display name. Unmapped trades return `None`
/// and are rejected by the business-rule validator rather than silently
/// defaulted to a supported industry.
#[must_use]
pub fn industry_for_trade(trade: &str) -> Option<&'static str> {
    SUPPORTED_INDUSTRIES
        .iter()
        .find(|(_, name)| *name == trade)
        .map(|(slug, _)| *slug)
}

/// True iff `slug` is one of the six supported industry slugs.
#[must_use]
pub fn is_supported_industry(slug: &str) -> bool {
    SUPPORTED_INDUSTRIES.iter().any(|(s, _)| *s == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_supported_industry_to_its_trade() {
        assert_eq!(trade_for_industry("electricians"), "Electrician");
        assert_eq!(trade_for_industry("general-contractors"), "General Contractor");
        assert_eq!(trade_for_industry("real-estate-agents"), "Real Estate Agent");
    }

    #[test]
    fn unknown_industry_falls_back_to_generic_label() {
        assert_eq!(trade_for_industry("bakeries"), FALLBACK_TRADE);
    }

    #[test]
    fn maps_every_trade_back_to_its_industry() {
        for (slug, trade) in SUPPORTED_INDUSTRIES {
            assert_eq!(industry_for_trade(trade), Some(slug));
        }
    }

    #[test]
    fn unmapped_trade_returns_none() {
        assert_eq!(industry_for_trade(FALLBACK_TRADE), None);
        assert_eq!(industry_for_trade("Baker"), None);
    }

    #[test]
    fn membership_checks_slugs_not_display_names() {
        assert!(is_supported_industry("plumbers"));
        assert!(!is_supported_industry("Plumber"));
        assert!(!is_supported_industry("bakeries"));
    }
}
