//! The six supported Oregon cities along the I-5 corridor.

use crate::slug::slugify;

/// A supported city: canonical Title-Case display name plus its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedCity {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Declared north-to-south; output walks buckets in this order.
pub const SUPPORTED_CITIES: [SupportedCity; 6] = [
    SupportedCity { name: "Portland", slug: "portland" },
    SupportedCity { name: "Salem", slug: "salem" },
    SupportedCity { name: "Eugene", slug: "eugene" },
    SupportedCity { name: "Medford", slug: "medford" },
    SupportedCity { name: "Grants Pass", slug: "grants-pass" },
    SupportedCity { name: "Ashland", slug: "ashland" },
];

/// Case-insensitive lookup against the city table. A match returns the
/// canonical Title-Case name; anything else passes through with only a
/// whitespace trim. This is table normalization, not free-form title-casing:
/// `"portland"` maps to `"Portland"` but `"bend"` stays `"bend"`.
#[must_use]
pub fn normalize_city_name(raw: &str) -> String {
    let trimmed = raw.trim();
    SUPPORTED_CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(trimmed))
        .map_or_else(|| trimmed.to_string(), |c| c.name.to_string())
}

/// True iff `city` is one of the six supported canonical names.
#[must_use]
pub fn is_supported_city(city: &str) -> bool {
    SUPPORTED_CITIES.iter().any(|c| c.name == city)
}

/// Slug for a canonical city name. Falls back to [`slugify`] for
/// passthrough (unsupported) city names so bucket keys stay well-formed.
#[must_use]
pub fn city_slug(city: &str) -> String {
    SUPPORTED_CITIES
        .iter()
        .find(|c| c.name == city)
        .map_or_else(|| slugify(city), |c| c.slug.to_string())
}
