//! Grouping of accepted records by (city, industry).

use std::collections::{BTreeMap, HashSet};

use i5dir_core::{city_slug, Business};

/// `"<city-slug>-<industry-slug>"`, the output partitioning key. Every
/// accepted record maps to exactly one key because its trade maps to
/// exactly one industry.
#[must_use]
pub fn bucket_key(city: &str, industry_slug: &str) -> String {
    format!("{}-{}", city_slug(city), industry_slug)
}

/// Insert an accepted record into its bucket, preserving acceptance order.
pub fn insert(buckets: &mut BTreeMap<String, Vec<Business>>, business: Business, industry_slug: &str) {
    let key = bucket_key(&business.address.city, industry_slug);
    buckets.entry(key).or_default().push(business);
}

/// Drop flagged duplicates from every bucket, removing buckets that end up
/// empty.
pub fn remove_flagged(buckets: &mut BTreeMap<String, Vec<Business>>, removed_ids: &HashSet<String>) {
    for businesses in buckets.values_mut() {
        businesses.retain(|b| !removed_ids.contains(&b.id));
    }
    buckets.retain(|_, businesses| !businesses.is_empty());
}
