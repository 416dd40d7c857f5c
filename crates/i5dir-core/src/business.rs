//! Record shapes for the sealing pipeline.
//!
//! ## Observed shape of scraped listing files
//!
//! ### Field names
//! Scraped records arrive camelCase (`zipCode`, `licenseNumber`,
//! `reviewCount`). Nothing is guaranteed present; every field on
//! [`RawBusinessRecord`] defaults to absent so one malformed listing never
//! poisons deserialization of its siblings.
//!
//! ### `services`
//! Usually a JSON array of strings, but some scrape batches emit a single
//! comma-joined string or `null`. Modeled as a raw [`serde_json::Value`] so
//! the transformer can treat any non-array shape as "no services" instead of
//! failing the record.
//!
//! ### `rating` / `reviewCount`
//! Numeric when present; some sources omit them entirely. `Option` both.
//!
//! ### `emergencyService` / `featured`
//! Booleans when present, absent otherwise. Defaulted to `false` during
//! transformation.

use serde::{Deserialize, Serialize};

/// Untrusted scraped listing, straight off disk. Consumed once by the
/// pipeline and discarded after transformation or rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBusinessRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<RawAddress>,
    /// Industry slug as scraped (e.g. `"electricians"`). May be absent when
    /// the source only carried a trade display name.
    #[serde(default)]
    pub industry: Option<String>,
    /// Trade display name as scraped (e.g. `"Electrician"`).
    #[serde(default)]
    pub trade: Option<String>,
    /// Kept as a raw JSON value: non-array shapes are normalized to an
    /// empty list rather than rejected.
    #[serde(default)]
    pub services: Option<serde_json::Value>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub years_in_business: Option<u32>,
    #[serde(default)]
    pub emergency_service: Option<bool>,
    #[serde(default)]
    pub bbb_rating: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Address sub-object of a raw listing. All fields optional; the field
/// validator enforces presence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Validated, normalized business record. Every `Business` that reaches a
/// bucket has passed both field and business-rule validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Globally unique within a run: slugified name + slugified city + a
    /// counter that only resets at process start.
    pub id: String,
    pub name: String,
    /// One of the six trade display names, or a passthrough fallback label.
    pub trade: String,
    /// `(NNN) NNN-NNNN` when the source had 10 (or 11-with-leading-1)
    /// digits; otherwise left exactly as provided.
    pub phone: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Address,
    pub services: Vec<String>,
    pub specialties: Vec<String>,
    pub hours: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub license_number: Option<String>,
    pub years_in_business: Option<u32>,
    /// True iff the raw record carried a license number or a BBB rating.
    pub verified: bool,
    pub featured: bool,
    pub emergency_service: bool,
    pub bbb_rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Always `"OR"`; forced during transformation.
    pub state: String,
    pub zip: String,
}
