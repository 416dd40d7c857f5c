//! Generated data-module emission and prior-output backup.
//!
//! The module is emitted as Rust source: one `pub static` slice per
//! non-empty (city, industry) bucket, walked in the declared city and
//! industry order, plus two lookup functions and a trailing comment-only
//! count summary. Writes are whole-file overwrites; the previous module is
//! preserved by a timestamped backup taken before any processing.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use i5dir_core::{Business, SUPPORTED_CITIES, SUPPORTED_INDUSTRIES};
use tracing::info;

use crate::error::SealError;

/// Copy the existing output module, if any, into `backup_dir` with a UTC
/// timestamp suffix. A missing prior module is logged, not an error.
///
/// # Errors
///
/// Returns [`SealError::Io`] when the copy or directory creation fails.
pub async fn backup_existing_module(
    output_module: &Path,
    backup_dir: &Path,
    now: DateTime<Utc>,
) -> Result<Option<PathBuf>, SealError> {
    if !tokio::fs::try_exists(output_module).await.unwrap_or(false) {
        info!(path = %output_module.display(), "no prior output module to back up");
        return Ok(None);
    }

    tokio::fs::create_dir_all(backup_dir)
        .await
        .map_err(|e| SealError::io(backup_dir, e))?;

    let stem = output_module
        .file_stem()
        .map_or_else(|| "module".to_string(), |s| s.to_string_lossy().into_owned());
    let backup_path = backup_dir.join(format!(
        "{stem}.{}.bak",
        now.format("%Y%m%dT%H%M%SZ")
    ));
    tokio::fs::copy(output_module, &backup_path)
        .await
        .map_err(|e| SealError::io(&backup_path, e))?;
    info!(path = %backup_path.display(), "backed up prior output module");
    Ok(Some(backup_path))
}

/// Render the full generated module source.
#[must_use]
pub fn generate_module(buckets: &BTreeMap<String, Vec<Business>>, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "//! Business directory data generated by i5dir-seal on {}.",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str("//! Do not edit by hand; rerun the seal pipeline instead.\n\n");
    out.push_str(RECORD_DECLARATION);

    let mut emitted: Vec<(String, String, usize)> = Vec::new();
    for city in SUPPORTED_CITIES {
        for (industry_slug, _) in SUPPORTED_INDUSTRIES {
            let key = format!("{}-{industry_slug}", city.slug);
            let Some(businesses) = buckets.get(&key).filter(|b| !b.is_empty()) else {
                continue;
            };
            let name = const_name(city.slug, industry_slug);
            let _ = writeln!(
                out,
                "\npub static {name}: &[DirectoryBusiness] = &["
            );
            for business in businesses {
                out.push_str(&render_business(business));
            }
            out.push_str("];\n");
            emitted.push((key, name, businesses.len()));
        }
    }

    out.push_str("\nstatic ALL_BUCKETS: &[(&str, &str, &[DirectoryBusiness])] = &[\n");
    for city in SUPPORTED_CITIES {
        for (industry_slug, _) in SUPPORTED_INDUSTRIES {
            let key = format!("{}-{industry_slug}", city.slug);
            if emitted.iter().any(|(k, _, _)| *k == key) {
                let _ = writeln!(
                    out,
                    "    (\"{}\", \"{industry_slug}\", {}),",
                    city.slug,
                    const_name(city.slug, industry_slug)
                );
            }
        }
    }
    out.push_str("];\n");
    out.push_str(LOOKUP_FUNCTIONS);

    let total: usize = emitted.iter().map(|(_, _, count)| count).sum();
    let _ = writeln!(
        out,
        "\n// Directory totals: {total} businesses across {} buckets",
        emitted.len()
    );
    for (key, _, count) in &emitted {
        let _ = writeln!(out, "// {key}: {count}");
    }

    out
}

/// Write the generated module, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SealError::Io`] on any filesystem failure.
pub async fn write_module(path: &Path, content: &str) -> Result<(), SealError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SealError::io(parent, e))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| SealError::io(path, e))?;
    info!(path = %path.display(), "wrote generated data module");
    Ok(())
}

const RECORD_DECLARATION: &str = "\
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectoryBusiness {
    pub id: &'static str,
    pub name: &'static str,
    pub trade: &'static str,
    pub phone: &'static str,
    pub email: Option<&'static str>,
    pub website: Option<&'static str>,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
    pub services: &'static [&'static str],
    pub specialties: &'static [&'static str],
    pub hours: Option<&'static str>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub license_number: Option<&'static str>,
    pub years_in_business: Option<u32>,
    pub verified: bool,
    pub featured: bool,
    pub emergency_service: bool,
    pub bbb_rating: Option<&'static str>,
}
";

const LOOKUP_FUNCTIONS: &str = "
/// Businesses for one (city, industry) pair; empty when the pair has none.
pub fn businesses_for(city_slug: &str, industry_slug: &str) -> &'static [DirectoryBusiness] {
    ALL_BUCKETS
        .iter()
        .find(|(city, industry, _)| *city == city_slug && *industry == industry_slug)
        .map_or(&[] as &[DirectoryBusiness], |(_, _, businesses)| businesses)
}

/// Linear scan across every bucket for a business ID.
pub fn business_by_id(id: &str) -> Option<&'static DirectoryBusiness> {
    ALL_BUCKETS
        .iter()
        .flat_map(|(_, _, businesses)| businesses.iter())
        .find(|business| business.id == id)
}
";

/// `("portland", "general-contractors")` → `PORTLAND_GENERAL_CONTRACTORS`.
fn const_name(city_slug: &str, industry_slug: &str) -> String {
    format!("{city_slug}_{industry_slug}")
        .replace('-', "_")
        .to_uppercase()
}

fn render_business(business: &Business) -> String {
    let mut out = String::from("    DirectoryBusiness {\n");
    let mut field = |name: &str, value: String| {
        let _ = writeln!(out, "        {name}: {value},");
    };
    field("id", quoted(&business.id));
    field("name", quoted(&business.name));
    field("trade", quoted(&business.trade));
    field("phone", quoted(&business.phone));
    field("email", opt_quoted(business.email.as_deref()));
    field("website", opt_quoted(business.website.as_deref()));
    field("street", quoted(&business.address.street));
    field("city", quoted(&business.address.city));
    field("state", quoted(&business.address.state));
    field("zip", quoted(&business.address.zip));
    field("services", str_slice(&business.services));
    field("specialties", str_slice(&business.specialties));
    field("hours", opt_quoted(business.hours.as_deref()));
    field("rating", opt_float(business.rating));
    field("review_count", opt_display(business.review_count));
    field("license_number", opt_quoted(business.license_number.as_deref()));
    field("years_in_business", opt_display(business.years_in_business));
    field("verified", business.verified.to_string());
    field("featured", business.featured.to_string());
    field("emergency_service", business.emergency_service.to_string());
    field("bbb_rating", opt_quoted(business.bbb_rating.as_deref()));
    out.push_str("    },\n");
    out
}

/// Escape for a Rust string literal: backslashes and double quotes.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

fn opt_quoted(value: Option<&str>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("Some({})", quoted(v)))
}

fn opt_float(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("Some({v:?})"))
}

fn opt_display<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("Some({v})"))
}

fn str_slice(values: &[String]) -> String {
    if values.is_empty() {
        "&[]".to_string()
    } else {
        let items: Vec<String> = values.iter().map(|v| quoted(v)).collect();
        format!("&[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i5dir_core::Address;

    fn business(id: &str, name: &str, city: &str) -> Business {
        Business {
            id: id.into(),
            name: name.into(),
            trade: "Electrician".into(),
            phone: "(503) 555-1234".into(),
            email: None,
            website: Some("https://example.com".into()),
            address: Address {
                street: "100 SW Main St".into(),
                city: city.into(),
                state: "OR".into(),
                zip: "97204".into(),
            },
            services: vec!["Panel \"upgrades\"".into()],
            specialties: vec![],
            hours: None,
            rating: Some(4.8),
            review_count: Some(57),
            license_number: None,
            years_in_business: None,
            verified: false,
            featured: false,
            emergency_service: true,
            bbb_rating: None,
        }
    }

    fn bucket_map(entries: Vec<(&str, Vec<Business>)>) -> BTreeMap<String, Vec<Business>> {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn const_names_are_upper_snake_case() {
        assert_eq!(const_name("portland", "electricians"), "PORTLAND_ELECTRICIANS");
        assert_eq!(
            const_name("grants-pass", "general-contractors"),
            "GRANTS_PASS_GENERAL_CONTRACTORS"
        );
    }

    #[test]
    fn module_contains_constant_lookups_and_summary() {
        let buckets = bucket_map(vec![(
            "portland-electricians",
            vec![business("rose-1", "Rose City Electric", "Portland")],
        )]);
        let module = generate_module(&buckets, Utc::now());
        assert!(module.contains("pub static PORTLAND_ELECTRICIANS"));
        assert!(module.contains("pub fn businesses_for"));
        assert!(module.contains("pub fn business_by_id"));
        assert!(module.contains("// Directory totals: 1 businesses across 1 buckets"));
        assert!(module.contains("// portland-electricians: 1"));
    }

    #[test]
    fn empty_buckets_are_not_emitted() {
        let buckets = bucket_map(vec![
            ("portland-electricians", vec![business("a-1", "A", "Portland")]),
            ("salem-plumbers", vec![]),
        ]);
        let module = generate_module(&buckets, Utc::now());
        assert!(!module.contains("SALEM_PLUMBERS"));
    }

    #[test]
    fn buckets_walk_declared_city_then_industry_order() {
        let buckets = bucket_map(vec![
            ("ashland-attorneys", vec![business("b-2", "B", "Ashland")]),
            ("portland-electricians", vec![business("a-1", "A", "Portland")]),
        ]);
        let module = generate_module(&buckets, Utc::now());
        let portland = module.find("PORTLAND_ELECTRICIANS").unwrap();
        let ashland = module.find("ASHLAND_ATTORNEYS").unwrap();
        assert!(portland < ashland);
    }

    #[test]
    fn string_fields_are_escaped_for_rust_literals() {
        let buckets = bucket_map(vec![(
            "portland-electricians",
            vec![business("a-1", "Quote \"Co\"", "Portland")],
        )]);
        let module = generate_module(&buckets, Utc::now());
        assert!(module.contains(r#"name: "Quote \"Co\"","#));
        assert!(module.contains(r#"services: &["Panel \"upgrades\""],"#));
    }

    #[test]
    fn rating_renders_with_decimal_point() {
        let buckets = bucket_map(vec![(
            "portland-electricians",
            vec![business("a-1", "A", "Portland")],
        )]);
        let module = generate_module(&buckets, Utc::now());
        assert!(module.contains("rating: Some(4.8),"));
        assert!(module.contains("review_count: Some(57),"));
    }

    #[tokio::test]
    async fn backup_copies_prior_module_once() {
        let dir = tempfile::tempdir().unwrap();
        let module_path = dir.path().join("businesses.rs");
        std::fs::write(&module_path, "// old module\n").unwrap();
        let backup_dir = dir.path().join("backups");

        let backup = backup_existing_module(&module_path, &backup_dir, Utc::now())
            .await
            .unwrap()
            .unwrap();
        assert!(backup.starts_with(&backup_dir));
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "// old module\n");
    }

    #[tokio::test]
    async fn backup_of_missing_module_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = backup_existing_module(
            &dir.path().join("businesses.rs"),
            &dir.path().join("backups"),
            Utc::now(),
        )
        .await
        .unwrap();
        assert!(result.is_none());
    }
}
