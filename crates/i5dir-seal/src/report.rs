//! Validation report: machine-readable JSON plus a human-readable text
//! summary, both timestamped and whole-file overwritten each run.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use i5dir_core::{industry_for_trade, SealConfig};
use serde::Serialize;
use tracing::info;

use crate::context::{SealContext, ValidationWarning};
use crate::error::SealError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    /// City display name → industry slug → surviving record count.
    pub business_distribution: BTreeMap<String, BTreeMap<String, usize>>,
    pub detailed_warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
    /// One short line per warning; full detail lives in
    /// `detailedWarnings`.
    pub warnings: Vec<String>,
}

/// Assemble the report from the finished run context.
#[must_use]
pub fn build_report(ctx: &SealContext, timestamp: DateTime<Utc>) -> ValidationReport {
    let mut distribution: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for business in ctx.buckets.values().flatten() {
        if let Some(industry) = industry_for_trade(&business.trade) {
            *distribution
                .entry(business.address.city.clone())
                .or_default()
                .entry(industry.to_string())
                .or_default() += 1;
        }
    }

    ValidationReport {
        timestamp,
        summary: ReportSummary {
            total: ctx.results.total,
            valid: ctx.results.valid,
            invalid: ctx.results.invalid,
            duplicates: ctx.results.duplicates,
            warnings: ctx
                .results
                .warnings
                .iter()
                .map(|w| format!("{}: {}", w.business, w.message))
                .collect(),
        },
        business_distribution: distribution,
        detailed_warnings: ctx.results.warnings.clone(),
    }
}

/// Render the plain-text summary with the same information as the JSON
/// report.
#[must_use]
pub fn render_text_summary(report: &ValidationReport, sealed: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "I-5 Corridor Business Directory — Seal Run Summary");
    let _ = writeln!(out, "Generated: {}", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
    out.push('\n');
    let _ = writeln!(out, "Records loaded:     {}", report.summary.total);
    let _ = writeln!(out, "Accepted:           {}", report.summary.valid);
    let _ = writeln!(out, "Rejected:           {}", report.summary.invalid);
    let _ = writeln!(out, "Duplicates removed: {}", report.summary.duplicates);
    let _ = writeln!(out, "Sealed to output:   {sealed}");
    out.push('\n');
    out.push_str("Distribution by city and industry:\n");
    if report.business_distribution.is_empty() {
        out.push_str("  (no businesses sealed)\n");
    }
    for (city, industries) in &report.business_distribution {
        let _ = writeln!(out, "  {city}");
        for (industry, count) in industries {
            let _ = writeln!(out, "    {industry}: {count}");
        }
    }
    out.push('\n');
    let _ = writeln!(out, "Warnings ({}):", report.detailed_warnings.len());
    if report.detailed_warnings.is_empty() {
        out.push_str("  (none)\n");
    }
    for warning in &report.detailed_warnings {
        let kind = match warning.kind {
            crate::context::WarningKind::HardReject => "reject",
            crate::context::WarningKind::SoftWarning => "warn",
        };
        let _ = writeln!(out, "  [{kind}] {}: {}", warning.business, warning.message);
    }
    out
}

/// Write both report files.
///
/// # Errors
///
/// Returns [`SealError::Serialize`] if the report cannot be encoded
/// as JSON, or [`SealError::Io`] on filesystem failure.
pub async fn write_reports(
    config: &SealConfig,
    report: &ValidationReport,
    sealed: usize,
) -> Result<(), SealError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| SealError::Serialize { source: e })?;
    write_report_file(&config.report_json, &json).await?;

    let text = render_text_summary(report, sealed);
    write_report_file(&config.report_text, &text).await?;
    Ok(())
}

async fn write_report_file(path: &Path, content: &str) -> Result<(), SealError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SealError::io(parent, e))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| SealError::io(path, e))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket;
    use i5dir_core::{Address, Business};

    fn business(id: &str, city: &str, trade: &str) -> Business {
        Business {
            id: id.into(),
            name: "Test".into(),
            trade: trade.into(),
            phone: "(503) 555-1234".into(),
            email: None,
            website: None,
            address: Address {
                street: "100 SW Main".into(),
                city: city.into(),
                state: "OR".into(),
                zip: "97204".into(),
            },
            services: vec![],
            specialties: vec![],
            hours: None,
            rating: None,
            review_count: None,
            license_number: None,
            years_in_business: None,
            verified: false,
            featured: false,
            emergency_service: false,
            bbb_rating: None,
        }
    }

    fn context_with_two_cities() -> SealContext {
        let mut ctx = SealContext::default();
        ctx.results.total = 3;
        ctx.results.valid = 2;
        ctx.results.invalid = 1;
        ctx.results.push_hard("Bad Record", "city \"Boise\" is not a supported corridor city");
        bucket::insert(&mut ctx.buckets, business("a-1", "Portland", "Electrician"), "electricians");
        bucket::insert(&mut ctx.buckets, business("b-2", "Salem", "Plumber"), "plumbers");
        ctx
    }

    #[test]
    fn distribution_is_keyed_by_city_then_industry() {
        let report = build_report(&context_with_two_cities(), Utc::now());
        assert_eq!(report.business_distribution["Portland"]["electricians"], 1);
        assert_eq!(report.business_distribution["Salem"]["plumbers"], 1);
    }

    #[test]
    fn summary_warnings_are_short_lines() {
        let report = build_report(&context_with_two_cities(), Utc::now());
        assert_eq!(report.summary.warnings.len(), 1);
        assert!(report.summary.warnings[0].starts_with("Bad Record: "));
    }

    #[test]
    fn report_serializes_expected_schema() {
        let report = build_report(&context_with_two_cities(), Utc::now());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["timestamp"].is_string());
        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["duplicates"], 0);
        assert_eq!(value["businessDistribution"]["Portland"]["electricians"], 1);
        assert_eq!(value["detailedWarnings"][0]["kind"], "hardReject");
    }

    #[test]
    fn text_summary_lists_counts_and_warnings() {
        let report = build_report(&context_with_two_cities(), Utc::now());
        let text = render_text_summary(&report, 2);
        assert!(text.contains("Records loaded:     3"));
        assert!(text.contains("Sealed to output:   2"));
        assert!(text.contains("    electricians: 1"));
        assert!(text.contains("[reject] Bad Record:"));
    }
}
