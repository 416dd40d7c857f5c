//! End-to-end seal run orchestration.
//!
//! Single logical thread of control: load, per-record validate/transform,
//! dedup, bucket filter, emit, report. Per-record failures become warning
//! entries and counters; only the loader's empty-input case and filesystem
//! failures propagate.

use std::collections::HashSet;

use chrono::Utc;
use i5dir_core::{Business, RawBusinessRecord, SealConfig};
use tracing::{info, warn};

use crate::context::SealContext;
use crate::error::SealError;
use crate::rules::RuleVerdict;
use crate::{bucket, dedup, emit, fields, loader, report, rules, transform};

/// Final counters for one run, returned to the caller for display.
#[derive(Debug, Clone, Copy)]
pub struct SealOutcome {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
    /// Records actually written to the output module (valid minus
    /// duplicates).
    pub sealed: usize,
    pub warning_count: usize,
    pub dry_run: bool,
}

/// Run the full pipeline. With `dry_run` set, every stage executes but no
/// output file is touched (including the backup).
///
/// # Errors
///
/// Returns [`SealError::NoRecords`] when the input directory yields no
/// records, or [`SealError::Io`]/[`SealError::Serialize`] on output
/// failures. Per-record problems never error; they are recorded in the
/// run's warning list.
pub async fn run_seal(config: &SealConfig, dry_run: bool) -> Result<SealOutcome, SealError> {
    let mut ctx = SealContext::default();

    if dry_run {
        info!("dry run: no files will be written");
    } else {
        emit::backup_existing_module(&config.output_module, &config.backup_dir, Utc::now()).await?;
    }

    let raw_records = loader::load_raw_records(&config.input_dir).await?;
    ctx.results.total = raw_records.len();
    info!(total = ctx.results.total, "loaded raw records");

    let mut accepted: Vec<Business> = Vec::new();
    for (index, value) in raw_records.into_iter().enumerate() {
        process_record(&mut ctx, &mut accepted, index, value);
    }
    info!(
        valid = ctx.results.valid,
        invalid = ctx.results.invalid,
        "validation finished"
    );

    let findings = dedup::find_duplicates(&accepted);
    let mut removed_ids: HashSet<String> = HashSet::new();
    for finding in findings {
        ctx.results.duplicates += 1;
        removed_ids.insert(finding.duplicate_id.clone());
        ctx.results.push_soft(
            finding.duplicate_name,
            format!(
                "duplicate of \"{}\" ({})",
                finding.original_name, finding.original_id
            ),
        );
    }
    bucket::remove_flagged(&mut ctx.buckets, &removed_ids);
    info!(duplicates = ctx.results.duplicates, "dedup finished");

    let sealed: usize = ctx.buckets.values().map(Vec::len).sum();
    let finished = Utc::now();
    let run_report = report::build_report(&ctx, finished);

    if !dry_run {
        let module = emit::generate_module(&ctx.buckets, finished);
        emit::write_module(&config.output_module, &module).await?;
        report::write_reports(config, &run_report, sealed).await?;
    }

    Ok(SealOutcome {
        total: ctx.results.total,
        valid: ctx.results.valid,
        invalid: ctx.results.invalid,
        duplicates: ctx.results.duplicates,
        sealed,
        warning_count: ctx.results.warnings.len(),
        dry_run,
    })
}

/// Validate and transform one raw value. Failures are recorded on the
/// context; the batch always continues.
fn process_record(
    ctx: &mut SealContext,
    accepted: &mut Vec<Business>,
    index: usize,
    value: serde_json::Value,
) {
    let record: RawBusinessRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) => {
            ctx.results.invalid += 1;
            ctx.results
                .push_hard(record_label(None, index), format!("malformed record: {e}"));
            return;
        }
    };
    let label = record_label(record.name.as_deref(), index);

    let issues = fields::required_field_issues(&record);
    if !issues.is_empty() {
        ctx.results.invalid += 1;
        warn!(business = %label, issues = issues.len(), "record failed field validation");
        for issue in issues {
            ctx.results.push_hard(label.clone(), issue);
        }
        return;
    }

    let business = transform::transform_record(&record, &mut ctx.id_counter);
    match rules::apply_business_rules(&business) {
        RuleVerdict::Accepted {
            industry_slug,
            advisories,
        } => {
            for advisory in advisories {
                ctx.results.push_soft(business.name.clone(), advisory);
            }
            ctx.results.valid += 1;
            accepted.push(business.clone());
            bucket::insert(&mut ctx.buckets, business, industry_slug);
        }
        RuleVerdict::Rejected { reason, advisories } => {
            for advisory in advisories {
                ctx.results.push_soft(business.name.clone(), advisory);
            }
            ctx.results.invalid += 1;
            warn!(business = %business.name, %reason, "record failed business rules");
            ctx.results.push_hard(business.name.clone(), reason);
        }
    }
}

fn record_label(name: Option<&str>, index: usize) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("record {}", index + 1),
    }
}
