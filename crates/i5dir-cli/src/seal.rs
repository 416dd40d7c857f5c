//! Seal and report command handlers, called from `main` after the env and
//! subscriber are established.

use std::path::PathBuf;

use anyhow::Context;
use i5dir_core::SealConfig;
use tracing::{info, warn};

/// CLI flag overrides layered over the env-derived configuration.
#[derive(Debug, Default)]
pub(crate) struct PathOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_module: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub report_text: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
}

impl PathOverrides {
    fn apply(self, mut config: SealConfig) -> SealConfig {
        if let Some(path) = self.input_dir {
            config.input_dir = path;
        }
        if let Some(path) = self.output_module {
            config.output_module = path;
        }
        if let Some(path) = self.report_json {
            config.report_json = path;
        }
        if let Some(path) = self.report_text {
            config.report_text = path;
        }
        if let Some(path) = self.backup_dir {
            config.backup_dir = path;
        }
        config
    }
}

pub(crate) async fn run_seal_command(overrides: PathOverrides, dry_run: bool) -> anyhow::Result<()> {
    let config = overrides.apply(i5dir_core::load_seal_config()?);
    info!(
        input_dir = %config.input_dir.display(),
        output_module = %config.output_module.display(),
        dry_run,
        "starting seal run"
    );

    let outcome = i5dir_seal::run_seal(&config, dry_run)
        .await
        .context("seal run failed")?;
    if outcome.invalid > 0 || outcome.duplicates > 0 {
        warn!(
            invalid = outcome.invalid,
            duplicates = outcome.duplicates,
            "seal run dropped records; see the validation report"
        );
    }

    if outcome.dry_run {
        println!("dry run — no files written");
    }
    println!("records loaded:     {}", outcome.total);
    println!("accepted:           {}", outcome.valid);
    println!("rejected:           {}", outcome.invalid);
    println!("duplicates removed: {}", outcome.duplicates);
    println!("sealed to output:   {}", outcome.sealed);
    println!("warnings recorded:  {}", outcome.warning_count);
    if !outcome.dry_run {
        println!("module:  {}", config.output_module.display());
        println!("reports: {}, {}", config.report_json.display(), config.report_text.display());
    }
    Ok(())
}

pub(crate) async fn print_latest_report(report_json: Option<PathBuf>) -> anyhow::Result<()> {
    let config = i5dir_core::load_seal_config()?;
    let path = report_json.unwrap_or(config.report_json);

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("no validation report at {}", path.display()))?;
    let report: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("unparseable report at {}", path.display()))?;

    println!("report generated: {}", report["timestamp"].as_str().unwrap_or("unknown"));
    let summary = &report["summary"];
    for (label, key) in [
        ("total", "total"),
        ("valid", "valid"),
        ("invalid", "invalid"),
        ("duplicates", "duplicates"),
    ] {
        println!("{label}: {}", summary[key].as_u64().unwrap_or(0));
    }
    let warning_count = report["detailedWarnings"].as_array().map_or(0, Vec::len);
    println!("warnings: {warning_count}");
    Ok(())
}
