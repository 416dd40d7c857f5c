//! Run configuration for the sealing pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Paths for one seal run. Built from env vars (CLI flags override the
/// result) so the pipeline itself never touches `std::env`.
#[derive(Debug, Clone)]
pub struct SealConfig {
    /// Directory searched for candidate input files.
    pub input_dir: PathBuf,
    /// Path of the generated data module. Overwritten whole-file.
    pub output_module: PathBuf,
    /// Path of the machine-readable validation report.
    pub report_json: PathBuf,
    /// Path of the human-readable run summary.
    pub report_text: PathBuf,
    /// Directory receiving the timestamped backup of the prior module.
    pub backup_dir: PathBuf,
}

/// Load seal configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unusable (empty) value.
pub fn load_seal_config() -> Result<SealConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_seal_config(|key| std::env::var(key))
}

/// Build seal configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap` lookup.
fn build_seal_config<F>(lookup: F) -> Result<SealConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let path_or_default = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        match lookup(var) {
            Ok(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value is empty".to_string(),
            }),
            Ok(raw) => Ok(PathBuf::from(raw)),
            Err(_) => Ok(PathBuf::from(default)),
        }
    };

    Ok(SealConfig {
        input_dir: path_or_default("I5DIR_INPUT_DIR", "data/scraped")?,
        output_module: path_or_default("I5DIR_OUTPUT_MODULE", "generated/businesses.rs")?,
        report_json: path_or_default("I5DIR_REPORT_JSON", "reports/validation-report.json")?,
        report_text: path_or_default("I5DIR_REPORT_TEXT", "reports/validation-summary.txt")?,
        backup_dir: path_or_default("I5DIR_BACKUP_DIR", "backups")?,
    })
}
