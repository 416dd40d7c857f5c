//! Process-wide accumulator for one seal run, passed explicitly through
//! every stage instead of living in module globals.

use std::collections::BTreeMap;

use i5dir_core::Business;
use serde::Serialize;

/// Severity of a recorded validation note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningKind {
    /// The record was dropped from the output set.
    HardReject,
    /// The record proceeded; the note is advisory.
    SoftWarning,
}

/// One validation note, tied to the record it concerns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub kind: WarningKind,
    /// Business name when known, otherwise a positional label like
    /// `"record 7"`.
    pub business: String,
    pub message: String,
}

/// Run-level counters plus the ordered warning list.
#[derive(Debug, Default)]
pub struct ValidationResults {
    /// Raw records loaded, before any validation.
    pub total: usize,
    /// Records accepted by both validators (dedup does not decrement).
    pub valid: usize,
    /// Records dropped by field or business-rule validation.
    pub invalid: usize,
    /// Records removed as duplicates of an earlier record.
    pub duplicates: usize,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResults {
    pub fn push_hard(&mut self, business: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            kind: WarningKind::HardReject,
            business: business.into(),
            message: message.into(),
        });
    }

    pub fn push_soft(&mut self, business: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            kind: WarningKind::SoftWarning,
            business: business.into(),
            message: message.into(),
        });
    }
}

/// Everything a seal run accumulates: counters, warnings, the bucket map,
/// and the ID counter. Created at pipeline start, consumed by the emitter.
#[derive(Debug, Default)]
pub struct SealContext {
    pub results: ValidationResults,
    /// Keyed `"<city-slug>-<industry-slug>"`; values keep acceptance order.
    pub buckets: BTreeMap<String, Vec<Business>>,
    /// Monotonic per-run ID counter, starts at 1 on first use.
    pub id_counter: u64,
}
