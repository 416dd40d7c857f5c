//! Global pairwise duplicate detection across the accepted set.
//!
//! Runs over all buckets together, before bucket filtering. O(n²) over the
//! accepted records; a deliberate choice at the expected volume (low
//! thousands). Re-architecting at larger scale should add candidate
//! blocking (group by phone or normalized name first) without changing the
//! three identity conditions below.

use std::collections::HashSet;

use i5dir_core::Business;

/// One detected duplicate: the later record and the earlier record it
/// matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFinding {
    /// ID of the record flagged for removal (the second-encountered one).
    pub duplicate_id: String,
    pub duplicate_name: String,
    /// Name of the first-encountered record, kept as the original.
    pub original_name: String,
    pub original_id: String,
}

/// Scan every unordered pair in acceptance order and flag the
/// second-encountered record of each match.
///
/// A record already flagged is never flagged again, so one record matching
/// several earlier originals is counted and removed exactly once (the
/// finding references the first original it matched). Flagged records
/// still participate as potential originals for later records.
#[must_use]
pub fn find_duplicates(accepted: &[Business]) -> Vec<DuplicateFinding> {
    let mut flagged: HashSet<usize> = HashSet::new();
    let mut findings = Vec::new();

    for i in 0..accepted.len() {
        for j in (i + 1)..accepted.len() {
            if flagged.contains(&j) {
                continue;
            }
            if is_duplicate_pair(&accepted[i], &accepted[j]) {
                flagged.insert(j);
                findings.push(DuplicateFinding {
                    duplicate_id: accepted[j].id.clone(),
                    duplicate_name: accepted[j].name.clone(),
                    original_name: accepted[i].name.clone(),
                    original_id: accepted[i].id.clone(),
                });
            }
        }
    }

    findings
}

/// Symmetric identity conditions; any one marks the pair a duplicate.
fn is_duplicate_pair(a: &Business, b: &Business) -> bool {
    if a.phone == b.phone {
        return true;
    }
    if a.name.eq_ignore_ascii_case(&b.name) && a.address.city == b.address.city {
        return true;
    }
    a.address.street.eq_ignore_ascii_case(&b.address.street)
        && a.address.city == b.address.city
        && a.address.zip == b.address.zip
}
