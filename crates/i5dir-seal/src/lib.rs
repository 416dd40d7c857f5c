pub mod bucket;
pub mod context;
pub mod dedup;
pub mod emit;
pub mod error;
pub mod fields;
pub mod loader;
pub mod report;
pub mod rules;
pub mod runner;
pub mod transform;

pub use context::{SealContext, ValidationResults, ValidationWarning, WarningKind};
pub use error::SealError;
pub use runner::{run_seal, SealOutcome};
