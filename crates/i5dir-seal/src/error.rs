use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    #[error(
        "no business records found in {}; tried {tried}. A sample template was written to {}",
        dir.display(),
        sample.display()
    )]
    NoRecords {
        dir: PathBuf,
        tried: String,
        sample: PathBuf,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output JSON: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl SealError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SealError::Io {
            path: path.into(),
            source,
        }
    }
}
