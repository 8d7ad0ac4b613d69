//! Errors raised while loading a vocabulary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary must be a JSON array of objects, found {found}")]
    NotAnArray { found: &'static str },

    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("entry {index} has no {field:?} field")]
    MissingField { index: usize, field: String },

    #[error("entry {index}: field {field:?} must be a string")]
    NotAString { index: usize, field: String },
}
