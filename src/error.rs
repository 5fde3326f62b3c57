//! Error types for normalization and record sources.

use crate::types::RecordKind;
use std::path::PathBuf;
use thiserror::Error;

/// A raw document violated the upstream data contract
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{kind}: document is not a JSON array")]
    NotAnArray { kind: RecordKind },

    #[error("{kind}: record {index} is malformed: {source}")]
    InvalidRecord {
        kind: RecordKind,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A raw document could not be obtained or parsed
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{kind}: failed to read {path:?}: {source}")]
    Io {
        kind: RecordKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind}: request to {url} failed: {source}")]
    Http {
        kind: RecordKind,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind}: invalid JSON: {source}")]
    Parse {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind}: no document registered")]
    Missing { kind: RecordKind },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
