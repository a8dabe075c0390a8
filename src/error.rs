// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for matching and searching.
//!
//! Only a structurally invalid request ever fails a search outright. A document
//! whose text can't be fetched becomes `DocumentUnavailable`, gets logged, and its
//! id lands in the report's unavailable list while the scan moves on. An unrecognized algorithm name becomes `UnknownAlgorithm` only
//! when parsed strictly; the lenient path falls back to KMP.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty or degenerate pattern, rejected before matching.
    #[error("invalid pattern: {reason}")]
    InvalidPattern { reason: String },

    /// Text extraction failed for one document. Never fatal to a search.
    #[error("document '{id}' is unavailable")]
    DocumentUnavailable { id: String },

    /// Algorithm selector that names none of KMP, BM or AC.
    #[error("unknown algorithm '{name}' (expected one of: KMP, BM, AC)")]
    UnknownAlgorithm { name: String },

    /// The request itself is malformed (zero `top_n`, threshold out of range).
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// The caller raised the cancel flag mid-search. Partial results are dropped.
    #[error("search cancelled")]
    Cancelled,

    /// Reading a corpus from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus manifest or options file didn't parse.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The document a `DocumentUnavailable` names; `None` for every other error.
    pub fn unavailable_id(&self) -> Option<&str> {
        match self {
            Error::DocumentUnavailable { id } => Some(id),
            _ => None,
        }
    }

    pub(crate) fn empty_pattern() -> Self {
        Error::InvalidPattern {
            reason: "pattern must not be empty".to_string(),
        }
    }
}
