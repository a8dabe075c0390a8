// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! [`SearchOptions`] is the loose, file-friendly form: every field has a
//! default and the algorithm is a free-form name. [`SearchRequest`] is what
//! the orchestrator actually runs: keywords attached, algorithm resolved,
//! numeric bounds checked.
//!
//! ```json
//! { "algorithm": "BM", "top_n": 5, "fuzzy_threshold": 0.8, "escalation": "global" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::validate_threshold;
use crate::matching::Algorithm;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Which keywords the fuzzy phase runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscalationPolicy {
    /// Keywords with no exact hit in any document, fuzzy-searched everywhere.
    #[default]
    Global,
    /// Each document fuzzy-searches the keywords it had no exact hit for.
    PerDocument,
}

/// User-facing options, as read from a config file or CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Algorithm name. Unrecognized names fall back to KMP.
    pub algorithm: String,
    pub top_n: usize,
    pub fuzzy_threshold: f64,
    pub escalation: EscalationPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kmp.label().to_string(),
            top_n: DEFAULT_TOP_N,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            escalation: EscalationPolicy::Global,
        }
    }
}

impl SearchOptions {
    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Attach keywords and validate.
    pub fn into_request<I, S>(self, keywords: I) -> Result<SearchRequest>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = SearchRequest {
            keywords: keywords.into_iter().map(Into::into).collect(),
            algorithm: Algorithm::resolve(&self.algorithm),
            top_n: self.top_n,
            fuzzy_threshold: self.fuzzy_threshold,
            escalation: self.escalation,
        };
        request.validate()?;
        Ok(request)
    }
}

/// One search call's parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    /// Raw keywords; normalized and deduplicated at search time.
    pub keywords: Vec<String>,
    pub algorithm: Algorithm,
    /// Maximum number of results, at least 1.
    pub top_n: usize,
    /// Minimum fuzzy similarity, in `(0, 1]`.
    pub fuzzy_threshold: f64,
    pub escalation: EscalationPolicy,
}

impl SearchRequest {
    /// Request with default algorithm, top-N, threshold and policy.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            algorithm: Algorithm::default(),
            top_n: DEFAULT_TOP_N,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            escalation: EscalationPolicy::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_escalation(mut self, escalation: EscalationPolicy) -> Self {
        self.escalation = escalation;
        self
    }

    /// Reject structurally invalid requests. Empty keyword lists are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidRequest("top_n must be at least 1".into()));
        }
        validate_threshold(self.fuzzy_threshold)
    }
}
