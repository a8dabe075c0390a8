// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact matching: three algorithms, one closed set.
//!
//! KMP and Boyer–Moore search one pattern at a time; Aho–Corasick searches the
//! whole keyword set in a single pass. All three report the same thing: every
//! byte offset where a pattern starts, overlaps included.
//!
//! Algorithm choice is an [`Algorithm`] value resolved once when a search
//! starts. [`ExactMatcher::compile`] then builds the per-keyword tables (or the
//! automaton) up front, so the per-document loop only scans.

pub mod aho_corasick;
pub mod boyer_moore;
pub mod kmp;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

pub use aho_corasick::{search_multiple, AhoCorasick, PatternId, PatternMatch};
pub use boyer_moore::BoyerMoore;
pub use kmp::Kmp;

/// The exact-matching algorithms a search can run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "KMP")]
    Kmp,
    #[serde(rename = "BM")]
    BoyerMoore,
    #[serde(rename = "AC")]
    AhoCorasick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick];

    /// Short selector name: `KMP`, `BM` or `AC`.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "BM",
            Algorithm::AhoCorasick => "AC",
        }
    }

    /// Parse leniently: unrecognized names fall back to KMP with a warning.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: Error| {
            tracing::warn!(%err, "falling back to {}", Algorithm::Kmp.label());
            Algorithm::Kmp
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" | "knuth-morris-pratt" => Ok(Algorithm::Kmp),
            "bm" | "boyer-moore" | "boyermoore" => Ok(Algorithm::BoyerMoore),
            "ac" | "aho-corasick" | "ahocorasick" => Ok(Algorithm::AhoCorasick),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compiled exact matcher for a fixed pattern list.
///
/// Immutable once built; safe to share across threads during a scan.
#[derive(Debug, Clone)]
pub enum ExactMatcher {
    Kmp(Vec<Kmp>),
    BoyerMoore(Vec<BoyerMoore>),
    AhoCorasick {
        automaton: AhoCorasick,
        /// Automaton pattern id for each input pattern.
        ids: Vec<PatternId>,
    },
}

impl ExactMatcher {
    /// Build the tables for `patterns` with the chosen algorithm.
    pub fn compile<P: AsRef<str>>(algorithm: Algorithm, patterns: &[P]) -> Result<Self> {
        match algorithm {
            Algorithm::Kmp => patterns
                .iter()
                .map(|p| Kmp::new(p.as_ref()))
                .collect::<Result<Vec<_>>>()
                .map(ExactMatcher::Kmp),
            Algorithm::BoyerMoore => patterns
                .iter()
                .map(|p| BoyerMoore::new(p.as_ref()))
                .collect::<Result<Vec<_>>>()
                .map(ExactMatcher::BoyerMoore),
            Algorithm::AhoCorasick => {
                let automaton = AhoCorasick::new(patterns)?;
                let ids = patterns
                    .iter()
                    .filter_map(|p| automaton.pattern_id(p.as_ref()))
                    .collect();
                Ok(ExactMatcher::AhoCorasick { automaton, ids })
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            ExactMatcher::Kmp(_) => Algorithm::Kmp,
            ExactMatcher::BoyerMoore(_) => Algorithm::BoyerMoore,
            ExactMatcher::AhoCorasick { .. } => Algorithm::AhoCorasick,
        }
    }

    pub fn pattern_count(&self) -> usize {
        match self {
            ExactMatcher::Kmp(tables) => tables.len(),
            ExactMatcher::BoyerMoore(tables) => tables.len(),
            ExactMatcher::AhoCorasick { ids, .. } => ids.len(),
        }
    }

    /// Occurrence offsets for each compiled pattern, in compile order.
    pub fn find_all(&self, text: &str) -> Vec<Vec<usize>> {
        match self {
            ExactMatcher::Kmp(tables) => tables.iter().map(|kmp| kmp.find_all(text)).collect(),
            ExactMatcher::BoyerMoore(tables) => {
                tables.iter().map(|bm| bm.find_all(text)).collect()
            }
            ExactMatcher::AhoCorasick { automaton, ids } => {
                let grouped = automaton.find_all(text);
                ids.iter().map(|&id| grouped[id].clone()).collect()
            }
        }
    }
}

/// One-shot exact search for a single pattern with any algorithm.
pub fn search(algorithm: Algorithm, text: &str, pattern: &str) -> Result<Vec<usize>> {
    match algorithm {
        Algorithm::Kmp => kmp::search(text, pattern),
        Algorithm::BoyerMoore => boyer_moore::search(text, pattern),
        Algorithm::AhoCorasick => {
            let mut found = search_multiple(text, &[pattern])?;
            Ok(found.remove(pattern).unwrap_or_default())
        }
    }
}
