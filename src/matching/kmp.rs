// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth–Morris–Pratt: linear-time single-pattern search.
//!
//! The prefix function `pi[i]` is the length of the longest proper prefix of
//! `pattern[..=i]` that is also a suffix of it. On a mismatch after `q` matched
//! bytes, the scan falls back to `pi[q - 1]` instead of rewinding the text, so
//! every text byte is read exactly once.
//!
//! Matching runs over bytes. Both pattern and text are valid UTF-8, so a byte
//! match can only start on a char boundary and the reported offsets are always
//! safe to slice with.

use crate::error::{Error, Result};

/// A pattern compiled for KMP search.
#[derive(Debug, Clone)]
pub struct Kmp {
    pattern: String,
    failure: Vec<usize>,
}

impl Kmp {
    /// Compile `pattern`. Empty patterns are rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::empty_pattern());
        }
        Ok(Self {
            failure: prefix_function(pattern.as_bytes()),
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The prefix-function table, one entry per pattern byte.
    pub fn failure_table(&self) -> &[usize] {
        &self.failure
    }

    /// Every start offset of the pattern in `text`, overlapping included, ascending.
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        let pattern = self.pattern.as_bytes();
        let m = pattern.len();
        let mut matches = Vec::new();
        let mut q = 0;

        for (i, &byte) in text.as_bytes().iter().enumerate() {
            while q > 0 && pattern[q] != byte {
                q = self.failure[q - 1];
            }
            if pattern[q] == byte {
                q += 1;
            }
            if q == m {
                matches.push(i + 1 - m);
                q = self.failure[q - 1];
            }
        }

        matches
    }
}

/// Compute the prefix function of `pattern` in O(m).
pub fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = pi[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        pi[i] = k;
    }

    pi
}

/// One-shot KMP search: compile `pattern`, scan `text`.
pub fn search(text: &str, pattern: &str) -> Result<Vec<usize>> {
    Ok(Kmp::new(pattern)?.find_all(text))
}
