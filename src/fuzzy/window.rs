// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Windowed approximate search: which stretches of text look like the pattern?
//!
//! For a pattern of `m` characters, every character position in the text starts
//! up to three candidate windows, of `m - 1`, `m` and `m + 1` characters, so a
//! single dropped or doubled letter still lines up. A window is accepted when
//! its similarity to the pattern reaches the threshold.
//!
//! The three windows sharing a start are also prefixes of one another, so one
//! DP pass per start covers all of them: row `i` of the table holds the distance
//! from the first `i` window characters to every pattern prefix, and the last
//! cell of rows `m - 1`, `m` and `m + 1` is the answer for each length.
//!
//! Each start contributes at most one occurrence (its best window). Overlapping
//! starts are all reported, the same way the exact matchers report overlaps.
//! With a threshold of 1.0 only zero-distance windows of exactly `m` characters
//! survive, which is the exact-match occurrence set.

use serde::Serialize;

use super::levenshtein::similarity;
use crate::error::{Error, Result};
use crate::utils::char_boundaries;

/// Guards `similarity >= threshold` against float rounding.
pub const SIMILARITY_EPSILON: f64 = 1e-9;

/// One accepted window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuzzyMatch {
    /// Byte offset of the window in the text.
    pub start: usize,
    /// Window length in bytes.
    pub len: usize,
    /// Levenshtein distance between window and pattern.
    pub distance: usize,
    pub similarity: f64,
}

/// A pattern prepared for windowed fuzzy search at a fixed threshold.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    pattern: String,
    chars: Vec<char>,
    threshold: f64,
    /// Largest distance any window length could still accept.
    max_distance: usize,
}

impl FuzzyMatcher {
    /// Prepare `pattern` for search. The threshold must lie in (0, 1].
    pub fn new(pattern: &str, threshold: f64) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::empty_pattern());
        }
        validate_threshold(threshold)?;

        let chars: Vec<char> = pattern.chars().collect();
        // The longest window (m + 1) tolerates the most edits
        let max_distance =
            ((1.0 - threshold) * (chars.len() + 1) as f64 + SIMILARITY_EPSILON).floor() as usize;

        Ok(Self {
            pattern: pattern.to_string(),
            chars,
            threshold,
            max_distance,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Most edits any accepted window can carry.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// All accepted windows, ascending by start.
    ///
    /// A start reports at most one window even when several of its widths
    /// (m - 1, m, m + 1) clear the threshold: the most similar one, and on a
    /// tie the one closest to m characters.
    pub fn find_all(&self, text: &str) -> Vec<FuzzyMatch> {
        let text_chars: Vec<char> = text.chars().collect();
        let boundaries = char_boundaries(text);
        let m = self.chars.len();
        let n = text_chars.len();

        let mut matches = Vec::new();
        let mut prev_row: Vec<usize> = vec![0; m + 1];
        let mut row: Vec<usize> = vec![0; m + 1];

        for start in 0..n {
            let longest = (m + 1).min(n - start);
            if longest + 1 < m {
                // Not even an m - 1 window fits; later starts fit less
                break;
            }

            for (j, cell) in prev_row.iter_mut().enumerate() {
                *cell = j;
            }

            let mut best: Option<(usize, usize, f64)> = None;
            for i in 1..=longest {
                let tc = text_chars[start + i - 1];
                row[0] = i;
                let mut min_row = row[0];
                for j in 1..=m {
                    let cost = usize::from(tc != self.chars[j - 1]);
                    row[j] = (prev_row[j] + 1)
                        .min(row[j - 1] + 1)
                        .min(prev_row[j - 1] + cost);
                    min_row = min_row.min(row[j]);
                }
                std::mem::swap(&mut prev_row, &mut row);

                if i + 1 >= m {
                    let distance = prev_row[m];
                    let score = similarity(distance, i, m);
                    if score + SIMILARITY_EPSILON >= self.threshold && is_better(best, i, score, m) {
                        best = Some((i, distance, score));
                    }
                }

                if min_row > self.max_distance {
                    break;
                }
            }

            if let Some((window, distance, score)) = best {
                matches.push(FuzzyMatch {
                    start: boundaries[start],
                    len: boundaries[start + window] - boundaries[start],
                    distance,
                    similarity: score,
                });
            }
        }

        matches
    }
}

/// Higher similarity wins; on a tie the window closest to `m` characters does.
fn is_better(best: Option<(usize, usize, f64)>, window: usize, score: f64, m: usize) -> bool {
    match best {
        None => true,
        Some((best_window, _, best_score)) => {
            score > best_score + SIMILARITY_EPSILON
                || ((score - best_score).abs() <= SIMILARITY_EPSILON
                    && window.abs_diff(m) < best_window.abs_diff(m))
        }
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidRequest(format!(
            "similarity threshold {} is outside (0, 1]",
            threshold
        )))
    }
}

/// One-shot fuzzy search of `pattern` in `text`.
pub fn search(text: &str, pattern: &str, threshold: f64) -> Result<Vec<FuzzyMatch>> {
    Ok(FuzzyMatcher::new(pattern, threshold)?.find_all(text))
}
