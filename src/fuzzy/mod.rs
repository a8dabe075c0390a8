// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: plain and bounded Levenshtein for one-off comparisons, and
//! the windowed matcher that slides pattern-sized windows over a whole document.

mod levenshtein;
mod window;

pub use levenshtein::*;
pub(crate) use window::validate_threshold;
pub use window::{search, FuzzyMatch, FuzzyMatcher, SIMILARITY_EPSILON};
