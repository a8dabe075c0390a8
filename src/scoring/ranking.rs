// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how tallied documents get ordered.
//!
//! One criterion decides: total occurrence count, highest first. Exact and
//! fuzzy occurrences weigh the same. Documents with equal totals keep corpus
//! order, so the ranking is a pure function of corpus and keywords.

use std::cmp::Ordering;

use crate::contracts::{check_ranking_sorted, check_truncation};
use crate::types::{DocumentRecord, MatchTally, RankedResult};

/// A tallied document before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the source's document listing.
    pub order: usize,
    pub document: DocumentRecord,
    pub tally: MatchTally,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Total** - descending
/// 2. **Corpus order** - ascending, so ties are deterministic
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    match b.tally.total().cmp(&a.tally.total()) {
        Ordering::Equal => a.order.cmp(&b.order),
        ord => ord,
    }
}

/// Drop zero-total candidates, sort, keep the first `top_n`, assign ranks.
pub fn rank(mut candidates: Vec<Candidate>, top_n: usize) -> Vec<RankedResult> {
    candidates.retain(|c| !c.tally.is_empty());
    candidates.sort_by(compare_candidates);
    candidates.truncate(top_n);

    let ranked: Vec<RankedResult> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| RankedResult {
            rank: i + 1,
            document: c.document,
            tally: c.tally,
        })
        .collect();

    check_ranking_sorted(&ranked);
    check_truncation(&ranked, top_n);
    ranked
}
