//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions over the properties the rest of the crate relies on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure** when a matcher or the ranking goes wrong in tests
//!
//! | Contract Function             | Property                                          |
//! |-------------------------------|---------------------------------------------------|
//! | `check_occurrences_ascending` | matcher output is strictly increasing             |
//! | `check_fuzzy_accepted`        | every fuzzy hit clears the threshold, with the    |
//! |                               | distance a bounded recount agrees on              |
//! | `check_escalation_disjoint`   | a keyword is never both exact somewhere and fuzzy |
//! | `check_ranking_sorted`        | totals non-increasing, ranks 1..=n                |
//! | `check_truncation`            | at most `top_n` results                           |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    assert!(crate::config::DEFAULT_TOP_N >= 1);
    assert!(crate::config::DEFAULT_FUZZY_THRESHOLD > 0.0);
    assert!(crate::config::DEFAULT_FUZZY_THRESHOLD <= 1.0);
    assert!(!crate::types::FUZZY_SUFFIX.is_empty());
};

use crate::fuzzy::{bounded_edit_distance, FuzzyMatch, FuzzyMatcher};
use crate::types::{MatchTally, Provenance, RankedResult};

// ============================================================================
// MATCHER CONTRACTS
// ============================================================================

/// Occurrence offsets must be strictly increasing (sorted, no duplicates).
#[inline]
pub fn check_occurrences_ascending(occurrences: &[usize]) {
    for pair in occurrences.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: occurrences not strictly ascending ({} then {})",
            pair[0],
            pair[1]
        );
    }
}

/// Every reported fuzzy match meets the threshold it was searched with, and
/// its window really is `distance` edits from the pattern.
#[inline]
pub fn check_fuzzy_accepted(text: &str, matcher: &FuzzyMatcher, matches: &[FuzzyMatch]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for m in matches {
        debug_assert!(
            m.similarity + crate::fuzzy::SIMILARITY_EPSILON >= matcher.threshold(),
            "Contract violation: fuzzy match at {} has similarity {} below threshold {}",
            m.start,
            m.similarity,
            matcher.threshold()
        );
        let window = &text[m.start..m.start + m.len];
        let recounted = bounded_edit_distance(window, matcher.pattern(), matcher.max_distance());
        debug_assert!(
            recounted == Some(m.distance),
            "Contract violation: fuzzy match at {} reports distance {} but {:?} is {:?} from '{}'",
            m.start,
            m.distance,
            window,
            recounted,
            matcher.pattern()
        );
    }
    let starts: Vec<usize> = matches.iter().map(|m| m.start).collect();
    check_occurrences_ascending(&starts);
}

// ============================================================================
// ORCHESTRATION CONTRACTS
// ============================================================================

/// Under global escalation, no escalated keyword has an exact hit anywhere,
/// and no fuzzy hit exists for a keyword matched exactly somewhere.
#[inline]
pub fn check_escalation_disjoint<'a>(
    tallies: impl IntoIterator<Item = &'a MatchTally> + Clone,
    escalated: &[String],
) {
    if !cfg!(debug_assertions) {
        return;
    }
    for tally in tallies.clone() {
        for keyword in escalated {
            debug_assert!(
                !tally.has_exact(keyword),
                "Contract violation: escalated keyword '{}' has an exact hit",
                keyword
            );
        }
        for hit in tally.hits() {
            if hit.provenance == Provenance::Fuzzy {
                debug_assert!(
                    escalated.contains(&hit.keyword),
                    "Contract violation: fuzzy hit for non-escalated keyword '{}'",
                    hit.keyword
                );
            }
        }
    }
}

/// Totals are non-increasing and ranks run 1, 2, 3, ...
#[inline]
pub fn check_ranking_sorted(results: &[RankedResult]) {
    for (i, result) in results.iter().enumerate() {
        debug_assert!(
            result.rank == i + 1,
            "Contract violation: result {} has rank {}",
            i,
            result.rank
        );
        debug_assert!(
            result.total() > 0,
            "Contract violation: zero-total document '{}' ranked",
            result.document.id
        );
    }
    for pair in results.windows(2) {
        debug_assert!(
            pair[0].total() >= pair[1].total(),
            "Contract violation: ranking not sorted ('{}' = {} before '{}' = {})",
            pair[0].document.id,
            pair[0].total(),
            pair[1].document.id,
            pair[1].total()
        );
    }
}

#[inline]
pub fn check_truncation(results: &[RankedResult], top_n: usize) {
    debug_assert!(
        results.len() <= top_n,
        "Contract violation: {} results exceed top_n {}",
        results.len(),
        top_n
    );
}
