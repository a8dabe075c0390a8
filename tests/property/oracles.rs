//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the optimized matchers. Slow on purpose.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Every byte offset where `pattern` starts in `text`, overlaps included.
///
/// O(n·m): compare the pattern at every offset.
pub fn oracle_find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// Overlapping occurrences via the `aho-corasick` crate.
pub fn crate_find_all(text: &str, pattern: &str) -> Vec<usize> {
    let Ok(automaton) = aho_corasick::AhoCorasick::new([pattern]) else {
        return Vec::new();
    };
    let mut starts: Vec<usize> = automaton
        .find_overlapping_iter(text)
        .map(|m| m.start())
        .collect();
    starts.sort_unstable();
    starts
}

/// Character-level Levenshtein distance via `strsim`.
pub fn oracle_levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Best similarity over the m-1, m, m+1 windows starting at char index `start`.
///
/// Brute force: one full edit distance per window.
pub fn oracle_best_window(text: &str, pattern: &str, start: usize) -> Option<f64> {
    let chars: Vec<char> = text.chars().collect();
    let m = pattern.chars().count();
    let mut best: Option<f64> = None;
    for len in [m.saturating_sub(1), m, m + 1] {
        if len == 0 || start + len > chars.len() {
            continue;
        }
        let window: String = chars[start..start + len].iter().collect();
        let distance = oracle_levenshtein(&window, pattern);
        let score = 1.0 - distance as f64 / len.max(m) as f64;
        best = Some(best.map_or(score, |b: f64| b.max(score)));
    }
    best
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Text over a tiny alphabet so patterns actually occur, overlaps included.
pub fn small_alphabet_text() -> impl Strategy<Value = String> {
    "[ab ]{0,60}"
}

pub fn small_alphabet_pattern() -> impl Strategy<Value = String> {
    "[ab]{1,5}"
}

/// Text mixing ASCII with multi-byte characters.
pub fn unicode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "é", "ß", "ü", " ", "b", "日"]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

pub fn unicode_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "é", "ß", "b", "日"]), 1..4)
        .prop_map(|parts| parts.concat())
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn test_oracle_find_all_overlaps() {
    assert_eq!(oracle_find_all("aaaa", "aa"), vec![0, 1, 2]);
    assert_eq!(oracle_find_all("abc", "abcd"), Vec::<usize>::new());
    assert_eq!(crate_find_all("aaaa", "aa"), vec![0, 1, 2]);
}

#[test]
fn test_oracle_levenshtein_known_values() {
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("", "abc"), 3);
    assert_eq!(oracle_levenshtein("résumé", "resume"), 2);
}
