// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! The row minimum is another: it never decreases from one row to the next,
//! so once it passes the bound the answer is already known.
//!
//! All lengths are in characters, not bytes.

/// Levenshtein distance with unit-cost insert, delete and substitute.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// Edit distance between `a` and `b` if it is at most `max`, else `None`.
///
/// Gives up as soon as the answer is known to exceed `max`: up front when the
/// length difference already does, and mid-table once a whole DP row does
/// (row minima never decrease).
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut row = vec![0; b_chars.len() + 1];
    for (i, &ac) in a_chars.iter().enumerate() {
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            row[j + 1] = (prev_row[j + 1] + 1)
                .min(row[j] + 1)
                .min(prev_row[j] + usize::from(ac != bc));
        }
        if row.iter().min().is_some_and(|&least| least > max) {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut row);
    }

    let distance = prev_row[b_chars.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_edit_distance(a, b, max).is_some()
}

/// Normalized similarity: `1 - distance / max(window_len, pattern_len)`.
///
/// 1.0 means identical, 0.0 means nothing in common. Two empty strings count
/// as identical.
pub fn similarity(distance: usize, window_len: usize, pattern_len: usize) -> f64 {
    let longest = window_len.max(pattern_len);
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / longest as f64
}
