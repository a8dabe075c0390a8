// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer–Moore: right-to-left comparison with two skip heuristics.
//!
//! Each alignment is compared from the last pattern byte backwards. On a
//! mismatch at pattern position `j` against text byte `c`, two rules each
//! propose a shift and the larger one wins:
//!
//! - **Bad character**: line up the last occurrence of `c` in the pattern with
//!   the mismatch (or jump past it entirely if `c` never occurs).
//! - **Good suffix** (strong rule): line up another occurrence of the matched
//!   suffix `pattern[j+1..]`, preceded by a different byte, or the longest
//!   pattern prefix that is a suffix of it.
//!
//! On a full match the window moves by `good_suffix[0]`, the pattern's period,
//! which is always at least 1 and never skips an overlapping occurrence.
//!
//! Worst case is O(n·m); typical resume text with short keywords skips most
//! of the document.

use crate::error::{Error, Result};

const ALPHABET: usize = 256;

/// A pattern compiled for Boyer–Moore search.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: String,
    /// Last index of each byte in the pattern, -1 when absent.
    bad_char: [isize; ALPHABET],
    /// Shift after a mismatch at `j - 1` (index `j`), or after a full match (index 0).
    good_suffix: Vec<usize>,
}

impl BoyerMoore {
    /// Compile `pattern`. Empty patterns are rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::empty_pattern());
        }
        let bytes = pattern.as_bytes();
        Ok(Self {
            bad_char: bad_character_table(bytes),
            good_suffix: good_suffix_table(bytes),
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Every start offset of the pattern in `text`, overlapping included, ascending.
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        let pattern = self.pattern.as_bytes();
        let text = text.as_bytes();
        let m = pattern.len();
        let n = text.len();
        let mut matches = Vec::new();
        let mut s = 0;

        while s + m <= n {
            // j counts the bytes not yet confirmed; compare pattern[j - 1]
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            if j == 0 {
                matches.push(s);
                s += self.good_suffix[0];
            } else {
                let mismatch = j - 1;
                let bad = mismatch as isize - self.bad_char[text[s + mismatch] as usize];
                let good = self.good_suffix[j] as isize;
                s += bad.max(good) as usize;
            }
        }

        matches
    }
}

fn bad_character_table(pattern: &[u8]) -> [isize; ALPHABET] {
    let mut table = [-1isize; ALPHABET];
    for (i, &byte) in pattern.iter().enumerate() {
        table[byte as usize] = i as isize;
    }
    table
}

/// Strong good-suffix shifts, `m + 1` entries.
///
/// `border[i]` is the start of the widest border of `pattern[i..]`. Pass one
/// fills shifts where the matched suffix reoccurs preceded by a different byte;
/// pass two fills the rest from borders that are also pattern prefixes.
fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}

/// One-shot Boyer–Moore search: compile `pattern`, scan `text`.
pub fn search(text: &str, pattern: &str) -> Result<Vec<usize>> {
    Ok(BoyerMoore::new(pattern)?.find_all(text))
}
