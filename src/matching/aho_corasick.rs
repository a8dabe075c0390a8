// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aho–Corasick: every keyword, one pass over the text.
//!
//! The automaton is a byte trie over all patterns plus two extras per state:
//!
//! - a **failure link** to the state for the longest proper suffix of the
//!   current path that is also a trie path, and
//! - an **output set** of patterns ending here, already closed over the failure
//!   chain so the scan never walks it to collect matches.
//!
//! Both are computed once, breadth-first, at build time. Scanning follows
//! `goto` when it exists and failure links otherwise; each failure step moves
//! to a strictly shallower state, so the whole scan is
//! O(n + total pattern length + matches).
//!
//! The automaton is immutable after [`AhoCorasick::new`] returns. One build is
//! shared by reference across every document (and thread) in a search.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Index of a pattern in [`AhoCorasick::patterns`].
pub type PatternId = usize;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct State {
    /// Outgoing transitions, sorted by byte.
    goto: Vec<(u8, usize)>,
    fail: usize,
    /// Patterns recognized on entering this state, failure closure included.
    outputs: Vec<PatternId>,
}

impl State {
    fn transition(&self, byte: u8) -> Option<usize> {
        self.goto
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.goto[i].1)
    }
}

/// One pattern occurrence reported by the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: PatternId,
    pub start: usize,
}

/// A compiled multi-pattern automaton.
#[derive(Debug, Clone)]
pub struct AhoCorasick {
    states: Vec<State>,
    patterns: Vec<String>,
}

impl AhoCorasick {
    /// Build the automaton for `patterns`.
    ///
    /// Pattern ids follow first appearance; repeated patterns share the id of
    /// their first occurrence. Any empty pattern fails the whole build.
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut automaton = Self {
            states: vec![State::default()],
            patterns: Vec::new(),
        };

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(Error::empty_pattern());
            }
            automaton.insert(pattern);
        }

        automaton.link_failures();
        Ok(automaton)
    }

    fn insert(&mut self, pattern: &str) {
        let mut state = ROOT;
        for &byte in pattern.as_bytes() {
            state = match self.states[state].transition(byte) {
                Some(next) => next,
                None => {
                    let next = self.states.len();
                    self.states.push(State::default());
                    let goto = &mut self.states[state].goto;
                    let at = goto.partition_point(|&(b, _)| b < byte);
                    goto.insert(at, (byte, next));
                    next
                }
            };
        }

        // A terminal state only ever holds its own pattern before linking
        if self.states[state].outputs.is_empty() {
            self.states[state].outputs.push(self.patterns.len());
            self.patterns.push(pattern.to_string());
        }
    }

    /// Breadth-first pass computing failure links and output closure.
    fn link_failures(&mut self) {
        let mut queue = std::collections::VecDeque::new();

        let root_children: Vec<usize> = self.states[ROOT].goto.iter().map(|&(_, s)| s).collect();
        for child in root_children {
            self.states[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let children = self.states[state].goto.clone();
            for (byte, child) in children {
                let mut fallback = self.states[state].fail;
                let fail = loop {
                    if let Some(next) = self.states[fallback].transition(byte) {
                        break next;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.states[fallback].fail;
                };

                self.states[child].fail = fail;
                // fail is shallower than child, so its outputs are already closed
                let inherited = self.states[fail].outputs.clone();
                self.states[child].outputs.extend(inherited);
                queue.push_back(child);
            }
        }
    }

    fn next_state(&self, mut state: usize, byte: u8) -> usize {
        loop {
            if let Some(next) = self.states[state].transition(byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].fail;
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn pattern_id(&self, pattern: &str) -> Option<PatternId> {
        self.patterns.iter().position(|p| p == pattern)
    }

    /// Number of trie states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Every occurrence of every pattern, in order of end position.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        text.as_bytes()
            .iter()
            .enumerate()
            .scan(ROOT, move |state, (end, &byte)| {
                *state = self.next_state(*state, byte);
                Some((end, *state))
            })
            .flat_map(move |(end, state)| {
                self.states[state].outputs.iter().map(move |&pattern| PatternMatch {
                    pattern,
                    start: end + 1 - self.patterns[pattern].len(),
                })
            })
    }

    /// Occurrence offsets grouped per pattern id, each list ascending.
    pub fn find_all(&self, text: &str) -> Vec<Vec<usize>> {
        let mut grouped = vec![Vec::new(); self.patterns.len()];
        for hit in self.find_iter(text) {
            grouped[hit.pattern].push(hit.start);
        }
        grouped
    }
}

/// One-shot multi-pattern search.
///
/// Only patterns with at least one occurrence appear in the returned map.
pub fn search_multiple<P: AsRef<str>>(
    text: &str,
    patterns: &[P],
) -> Result<HashMap<String, Vec<usize>>> {
    let automaton = AhoCorasick::new(patterns)?;
    Ok(automaton
        .find_all(text)
        .into_iter()
        .zip(automaton.patterns.iter())
        .filter(|(hits, _)| !hits.is_empty())
        .map(|(hits, pattern)| (pattern.clone(), hits))
        .collect())
}
