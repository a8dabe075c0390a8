// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phase timing records.
//!
//! Each phase returns its own elapsed time next to its result. The orchestrator
//! collects the records into a [`SearchTimings`] value; nothing here is mutated
//! across phases.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::matching::Algorithm;

/// Run `f` and return its result with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Fractional milliseconds.
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(millis(*elapsed))
}

/// Exact phase: which algorithm, over how many documents, how long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactPhaseTiming {
    pub algorithm: Algorithm,
    pub documents: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

/// Fuzzy phase: how many escalated keywords, how long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyPhaseTiming {
    pub keywords: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

/// Timing for one search call. `fuzzy` is `None` when no keyword escalated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTimings {
    pub exact: ExactPhaseTiming,
    pub fuzzy: Option<FuzzyPhaseTiming>,
}

impl SearchTimings {
    pub fn total(&self) -> Duration {
        self.exact.elapsed + self.fuzzy.as_ref().map_or(Duration::ZERO, |f| f.elapsed)
    }

    /// Two-line human summary, the second line only if the fuzzy phase ran.
    ///
    /// ```text
    /// Exact Match (KMP): 120 documents scanned in 35ms
    /// Fuzzy Match: 2 keywords processed in 81ms
    /// ```
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Exact Match ({}): {} documents scanned in {:.0}ms",
            self.exact.algorithm,
            self.exact.documents,
            millis(self.exact.elapsed)
        );
        if let Some(fuzzy) = &self.fuzzy {
            summary.push_str(&format!(
                "\nFuzzy Match: {} keywords processed in {:.0}ms",
                fuzzy.keywords,
                millis(fuzzy.elapsed)
            ));
        }
        summary
    }
}
