// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: where the matchers meet the corpus.
//!
//! One call runs a fixed pipeline:
//!
//! ```text
//!   list + fetch ──► exact phase ──► escalation set ──► fuzzy phase ──► merge ──► rank
//!   (once/call)     (all keywords)     (barrier)       (escalated      (per doc)  (top N)
//!                                                        keywords)
//! ```
//!
//! Exact matching always runs. Fuzzy matching is the fallback: it only runs for
//! keywords the exact phase found nowhere (the default global policy), so a
//! keyword the corpus actually contains is never diluted by near misses.
//!
//! Matchers are compiled once per call, before the document loop, and shared
//! read-only across documents.

mod cancel;
mod escalation;
mod phases;

use std::time::Duration;

pub use cancel::CancelFlag;

use crate::config::SearchRequest;
use crate::contracts::check_escalation_disjoint;
use crate::corpus::DocumentSource;
use crate::error::{Error, Result};
use crate::fuzzy::FuzzyMatcher;
use crate::matching::ExactMatcher;
use crate::scoring::{rank, Candidate};
use crate::timing::{timed, ExactPhaseTiming, FuzzyPhaseTiming, SearchTimings};
use crate::types::{prepare_keywords, EmptyReason, Keyword, SearchReport};

use escalation::EscalationSet;
use phases::{exact_phase, fuzzy_phase, load_documents};

/// Runs searches against one document source.
///
/// Holds the source and a [`CancelFlag`]; clone the flag (via
/// [`cancel_flag`](Self::cancel_flag)) to stop a search from another thread.
#[derive(Debug)]
pub struct Searcher<S> {
    source: S,
    cancel: CancelFlag,
}

impl<S: DocumentSource> Searcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cancel: CancelFlag::new(),
        }
    }

    /// Use an externally owned cancel flag.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one search.
    ///
    /// Fails only for an invalid request, a source that can't list its
    /// documents, or cancellation. Unreadable documents are skipped and
    /// reported in [`SearchReport::unavailable`].
    pub fn search(&self, request: &SearchRequest) -> Result<SearchReport> {
        request.validate()?;
        self.cancel.check()?;

        let keywords = prepare_keywords(&request.keywords);
        if keywords.is_empty() {
            tracing::debug!("no usable keywords; skipping scan");
            return Ok(empty_report(request, 0, Vec::new(), EmptyReason::NoKeywords));
        }

        let records = self.source.list_documents()?;
        let listed = records.len();

        // Exact phase. Timing covers text fetch, as the scan can't start without it.
        let (exact, exact_elapsed) = timed(|| -> Result<_> {
            let (documents, skipped) = load_documents(&self.source, records, &self.cancel)?;
            let unavailable: Vec<String> = skipped
                .iter()
                .filter_map(Error::unavailable_id)
                .map(str::to_string)
                .collect();
            let patterns: Vec<&str> = keywords.iter().map(|k| k.normalized.as_str()).collect();
            let matcher = ExactMatcher::compile(request.algorithm, &patterns)?;
            let tallies = exact_phase(&documents, &keywords, &matcher, &self.cancel)?;
            Ok((documents, unavailable, tallies))
        });
        let (documents, unavailable, exact_tallies) = exact?;
        tracing::debug!(
            algorithm = %request.algorithm,
            listed,
            scanned = documents.len(),
            unavailable = unavailable.len(),
            elapsed_ms = crate::timing::millis(exact_elapsed),
            "exact phase finished"
        );

        if documents.is_empty() {
            return Ok(empty_report(
                request,
                0,
                unavailable,
                EmptyReason::EmptyCorpus,
            ));
        }

        let escalation = EscalationSet::compute(request.escalation, &keywords, &exact_tallies);
        let escalated: Vec<String> = escalation
            .keywords()
            .iter()
            .map(|&k| keywords[k].normalized.clone())
            .collect();

        let (fuzzy_tallies, fuzzy_timing) = if escalation.is_empty() {
            (None, None)
        } else {
            let (fuzzy, fuzzy_elapsed) = timed(|| -> Result<_> {
                let matchers = compile_fuzzy(&keywords, &escalation, request.fuzzy_threshold)?;
                fuzzy_phase(&documents, &keywords, &matchers, &escalation, &self.cancel)
            });
            let tallies = fuzzy?;
            tracing::debug!(
                keywords = ?escalated,
                threshold = request.fuzzy_threshold,
                elapsed_ms = crate::timing::millis(fuzzy_elapsed),
                "fuzzy phase finished"
            );
            (
                Some(tallies),
                Some(FuzzyPhaseTiming {
                    keywords: escalated.len(),
                    elapsed: fuzzy_elapsed,
                }),
            )
        };

        let documents_scanned = documents.len();
        let mut fuzzy_tallies = fuzzy_tallies.map(Vec::into_iter);
        let candidates: Vec<Candidate> = documents
            .into_iter()
            .zip(exact_tallies)
            .map(|(doc, mut tally)| {
                if let Some(fuzzy) = fuzzy_tallies.as_mut().and_then(Iterator::next) {
                    tally.merge(fuzzy);
                }
                Candidate {
                    order: doc.order,
                    document: doc.record,
                    tally,
                }
            })
            .collect();

        if escalation.is_global() {
            check_escalation_disjoint(candidates.iter().map(|c| &c.tally), &escalated);
        }

        let results = rank(candidates, request.top_n);
        let empty_reason = results.is_empty().then_some(EmptyReason::NoMatches);

        let report = SearchReport {
            results,
            timings: SearchTimings {
                exact: ExactPhaseTiming {
                    algorithm: request.algorithm,
                    documents: documents_scanned,
                    elapsed: exact_elapsed,
                },
                fuzzy: fuzzy_timing,
            },
            documents_scanned,
            unavailable,
            escalated,
            empty_reason,
        };
        tracing::info!(
            results = report.results.len(),
            scanned = report.documents_scanned,
            escalated = report.escalated.len(),
            "search finished"
        );
        Ok(report)
    }
}

/// Run one search against `source`.
pub fn run_search<S>(source: &S, request: &SearchRequest) -> Result<SearchReport>
where
    S: DocumentSource + ?Sized,
{
    Searcher::new(source).search(request)
}

fn compile_fuzzy(
    keywords: &[Keyword],
    escalation: &EscalationSet,
    threshold: f64,
) -> Result<Vec<Option<FuzzyMatcher>>> {
    let mut matchers: Vec<Option<FuzzyMatcher>> = vec![None; keywords.len()];
    for &k in escalation.keywords() {
        matchers[k] = Some(FuzzyMatcher::new(&keywords[k].normalized, threshold)?);
    }
    Ok(matchers)
}

fn empty_report(
    request: &SearchRequest,
    documents_scanned: usize,
    unavailable: Vec<String>,
    reason: EmptyReason,
) -> SearchReport {
    SearchReport {
        results: Vec::new(),
        timings: SearchTimings {
            exact: ExactPhaseTiming {
                algorithm: request.algorithm,
                documents: documents_scanned,
                elapsed: Duration::ZERO,
            },
            fuzzy: None,
        },
        documents_scanned,
        unavailable,
        escalated: Vec::new(),
        empty_reason: Some(reason),
    }
}
