// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-document work of a search: loading, exact scan, fuzzy scan.
//!
//! Each phase is a map over documents. Documents don't interact, so with the
//! `parallel` feature the map runs on rayon's pool; `collect` keeps corpus
//! order either way. The cancel flag is checked before each document.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::{check_fuzzy_accepted, check_occurrences_ascending};
use crate::corpus::DocumentSource;
use crate::error::{Error, Result};
use crate::fuzzy::FuzzyMatcher;
use crate::matching::ExactMatcher;
use crate::types::{DocumentRecord, Keyword, MatchTally, Provenance};
use crate::utils::normalize;

use super::escalation::EscalationSet;
use super::CancelFlag;

/// A document whose text was fetched, held for both phases.
#[derive(Debug, Clone)]
pub(crate) struct LoadedDocument {
    /// Position in the source's listing.
    pub order: usize,
    pub record: DocumentRecord,
    /// Normalized text; the only view matchers see.
    pub text: String,
}

/// Map `f` over `items` in order, stopping with `Cancelled` once the flag is raised.
fn map_documents<I, T, F>(items: &[I], cancel: &CancelFlag, f: F) -> Result<Vec<T>>
where
    I: Sync,
    T: Send,
    F: Fn(usize, &I) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        items
            .par_iter()
            .enumerate()
            .map(|(i, item)| {
                cancel.check()?;
                Ok(f(i, item))
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                cancel.check()?;
                Ok(f(i, item))
            })
            .collect()
    }
}

/// Fetch and normalize every document's text.
///
/// Returns the loaded documents and one `DocumentUnavailable` per document
/// whose text couldn't be fetched, in listing order.
pub(crate) fn load_documents<S>(
    source: &S,
    records: Vec<DocumentRecord>,
    cancel: &CancelFlag,
) -> Result<(Vec<LoadedDocument>, Vec<Error>)>
where
    S: DocumentSource + ?Sized,
{
    let texts = map_documents(&records, cancel, |_, record| {
        source
            .fetch_text(record)
            .map(|text| normalize(&text))
            .ok_or_else(|| Error::DocumentUnavailable {
                id: record.id.clone(),
            })
    })?;

    let mut loaded = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (order, (record, text)) in records.into_iter().zip(texts).enumerate() {
        match text {
            Ok(text) => loaded.push(LoadedDocument {
                order,
                record,
                text,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "skipping document");
                skipped.push(err);
            }
        }
    }
    Ok((loaded, skipped))
}

/// Count exact occurrences of every keyword in every document.
pub(crate) fn exact_phase(
    documents: &[LoadedDocument],
    keywords: &[Keyword],
    matcher: &ExactMatcher,
    cancel: &CancelFlag,
) -> Result<Vec<MatchTally>> {
    map_documents(documents, cancel, |_, doc| {
        let mut tally = MatchTally::new();
        for (keyword, occurrences) in keywords.iter().zip(matcher.find_all(&doc.text)) {
            check_occurrences_ascending(&occurrences);
            tally.record(keyword, Provenance::Exact, occurrences.len());
        }
        tally
    })
}

/// Count fuzzy occurrences of each document's escalated keywords.
///
/// `matchers` is indexed by keyword; entries are `Some` exactly for the
/// escalated keywords.
pub(crate) fn fuzzy_phase(
    documents: &[LoadedDocument],
    keywords: &[Keyword],
    matchers: &[Option<FuzzyMatcher>],
    escalation: &EscalationSet,
    cancel: &CancelFlag,
) -> Result<Vec<MatchTally>> {
    map_documents(documents, cancel, |i, doc| {
        let mut tally = MatchTally::new();
        for &k in escalation.for_document(i) {
            if let Some(matcher) = &matchers[k] {
                let matches = matcher.find_all(&doc.text);
                check_fuzzy_accepted(&doc.text, matcher, &matches);
                tally.record(&keywords[k], Provenance::Fuzzy, matches.len());
            }
        }
        tally
    })
}
