//! Failure isolation, invalid requests and cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::{ranked_ids, search};
use cvscan::{
    run_search, CancelFlag, DocumentRecord, DocumentSource, EmptyReason, Error, MemoryCorpus,
    SearchRequest, Searcher,
};

#[test]
fn test_unavailable_documents_are_skipped_and_reported() {
    let corpus = MemoryCorpus::new()
        .with_document("r1", "java")
        .with_unavailable("scanned-pdf")
        .with_document("r2", "java java");
    let report = search(&corpus, SearchRequest::new(["java"]));

    assert_eq!(ranked_ids(&report), vec!["r2", "r1"]);
    assert_eq!(report.unavailable, vec!["scanned-pdf"]);
    assert_eq!(report.documents_scanned, 2);
    assert_eq!(report.timings.exact.documents, 2);
}

#[test]
fn test_all_documents_unavailable_is_empty_corpus() {
    let corpus = MemoryCorpus::new().with_unavailable("a").with_unavailable("b");
    let report = search(&corpus, SearchRequest::new(["java"]));
    assert_eq!(report.empty_reason, Some(EmptyReason::EmptyCorpus));
    assert_eq!(report.unavailable.len(), 2);
}

#[test]
fn test_empty_corpus_is_not_an_error() {
    let report = search(&MemoryCorpus::new(), SearchRequest::new(["java"]));
    assert!(report.is_empty());
    assert_eq!(report.empty_reason, Some(EmptyReason::EmptyCorpus));
}

#[test]
fn test_invalid_requests_rejected() {
    let corpus = MemoryCorpus::new().with_document("r1", "java");
    for request in [
        SearchRequest::new(["java"]).with_top_n(0),
        SearchRequest::new(["java"]).with_threshold(0.0),
        SearchRequest::new(["java"]).with_threshold(-0.5),
        SearchRequest::new(["java"]).with_threshold(1.01),
    ] {
        assert!(matches!(
            run_search(&corpus, &request),
            Err(Error::InvalidRequest(_))
        ));
    }
}

/// Raises the cancel flag after a fixed number of fetches.
struct CancellingSource {
    inner: MemoryCorpus,
    cancel: CancelFlag,
    after: usize,
    fetched: AtomicUsize,
}

impl DocumentSource for CancellingSource {
    fn list_documents(&self) -> cvscan::Result<Vec<DocumentRecord>> {
        self.inner.list_documents()
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        if self.fetched.fetch_add(1, Ordering::SeqCst) + 1 >= self.after {
            self.cancel.cancel();
        }
        self.inner.fetch_text(document)
    }
}

#[test]
fn test_cancellation_discards_partial_results() {
    let cancel = CancelFlag::new();
    let inner = MemoryCorpus::from_texts((0..64).map(|i| (format!("r{}", i), "java")));
    let source = CancellingSource {
        inner,
        cancel: cancel.clone(),
        after: 1,
        fetched: AtomicUsize::new(0),
    };

    let searcher = Searcher::new(source).with_cancel_flag(cancel);
    let result = searcher.search(&SearchRequest::new(["java"]));
    assert!(matches!(result, Err(Error::Cancelled)));
}

/// A source that can't even list its documents.
struct BrokenSource;

impl DocumentSource for BrokenSource {
    fn list_documents(&self) -> cvscan::Result<Vec<DocumentRecord>> {
        Err(Error::InvalidRequest("index offline".to_string()))
    }

    fn fetch_text(&self, _document: &DocumentRecord) -> Option<String> {
        None
    }
}

#[test]
fn test_listing_failure_propagates() {
    assert!(run_search(&BrokenSource, &SearchRequest::new(["java"])).is_err());
}
