//! Multi-algorithm keyword search and ranking over resume corpora.
//!
//! Give it a corpus of plain-text documents and a list of keywords; get back
//! the documents ranked by how often the keywords occur. Exact matching runs
//! with one of three classical algorithms (KMP, Boyer–Moore, Aho–Corasick).
//! Keywords that no document contains exactly get a second chance through a
//! windowed Levenshtein search, so `"kubernets"` still finds `"kubernetes"`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────────────────────────┐
//! │  corpus.rs   │   │                    search/                       │
//! │ (Document-   │──▶│  load ─▶ exact phase ─▶ escalation ─▶ fuzzy phase│
//! │  Source)     │   │             │                            │       │
//! └──────────────┘   └─────────────┼────────────────────────────┼───────┘
//!                                  ▼                            ▼
//!                    ┌──────────────────────┐     ┌──────────────────────┐
//!                    │     matching/        │     │       fuzzy/         │
//!                    │ (Kmp, BoyerMoore,    │     │ (FuzzyMatcher,       │
//!                    │  AhoCorasick)        │     │  levenshtein)        │
//!                    └──────────────────────┘     └──────────────────────┘
//!                                  │                            │
//!                                  └─────────────┬──────────────┘
//!                                                ▼
//!                    ┌──────────────────────────────────────────────────┐
//!                    │  types.rs (MatchTally) ─▶ scoring/ (rank, top N) │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module      | Responsibility                                       |
//! |-------------|------------------------------------------------------|
//! | `matching`  | Exact matchers and the compiled `ExactMatcher`       |
//! | `fuzzy`     | Edit distance and windowed approximate search        |
//! | `search`    | The two-phase pipeline, cancellation                 |
//! | `scoring`   | Ranking by total, ties in corpus order               |
//! | `corpus`    | In-memory, directory and manifest document sources   |
//! | `config`    | `SearchOptions` (file/flags) and `SearchRequest`     |
//! | `contracts` | Debug-build invariant checks                         |
//!
//! # Usage
//!
//! ```
//! use cvscan::{run_search, Algorithm, MemoryCorpus, SearchRequest};
//!
//! let corpus = MemoryCorpus::new()
//!     .with_document("a", "Senior Java developer, SQL and more SQL")
//!     .with_document("b", "Kubernets operator, Java");
//!
//! let request = SearchRequest::new(["sql", "kubernetes"])
//!     .with_algorithm(Algorithm::BoyerMoore)
//!     .with_top_n(5);
//! let report = run_search(&corpus, &request).unwrap();
//!
//! // "sql" was found exactly; "kubernetes" only through its misspelling
//! assert_eq!(report.escalated, vec!["kubernetes"]);
//! assert_eq!(report.results.len(), 2);
//! println!("{}", report.timing_summary());
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod corpus;
mod error;
pub mod fuzzy;
pub mod logging;
pub mod matching;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod timing;
mod types;
mod utils;

pub use config::{EscalationPolicy, SearchOptions, SearchRequest};
pub use corpus::{DirectoryCorpus, DocumentSource, ManifestCorpus, MemoryCorpus};
pub use error::{Error, Result};
pub use fuzzy::{
    bounded_edit_distance, edit_distance, levenshtein_within, FuzzyMatch, FuzzyMatcher,
};
pub use matching::{search_multiple, AhoCorasick, Algorithm, BoyerMoore, ExactMatcher, Kmp};
pub use search::{run_search, CancelFlag, Searcher};
pub use timing::{ExactPhaseTiming, FuzzyPhaseTiming, SearchTimings};
pub use types::{
    prepare_keywords, DocumentRecord, EmptyReason, Keyword, KeywordHit, MatchTally, Provenance,
    RankedResult, SearchReport, FUZZY_SUFFIX,
};
pub use utils::{char_boundaries, normalize, normalize_keyword};
