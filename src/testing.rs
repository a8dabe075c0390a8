//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::fs;
use std::io;
use std::path::Path;

use crate::corpus::MemoryCorpus;
use crate::types::DocumentRecord;

/// Create a document record with display metadata.
pub fn make_record(id: &str, name: &str, category: &str) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        path: None,
    }
}

/// In-memory corpus from `(id, text)` pairs, in the given order.
pub fn corpus_of(docs: &[(&str, &str)]) -> MemoryCorpus {
    MemoryCorpus::from_texts(docs.iter().copied())
}

/// A handful of short resumes with known keyword counts.
///
/// | id      | java | python | sql | kubernetes |
/// |---------|------|--------|-----|------------|
/// | backend | 2    | 0      | 3   | 0          |
/// | data    | 0    | 2      | 1   | 0          |
/// | devops  | 0    | 1      | 0   | 2          |
/// | design  | 0    | 0      | 0   | 0          |
pub fn sample_resumes() -> MemoryCorpus {
    let mut corpus = MemoryCorpus::new();
    let docs = [
        (
            "backend",
            "Ada Park",
            "ENGINEERING",
            "Backend engineer. Java services on Postgres; SQL tuning, \
             SQL migrations and reporting sql. Mentored Java interns.",
        ),
        (
            "data",
            "Sam Ortiz",
            "DATA",
            "Data analyst. Python notebooks, Python ETL jobs, warehouse SQL.",
        ),
        (
            "devops",
            "Kim Novak",
            "OPERATIONS",
            "Platform engineer running Kubernetes clusters. Wrote Kubernetes \
             operators and Python tooling.",
        ),
        (
            "design",
            "Lee Moreau",
            "DESIGN",
            "Product designer. Figma prototypes and user research.",
        ),
    ];
    for (id, name, category, text) in docs {
        corpus.push(make_record(id, name, category), Some(text.to_string()));
    }
    corpus
}

/// Write `(id, text)` pairs as `<id>.txt` files under `dir`.
pub fn write_text_corpus(dir: &Path, docs: &[(&str, &str)]) -> io::Result<()> {
    for (id, text) in docs {
        fs::write(dir.join(format!("{}.txt", id)), text)?;
    }
    Ok(())
}
