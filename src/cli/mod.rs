// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvscan command-line interface.
//!
//! Three subcommands: `search` ranks a corpus directory against keywords,
//! `scan` runs one matcher over one file and prints offsets, and `inspect`
//! lists what a corpus directory contains.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cvscan",
    about = "Multi-algorithm keyword search over resume corpora",
    version
)]
pub struct Cli {
    /// Log phase details to stderr (overridden by CVSCAN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the documents in a corpus directory by keyword matches
    Search {
        /// Corpus directory (uses manifest.json if present, else every *.txt file)
        corpus: PathBuf,

        /// Keyword to search for (repeatable)
        #[arg(short, long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Exact algorithm: kmp, bm or ac
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Minimum fuzzy similarity, in (0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// JSON options file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fuzzy-search each document for the keywords it lacks, not only
        /// keywords missing from the whole corpus
        #[arg(long)]
        per_document: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one matcher over one text file and print match offsets
    Scan {
        /// Text file to scan
        file: PathBuf,

        /// Pattern to look for (repeatable)
        #[arg(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Exact algorithm: kmp, bm or ac
        #[arg(short, long, default_value = "kmp")]
        algorithm: String,

        /// Scan fuzzily at this similarity threshold instead of exactly
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// List a corpus directory's documents and whether their text is readable
    Inspect {
        /// Corpus directory
        corpus: PathBuf,
    },
}
