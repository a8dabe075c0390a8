//! Subcommand runners: load inputs, call the library, render the output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use cvscan::{
    corpus, fuzzy, matching, normalize, Algorithm, DocumentSource, EscalationPolicy, Provenance,
    SearchOptions, SearchReport, Searcher,
};

use super::display::*;

/// Options for `cvscan search`, as parsed from the command line.
pub struct SearchArgs {
    pub corpus: PathBuf,
    pub keywords: Vec<String>,
    pub algorithm: Option<String>,
    pub top: Option<usize>,
    pub threshold: Option<f64>,
    pub config: Option<PathBuf>,
    pub per_document: bool,
    pub json: bool,
}

/// Config file values first, then flag overrides.
fn resolve_options(args: &SearchArgs) -> Result<SearchOptions> {
    let mut options = match &args.config {
        Some(path) => SearchOptions::from_file(path)?,
        None => SearchOptions::default(),
    };
    if let Some(algorithm) = &args.algorithm {
        options.algorithm = algorithm.clone();
    }
    if let Some(top) = args.top {
        options.top_n = top;
    }
    if let Some(threshold) = args.threshold {
        options.fuzzy_threshold = threshold;
    }
    if args.per_document {
        options.escalation = EscalationPolicy::PerDocument;
    }
    Ok(options)
}

#[cfg(feature = "parallel")]
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

pub fn search(args: SearchArgs) -> Result<()> {
    let request = resolve_options(&args)?.into_request(args.keywords.iter().cloned())?;
    let source = corpus::open(&args.corpus)
        .with_context(|| format!("cannot open corpus {}", args.corpus.display()))?;
    let searcher = Searcher::new(source);

    // Spinner draws on stderr, and only when nobody is reading JSON from us
    #[cfg(feature = "parallel")]
    let progress = (!args.json && use_colors()).then(|| spinner("searching..."));

    let report = searcher.search(&request);

    #[cfg(feature = "parallel")]
    {
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
    }

    let report = report?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, request.top_n);
    }
    Ok(())
}

fn print_report(report: &SearchReport, top_n: usize) {
    double_header();
    title(&format!("Top {} of {} documents", top_n, report.documents_scanned));
    double_footer();

    if let Some(reason) = report.empty_reason {
        section_top("No results");
        row(&format!(" {}", reason));
        section_bot();
    }

    for result in &report.results {
        let doc = &result.document;
        let heading = match &doc.name {
            Some(name) => format!("#{} {} ({})", result.rank, name, doc.id),
            None => format!("#{} {}", result.rank, doc.id),
        };
        section_top(&heading);
        if let Some(category) = &doc.category {
            row(&format!(" {} {}", dim("category"), category));
        }
        if let Some(path) = &doc.path {
            let path = path.display().to_string();
            row(&format!(" {} {}", dim("file    "), truncate_path(&path, BOX_WIDTH - 12)));
        }
        section_mid("matches");
        for hit in result.tally.hits() {
            let label = keyword_label(&hit.label, hit.provenance == Provenance::Fuzzy);
            row(&format!(" {} {}", count_value(hit.count), pad_right(&label, 40)));
        }
        row(&format!(" {} {}", count_value(result.total()), dim("total")));
        section_bot();
    }

    if !report.unavailable.is_empty() {
        section_top("Skipped (text unavailable)");
        for id in &report.unavailable {
            row(&format!(" {}", id));
        }
        section_bot();
    }

    section_top("Timing");
    row(&format!(
        " Exact Match ({}): {} documents {}",
        report.timings.exact.algorithm,
        report.timings.exact.documents,
        timing_ms(cvscan::timing::millis(report.timings.exact.elapsed))
    ));
    if let Some(fuzzy) = &report.timings.fuzzy {
        row(&format!(
            " Fuzzy Match: {} keywords {}",
            fuzzy.keywords,
            timing_ms(cvscan::timing::millis(fuzzy.elapsed))
        ));
        row(&format!(" {} {}", dim("escalated"), report.escalated.join(", ")));
    }
    section_bot();
}

pub fn scan(file: &Path, patterns: &[String], algorithm: &str, threshold: Option<f64>) -> Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    let text = normalize(&raw);

    match threshold {
        Some(threshold) => {
            section_top(&format!("Fuzzy scan (threshold {})", threshold));
            for pattern in patterns {
                let matches = fuzzy::search(&text, &normalize(pattern), threshold)?;
                row(&format!(" {} {}", pad_right(pattern, 24), count_value(matches.len())));
                for m in matches {
                    let window = text.get(m.start..m.start + m.len).unwrap_or_default();
                    row(&format!(
                        "   @{:<8} {} {}",
                        m.start,
                        pad_right(&format!("{:?}", window), 24),
                        dim(&format!("distance {} similarity {:.2}", m.distance, m.similarity))
                    ));
                }
            }
        }
        None => {
            let algorithm = Algorithm::resolve(algorithm);
            section_top(&format!("Exact scan ({})", algorithm));
            for pattern in patterns {
                let offsets = matching::search(algorithm, &text, &normalize(pattern))?;
                row(&format!(" {} {}", pad_right(pattern, 24), count_value(offsets.len())));
                if !offsets.is_empty() {
                    let listed: Vec<String> = offsets.iter().map(ToString::to_string).collect();
                    row(&format!("   {}", dim(&truncate_path(&listed.join(" "), BOX_WIDTH - 4))));
                }
            }
        }
    }
    section_bot();
    Ok(())
}

pub fn inspect(dir: &Path) -> Result<()> {
    let source = corpus::open(dir).with_context(|| format!("cannot open corpus {}", dir.display()))?;
    let documents = source.list_documents()?;

    section_top(&format!("{} ({} documents)", dir.display(), documents.len()));
    for doc in &documents {
        let available = source.fetch_text(doc).is_some();
        let name = doc.name.as_deref().unwrap_or("");
        let category = doc.category.as_deref().unwrap_or("");
        row(&format!(
            " {} {} {} {}",
            pad_right(&doc.id, 16),
            pad_right(name, 24),
            pad_right(&dim(category), 16),
            availability(available)
        ));
    }
    section_bot();
    Ok(())
}
