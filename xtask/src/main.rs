//! Custom cargo commands for cvscan.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, every feature combination
//!   cargo xtask check     - Quick check (test + clippy, default features)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets the crate must build and pass tests under.
const FEATURE_MATRIX: &[&[&str]] = &[
    &[],
    &["--no-default-features"],
    &["--features", "fold-diacritics"],
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + contract checks)
  test      Run all Rust tests under every feature combination
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("cvscan Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired into the pipeline\n");

    println!("[2/4] Running Rust tests (feature matrix)...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying documented defaults...");
    verify_defaults()?;
    println!("✓ README matches config defaults\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests under each feature set
fn test() -> Result<()> {
    for features in FEATURE_MATRIX {
        let mut args = vec!["test", "--quiet"];
        args.extend_from_slice(features);
        println!("  cargo {}", args.join(" "));
        run_cargo(&args)?;
    }
    Ok(())
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every runtime contract must still be called from the pipeline.
fn check_contract_calls() -> Result<()> {
    const CONTRACTS: &[&str] = &[
        "check_occurrences_ascending",
        "check_fuzzy_accepted",
        "check_escalation_disjoint",
        "check_ranking_sorted",
        "check_truncation",
    ];

    let root = project_root()?;
    let mut missing = Vec::new();
    for contract in CONTRACTS {
        let pattern = format!("{}(", contract);
        let output = Command::new("grep")
            .args(["-rl", pattern.as_str(), "--include=*.rs", "."])
            .current_dir(root.join("src"))
            .output()
            .context("Failed to run grep")?;

        // The definition lives in contracts.rs; a call site must exist elsewhere.
        let callers = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|path| !path.ends_with("contracts.rs"))
            .count();
        if callers == 0 {
            missing.push(*contract);
        }
    }

    if !missing.is_empty() {
        bail!("Contracts defined but never called: {}", missing.join(", "));
    }
    Ok(())
}

/// The README's stated defaults must match `src/config.rs`.
fn verify_defaults() -> Result<()> {
    let root = project_root()?;
    let config_rs =
        std::fs::read_to_string(root.join("src/config.rs")).context("Failed to read config.rs")?;
    let readme =
        std::fs::read_to_string(root.join("README.md")).context("Failed to read README.md")?;

    for name in ["DEFAULT_TOP_N", "DEFAULT_FUZZY_THRESHOLD"] {
        let Some(value) = extract_const(&config_rs, name) else {
            bail!("{} not found in src/config.rs", name);
        };
        if !readme.contains(&format!("default {}", value)) {
            bail!("README does not document {} = {}", name, value);
        }
    }
    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<String> {
    // Look for "pub const NAME: type = value;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim().to_string())
}
