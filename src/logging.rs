//! Tracing initialization.
//!
//! Log output is off the data path: events go to stderr so `--json` output on
//! stdout stays machine-readable. The filter comes from `CVSCAN_LOG` using the
//! usual `EnvFilter` syntax (`CVSCAN_LOG=cvscan=debug`).

use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CVSCAN_LOG";

static INIT: Once = Once::new();

fn filter(default_level: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()))
}

/// Initialize tracing for the CLI. Safe to call multiple times.
///
/// `verbose` lowers the default level from WARN to DEBUG; an explicit
/// `CVSCAN_LOG` always wins.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter(level))
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(std::io::stderr)
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}

/// Initialize tracing for tests: DEBUG by default, captured by the test harness.
pub fn init_for_tests() {
    INIT.call_once(|| {
        // Another test binary may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter(tracing::Level::DEBUG))
            .with_target(true)
            .compact()
            .with_test_writer()
            .try_init();
    });
}
