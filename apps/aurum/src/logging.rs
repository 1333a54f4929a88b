//! # Logging
//!
//! Tracing subscriber setup. `RUST_LOG` takes precedence over the
//! configured filter; `--verbose` raises the default to debug.
//!
//! Output goes to stderr so `--json-mode` keeps stdout machine-readable.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_LOG_FILTER: &str = "aurum=debug,aurum_core=debug,tower_http=debug";

/// Install the global tracing subscriber. Call once, at startup.
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        config.filter.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
