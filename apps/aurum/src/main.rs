//! # Aurum - Gold Alloy Calculator
//!
//! The main binary for the Aurum calculator.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for lookups and calculations
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │             apps/aurum (THE BINARY)           │
//! │                                               │
//! │   ┌─────────────┐          ┌─────────────┐    │
//! │   │    CLI      │          │  HTTP API   │    │
//! │   │   (clap)    │          │   (axum)    │    │
//! │   └──────┬──────┘          └──────┬──────┘    │
//! │          └──────────┬─────────────┘           │
//! │                     ▼                         │
//! │             ┌───────────────┐                 │
//! │             │  aurum-core   │                 │
//! │             │ (CALCULATOR)  │                 │
//! │             └───────────────┘                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! aurum server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! aurum standards
//! aurum purity -w 10 -f 18 -t 24
//! aurum classify -g 75 --copper 12.5 --silver 12.5
//! ```

use aurum::{cli, config::AppConfig, logging};
use clap::Parser;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init_tracing(&config.logging, cli.verbose);

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Aurum startup banner.
fn print_banner() {
    println!(
        r#"
   █████╗ ██╗   ██╗██████╗ ██╗   ██╗███╗   ███╗
  ██╔══██╗██║   ██║██╔══██╗██║   ██║████╗ ████║
  ███████║██║   ██║██████╔╝██║   ██║██╔████╔██║
  ██╔══██║██║   ██║██╔══██╗██║   ██║██║╚██╔╝██║
  ██║  ██║╚██████╔╝██║  ██║╚██████╔╝██║ ╚═╝ ██║
  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝

  Gold Alloy Calculator v{}

  SNI 13-3487-2005
"#,
        env!("CARGO_PKG_VERSION")
    );
}
