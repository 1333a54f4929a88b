//! # Aurum CLI Module
//!
//! This module implements the CLI interface for Aurum.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `standards` - Print the gold standard table
//! - `lookup` - Show one karat's entry
//! - `purity` - Convert a mass between karats
//! - `classify` - Classify a blend to its closest karat
//! - `price` - Price a piece from its weight

mod commands;

use crate::config::AppConfig;
use aurum_core::{AurumError, MixComposition};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Aurum - Gold Alloy Calculator
///
/// Converts gold between karats and classifies blends against the
/// SNI 13-3487-2005 purity table.
#[derive(Parser, Debug)]
#[command(name = "aurum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the gold standard table
    Standards,

    /// Show the entry for one karat
    Lookup {
        /// Karat to look up (e.g. 18)
        karat: u32,
    },

    /// Convert a mass of gold from one karat to another
    Purity {
        /// Weight of the starting material, in grams
        #[arg(short, long, allow_negative_numbers = true)]
        weight: f64,

        /// Karat of the starting material
        #[arg(short, long)]
        from: u32,

        /// Karat to convert to
        #[arg(short, long)]
        to: u32,
    },

    /// Classify a blend to its closest karat
    Classify {
        /// Gold share, in percent
        #[arg(short, long, allow_negative_numbers = true)]
        gold: f64,

        /// Copper share, in percent
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        copper: f64,

        /// Silver share, in percent
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        silver: f64,

        /// Platinum share, in percent
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        platinum: f64,

        /// Palladium share, in percent
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        palladium: f64,
    },

    /// Price a piece from its weight and the gold price per gram
    Price {
        /// Weight, in grams
        #[arg(short, long, allow_negative_numbers = true)]
        weight: f64,

        /// Price per gram, e.g. "Rp 1.250.000" or 1250000
        #[arg(short, long)]
        price: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli, config: AppConfig) -> Result<(), AurumError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            cmd_server(json_mode, config, host, port).await
        }
        Some(Commands::Standards) => cmd_standards(json_mode),
        Some(Commands::Lookup { karat }) => cmd_lookup(json_mode, karat),
        Some(Commands::Purity { weight, from, to }) => cmd_purity(json_mode, weight, from, to),
        Some(Commands::Classify {
            gold,
            copper,
            silver,
            platinum,
            palladium,
        }) => cmd_classify(
            json_mode,
            MixComposition::new(gold, copper, silver)
                .with_platinum(platinum)
                .with_palladium(palladium),
        ),
        Some(Commands::Price { weight, price }) => cmd_price(json_mode, weight, &price),
        None => cmd_standards(json_mode),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_purity_command() {
        let cli = Cli::try_parse_from(["aurum", "purity", "-w", "10", "-f", "18", "-t", "24"])
            .unwrap();
        match cli.command {
            Some(Commands::Purity { weight, from, to }) => {
                assert_eq!(weight, 10.0);
                assert_eq!(from, 18);
                assert_eq!(to, 24);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn classify_metals_default_to_zero() {
        let cli = Cli::try_parse_from(["aurum", "classify", "-g", "75"]).unwrap();
        match cli.command {
            Some(Commands::Classify {
                gold,
                copper,
                silver,
                platinum,
                palladium,
            }) => {
                assert_eq!(gold, 75.0);
                assert_eq!(copper + silver + platinum + palladium, 0.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["aurum", "standards", "--json-mode", "-q"]).unwrap();
        assert!(cli.json_mode);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Standards)));
    }

    #[test]
    fn price_accepts_negative_weight_for_validation() {
        let cli = Cli::try_parse_from(["aurum", "price", "-w", "-1", "-p", "100"]).unwrap();
        match cli.command {
            Some(Commands::Price { weight, price }) => {
                assert_eq!(weight, -1.0);
                assert_eq!(price, "100");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn server_accepts_json_mode() {
        let cli = Cli::try_parse_from(["aurum", "server", "--json-mode", "-p", "9000"]).unwrap();
        assert!(cli.json_mode);
        assert!(matches!(
            cli.command,
            Some(Commands::Server { port: Some(9000), .. })
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["aurum"]).unwrap();
        assert!(cli.command.is_none());
    }
}
