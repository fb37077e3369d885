//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Price museum tickets and print purchase receipts.
#[derive(Debug, Parser)]
#[command(name = "kiosk", version, about)]
pub struct Cli {
    /// Config file (default: platform config dir, kiosk.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON price table; overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub prices: Option<PathBuf>,

    /// Print the result as a JSON number or string
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price one ticket request, in cents
    Quote {
        /// Request JSON file, or `-` for stdin
        request: PathBuf,
    },

    /// Print the receipt for a batch of purchases
    Receipt {
        /// JSON array of requests, or `-` for stdin
        purchases: PathBuf,
    },

    /// Print the price table in use
    Prices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_receipt_with_global_flags() {
        let cli = Cli::parse_from(["kiosk", "receipt", "batch.json", "--json", "--prices", "t.json"]);
        assert!(cli.json);
        assert_eq!(cli.prices, Some(PathBuf::from("t.json")));
        assert!(matches!(
            cli.command,
            Command::Receipt { ref purchases } if purchases == &PathBuf::from("batch.json")
        ));
    }

    #[test]
    fn test_parse_quote_from_stdin() {
        let cli = Cli::parse_from(["kiosk", "-v", "quote", "-"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Quote { ref request } if request.as_os_str() == "-"));
    }
}
