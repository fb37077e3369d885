//! # Museum Kiosk
//!
//! Command line front end for museum-core.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse CLI                                                           │
//! │  2. Load config (file + env), apply CLI flags, validate                 │
//! │  3. Initialize tracing (stderr)                                         │
//! │  4. Load price table (file or built-in)                                 │
//! │  5. Read request / purchases JSON                                       │
//! │  6. Price or build receipt, print result on stdout                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//! - `0` the price or receipt was printed
//! - `2` the request was rejected; the rejection message was printed instead
//! - `1` anything else (bad config, unreadable file, bad price table)
//!
//! ## Sample Inputs
//! `apps/kiosk/examples/` holds a sample `kiosk.toml`, a single `request.json`
//! and the four-ticket `purchases.json` batch:
//! ```bash
//! kiosk --config apps/kiosk/examples/kiosk.toml receipt apps/kiosk/examples/purchases.json
//! ```

pub mod cli;
pub mod config;
pub mod error;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use museum_core::{resolve_price, Money, Outcome, PriceTable, ReceiptBuilder, TicketRequest};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::{KioskConfig, OutputFormat};
use error::{KioskError, KioskResult};

/// Exit status for a rejected request.
const EXIT_REJECTED: u8 = 2;

/// What a command produced: the text for stdout and whether it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub accepted: bool,
}

/// Runs the kiosk for parsed arguments.
pub fn run(cli: Cli) -> KioskResult<ExitCode> {
    let config = resolve_config(&cli)?;
    init_tracing(&config.log.filter, cli.verbose);

    info!(
        source = ?config.source,
        museum = %config.museum.name,
        output = %config.output.format,
        "Configuration loaded"
    );

    let table = load_price_table(&config)?;
    let rendered = execute(&cli.command, &table, &config)?;

    println!("{}", rendered.text);

    Ok(if rendered.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    })
}

/// Loads the config and applies command line flags on top.
pub fn resolve_config(cli: &Cli) -> KioskResult<KioskConfig> {
    let mut config = KioskConfig::load(cli.config.clone())?;

    if let Some(ref prices) = cli.prices {
        config.prices.table_path = Some(prices.clone());
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - `--verbose` - debug for the kiosk and core crates
/// - otherwise the configured `log.filter`
///
/// Logs go to stderr; stdout is reserved for the printed result.
fn init_tracing(filter: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info,museum_kiosk=debug,museum_core=debug")
        } else {
            EnvFilter::new(filter)
        }
    });

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Loads the configured price table, or the built-in one.
pub fn load_price_table(config: &KioskConfig) -> KioskResult<PriceTable> {
    let table = match config.prices.table_path {
        Some(ref path) => {
            info!(path = %path.display(), "Loading price table");
            PriceTable::from_json(&read_input(path)?)?
        }
        None => {
            debug!("Using built-in price table");
            PriceTable::museum_default()?
        }
    };

    debug!(entrants = ?table.entrant_types(), "Price table ready");
    Ok(table)
}

/// Runs one command against a loaded table.
pub fn execute(
    command: &Command,
    table: &PriceTable,
    config: &KioskConfig,
) -> KioskResult<Rendered> {
    let format = config.output.format;

    match command {
        Command::Quote { request } => {
            let request: TicketRequest = serde_json::from_str(&read_input(request)?)?;
            let outcome: Outcome<Money> = resolve_price(table, &request).into();
            render(&outcome, outcome.is_value(), format)
        }
        Command::Receipt { purchases } => {
            let purchases: Vec<TicketRequest> = serde_json::from_str(&read_input(purchases)?)?;
            debug!(count = purchases.len(), "Purchases read");

            let outcome: Outcome<String> = ReceiptBuilder::new(table)
                .with_museum_name(config.museum.name.as_str())
                .build(&purchases)
                .into();
            render(&outcome, outcome.is_value(), format)
        }
        Command::Prices => Ok(Rendered {
            text: serde_json::to_string_pretty(table)?,
            accepted: true,
        }),
    }
}

fn render<T>(outcome: &T, accepted: bool, format: OutputFormat) -> KioskResult<Rendered>
where
    T: Serialize + std::fmt::Display,
{
    let text = match format {
        OutputFormat::Text => outcome.to_string(),
        OutputFormat::Json => serde_json::to_string(outcome)?,
    };
    Ok(Rendered { text, accepted })
}

/// Reads a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> KioskResult<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).map_err(|source| KioskError::Read {
        path: path.to_path_buf(),
        source,
    })
}
