//! # Museum Kiosk Entry Point
//!
//! ```bash
//! kiosk quote request.json
//! kiosk receipt purchases.json --json
//! MUSEUM_PRICE_TABLE=./tickets.json kiosk receipt -
//! ```
//!
//! Setup lives in lib.rs for testability.

use std::process::ExitCode;

use clap::Parser;
use museum_kiosk::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match museum_kiosk::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("kiosk: {err}");
            ExitCode::FAILURE
        }
    }
}
