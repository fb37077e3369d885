//! # Kiosk Error Types
//!
//! Everything that can stop the kiosk before a price or receipt is printed.
//!
//! A rejected ticket request is NOT one of these: it is a normal outcome and
//! its message is printed on stdout like a receipt would be.

use std::path::PathBuf;

use museum_core::CoreError;
use thiserror::Error;

/// Result type alias for kiosk operations.
pub type KioskResult<T> = Result<T, KioskError>;

#[derive(Debug, Error)]
pub enum KioskError {
    /// An input or config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading stdin or writing stdout failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request or purchase file is not the expected JSON shape.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid TOML for `KioskConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but fails validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The price table failed to parse or breaks its invariants.
    #[error("Price table error: {0}")]
    PriceTable(#[from] CoreError),
}
