//! # Kiosk Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --prices ./tickets.json   --json                                   │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MUSEUM_NAME, MUSEUM_PRICE_TABLE, MUSEUM_OUTPUT, MUSEUM_LOG         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, otherwise                                         │
//! │     ~/.config/museum-kiosk/kiosk.toml (Linux)                          │
//! │     ~/Library/Application Support/org.museum.museum-kiosk/kiosk.toml   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     Dinosaur Museum, embedded price table, text output                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [museum]
//! name = "Dinosaur Museum"
//!
//! [prices]
//! table_path = "/etc/museum/tickets.json"
//!
//! [output]
//! format = "text"  # text | json
//!
//! [log]
//! filter = "warn,museum_kiosk=info,museum_core=info"
//! ```

use std::path::PathBuf;

use museum_core::DEFAULT_MUSEUM_NAME;
use serde::{Deserialize, Serialize};

use crate::error::{KioskError, KioskResult};

// =============================================================================
// Output Format
// =============================================================================

/// How results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Receipt text, bare cents, or the error message.
    #[default]
    Text,

    /// The same value as a JSON number or string.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(KioskError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumSettings {
    /// Name printed in the receipt banner.
    #[serde(default = "default_museum_name")]
    pub name: String,
}

fn default_museum_name() -> String {
    DEFAULT_MUSEUM_NAME.to_string()
}

impl Default for MuseumSettings {
    fn default() -> Self {
        MuseumSettings {
            name: default_museum_name(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSettings {
    /// JSON price table. `None` uses the table built into museum-core.
    #[serde(default)]
    pub table_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,museum_kiosk=info,museum_core=info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Kiosk Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub museum: MuseumSettings,

    #[serde(default)]
    pub prices: PriceSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub log: LogSettings,

    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl KioskConfig {
    /// Loads configuration from defaults, the config file and environment.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kiosk.toml)
    /// 3. Environment variables
    ///
    /// Validation is left to the caller so command line flags can be applied
    /// first.
    pub fn load(config_path: Option<PathBuf>) -> KioskResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    KioskError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = toml::from_str(&contents)?;
                config.source = Some(path);
            } else if explicit {
                return Err(KioskError::InvalidConfig(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> KioskResult<()> {
        if self.museum.name.trim().is_empty() {
            return Err(KioskError::InvalidConfig(
                "museum.name must not be empty".into(),
            ));
        }

        if let Some(ref path) = self.prices.table_path {
            if !path.is_file() {
                return Err(KioskError::InvalidConfig(format!(
                    "Price table not found: {}",
                    path.display()
                )));
            }
        }

        if self.log.filter.trim().is_empty() {
            return Err(KioskError::InvalidConfig(
                "log.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> KioskResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `MUSEUM_*` overrides from `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F) -> KioskResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("MUSEUM_NAME") {
            self.museum.name = name;
        }

        if let Some(path) = lookup("MUSEUM_PRICE_TABLE") {
            self.prices.table_path = Some(PathBuf::from(path));
        }

        if let Some(format) = lookup("MUSEUM_OUTPUT") {
            self.output.format = format.parse()?;
        }

        if let Some(filter) = lookup("MUSEUM_LOG") {
            self.log.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "museum", "museum-kiosk")
            .map(|dirs| dirs.config_dir().join("kiosk.toml"))
    }
}
