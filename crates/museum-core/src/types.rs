//! # Domain Types
//!
//! The price table and the ticket request.
//!
//! ## Price Table Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          PriceTable                                     │
//! │                                                                         │
//! │  "general"    ─► { child: 2000, adult: 3000, senior: 2500 }            │
//! │  "membership" ─► { child: 1500, adult: 2800, senior: 2300 }            │
//! │  "extras"     ─► {                                                      │
//! │                    "movie":     { child: 1000, adult: 1000, ... },     │
//! │                    "education": { child: 1000, adult: 1200, ... },     │
//! │                    "terrace":   { child:  500, adult: 1000, ... },     │
//! │                  }                                                      │
//! │                                                                         │
//! │  Every ticket type and every extra prices the same set of entrants.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `extras` is a reserved key: it sits next to the ticket types in the JSON
//! document but is never itself a ticket type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_table;

/// Reserved top-level key holding extra surcharges.
pub const EXTRAS_KEY: &str = "extras";

/// The museum's published prices, compiled into the crate.
const DEFAULT_TABLE_JSON: &str = include_str!("../data/tickets.json");

/// Entrant type → amount.
pub type PriceTier = BTreeMap<String, Money>;

// =============================================================================
// Price Table
// =============================================================================

/// Base prices per ticket type and surcharges per extra, keyed by entrant.
///
/// Immutable once built. Callers pass it by reference to every pricing call;
/// nothing in this crate holds on to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Extra → entrant → surcharge.
    #[serde(default)]
    extras: BTreeMap<String, PriceTier>,

    /// Ticket type → entrant → base price.
    #[serde(flatten)]
    tickets: BTreeMap<String, PriceTier>,
}

impl PriceTable {
    /// Builds a table from already-split ticket and extra maps.
    ///
    /// No integrity check is run here; call [`PriceTable::verify`] when the
    /// maps come from outside the program.
    pub fn new(tickets: BTreeMap<String, PriceTier>, extras: BTreeMap<String, PriceTier>) -> Self {
        PriceTable { extras, tickets }
    }

    /// Parses a JSON price table and checks its invariants.
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::PriceTable;
    ///
    /// let table = PriceTable::from_json(r#"{
    ///     "general": { "adult": 3000 },
    ///     "extras": { "movie": { "adult": 1000 } }
    /// }"#).unwrap();
    /// assert!(table.ticket("general").is_some());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let table: PriceTable = serde_json::from_str(json)?;
        table.verify()?;

        debug!(
            ticket_types = table.tickets.len(),
            extras = table.extras.len(),
            "Price table loaded"
        );
        Ok(table)
    }

    /// The museum's default table (`data/tickets.json`).
    pub fn museum_default() -> CoreResult<Self> {
        Self::from_json(DEFAULT_TABLE_JSON)
    }

    /// Checks that the table has ticket types, uniform entrant sets, no
    /// negative amounts and no ticket that overflows with every extra added.
    pub fn verify(&self) -> CoreResult<()> {
        validate_table(self)
    }

    /// Base prices for a ticket type. `extras` is never a ticket type.
    pub fn ticket(&self, ticket_type: &str) -> Option<&PriceTier> {
        if ticket_type == EXTRAS_KEY {
            return None;
        }
        self.tickets.get(ticket_type)
    }

    /// Surcharges for an extra.
    pub fn extra(&self, extra: &str) -> Option<&PriceTier> {
        self.extras.get(extra)
    }

    /// Iterates ticket types with their base prices, in key order.
    pub fn tickets(&self) -> impl Iterator<Item = (&str, &PriceTier)> {
        self.tickets
            .iter()
            .filter(|(name, _)| name.as_str() != EXTRAS_KEY)
            .map(|(name, tier)| (name.as_str(), tier))
    }

    /// Iterates extras with their surcharges, in key order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &PriceTier)> {
        self.extras.iter().map(|(name, tier)| (name.as_str(), tier))
    }

    /// Entrant types priced by this table.
    ///
    /// Taken from the first ticket type; on a verified table every entry has
    /// the same set.
    pub fn entrant_types(&self) -> Vec<&str> {
        self.tickets()
            .next()
            .map(|(_, tier)| tier.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// Ticket Request
// =============================================================================

/// One ticket being priced or purchased.
///
/// ## JSON Shape
/// ```json
/// { "ticketType": "general", "entrantType": "child", "extras": ["movie"] }
/// ```
/// The order of `extras` and any repeats do not change the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub ticket_type: String,
    pub entrant_type: String,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketRequest {
    /// Creates a request with no extras.
    pub fn new(ticket_type: impl Into<String>, entrant_type: impl Into<String>) -> Self {
        TicketRequest {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: Vec::new(),
        }
    }

    /// Replaces the extras on this request.
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }

    /// True when `extra` appears at least once.
    pub fn has_extra(&self, extra: &str) -> bool {
        self.extras.iter().any(|e| e == extra)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
