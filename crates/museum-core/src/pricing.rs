//! # Price Resolver
//!
//! Prices a single ticket request.
//!
//! ## Pricing
//! ```text
//! price = table[ticket][entrant]
//!       + Σ table.extras[extra][entrant]   for each DISTINCT extra
//! ```
//! Extras order and repeats in the request do not affect the result.

use tracing::debug;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{PriceTable, TicketRequest};
use crate::validation::validate_request;

/// Resolves the price of one ticket, in cents.
///
/// ## Example
/// ```rust
/// use museum_core::{resolve_price, PriceTable, TicketRequest};
///
/// let table = PriceTable::museum_default().unwrap();
///
/// let adult = TicketRequest::new("general", "adult");
/// assert_eq!(resolve_price(&table, &adult).unwrap().cents(), 3000);
///
/// let member = TicketRequest::new("membership", "child").with_extras(["movie"]);
/// assert_eq!(resolve_price(&table, &member).unwrap().cents(), 2500);
///
/// let kid = TicketRequest::new("general", "kid").with_extras(["movie"]);
/// assert_eq!(
///     resolve_price(&table, &kid).unwrap_err().to_string(),
///     "Entrant type 'incorrect-entrant' cannot be found."
/// );
/// ```
pub fn resolve_price(table: &PriceTable, request: &TicketRequest) -> ValidationResult<Money> {
    match validate_request(table, request) {
        Ok(checked) => Ok(checked.total()),
        Err(err) => {
            debug!(
                ticket_type = %request.ticket_type,
                entrant_type = %request.entrant_type,
                extras = ?request.extras,
                error = ?err,
                "Ticket request rejected"
            );
            Err(err)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
