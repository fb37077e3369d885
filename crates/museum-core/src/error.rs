//! # Error Types
//!
//! Domain-specific error types for museum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  museum-core errors (this file)                                        │
//! │  ├── ValidationError  - A ticket request the table cannot price        │
//! │  └── CoreError        - A price table that breaks its invariants       │
//! │                                                                         │
//! │  kiosk errors (app)                                                    │
//! │  └── KioskError       - I/O, config, CLI                               │
//! │                                                                         │
//! │  Flow: ValidationError → stdout, CoreError → KioskError → stderr       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Wording
//! The `Display` text of [`ValidationError`] is the customer-facing message
//! printed in place of a receipt. Unknown ticket types echo the value that was
//! sent. Unknown extras and entrants print a fixed placeholder instead of the
//! value; the value is still kept on the variant so logs can show it.

use thiserror::Error;

/// Placeholder printed for any unknown extra.
pub const UNKNOWN_EXTRA_LABEL: &str = "incorrect-extra";

/// Placeholder printed for any unknown entrant type.
pub const UNKNOWN_ENTRANT_LABEL: &str = "incorrect-entrant";

// =============================================================================
// Validation Error
// =============================================================================

/// A ticket request that cannot be priced against the given table.
///
/// Checks run in a fixed order (ticket type, extras, entrant type) and the
/// first failure is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Ticket type is not a key of the price table (or is the reserved
    /// `extras` key).
    #[error("Ticket type '{0}' cannot be found.")]
    UnknownTicketType(String),

    /// One of the requested extras is not listed under `extras`.
    #[error("Extra type '{label}' cannot be found.", label = UNKNOWN_EXTRA_LABEL)]
    UnknownExtra { extra: String },

    /// Entrant type has no price under the requested ticket type.
    #[error("Entrant type '{label}' cannot be found.", label = UNKNOWN_ENTRANT_LABEL)]
    UnknownEntrant { entrant: String },

    /// A line or batch total does not fit in `Money`.
    ///
    /// Verified tables keep every single ticket in range, so on those only a
    /// very large batch can hit this.
    #[error("Total price is too large to be calculated.")]
    TotalOverflow,
}

// =============================================================================
// Core Error
// =============================================================================

/// Price table integrity errors.
///
/// ## When This Occurs
/// - A table document fails to parse
/// - The table has no ticket types
/// - Entrant types differ between two entries
/// - An amount is negative
/// - A ticket with every extra would cost more than `Money` can hold
#[derive(Debug, Error)]
pub enum CoreError {
    /// Price table JSON could not be parsed.
    #[error("Price table is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The table defines no purchasable ticket types.
    #[error("Price table has no ticket types")]
    NoTicketTypes,

    /// Entrant types under `entry` differ from those under `reference`.
    ///
    /// ```text
    /// general:      child, adult, senior   ← reference
    /// extras.movie: child, adult           ← entry (senior missing)
    /// ```
    #[error("Entrant types of '{entry}' ({found:?}) do not match '{reference}' ({expected:?})")]
    EntrantMismatch {
        reference: String,
        expected: Vec<String>,
        entry: String,
        found: Vec<String>,
    },

    /// A base price or surcharge is below zero.
    #[error("Price for {entrant} under '{entry}' must not be negative ({cents} cents)")]
    NegativePrice {
        entry: String,
        entrant: String,
        cents: i64,
    },

    /// Base price under `entry` plus every extra overflows for `entrant`.
    #[error("Price for {entrant} under '{entry}' with all extras is too large")]
    PriceOverflow { entry: String, entrant: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of validating or pricing a single request.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result of price table operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ticket_type_echoes_value() {
        let err = ValidationError::UnknownTicketType("discount".to_string());
        assert_eq!(err.to_string(), "Ticket type 'discount' cannot be found.");
    }

    #[test]
    fn test_unknown_extra_uses_placeholder() {
        let err = ValidationError::UnknownExtra {
            extra: "parking".to_string(),
        };
        assert_eq!(err.to_string(), "Extra type 'incorrect-extra' cannot be found.");
    }

    #[test]
    fn test_unknown_entrant_uses_placeholder() {
        let err = ValidationError::UnknownEntrant {
            entrant: "kid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Entrant type 'incorrect-entrant' cannot be found."
        );
    }

    #[test]
    fn test_negative_price_message() {
        let err = CoreError::NegativePrice {
            entry: "general".to_string(),
            entrant: "adult".to_string(),
            cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "Price for adult under 'general' must not be negative (-100 cents)"
        );
    }

    #[test]
    fn test_overflow_messages() {
        assert_eq!(
            ValidationError::TotalOverflow.to_string(),
            "Total price is too large to be calculated."
        );

        let err = CoreError::PriceOverflow {
            entry: "general".to_string(),
            entrant: "adult".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Price for adult under 'general' with all extras is too large"
        );
    }
}
