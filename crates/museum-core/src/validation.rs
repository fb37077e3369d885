//! # Validation Module
//!
//! Request validation and price table integrity checks.
//!
//! ## Request Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_request(table, request)                                       │
//! │                                                                         │
//! │  1. ticket type ∈ table (not "extras")?  ── no ──► UnknownTicketType    │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  2. every extra ∈ table.extras?          ── no ──► UnknownExtra         │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  3. entrant priced for this ticket?      ── no ──► UnknownEntrant       │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  4. base + surcharges fits in Money?     ── no ──► TotalOverflow        │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  CheckedRequest { base, surcharges, total }                             │
//! │                                                                         │
//! │  First failure wins. Order is part of the contract: a request with a   │
//! │  bad extra AND a bad entrant reports the extra.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both the price resolver and the receipt builder go through
//! [`validate_request`], so a batch rejection is always the same error the
//! resolver would give for that request alone.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{PriceTable, PriceTier, TicketRequest};

// =============================================================================
// Checked Request
// =============================================================================

/// A request that passed validation, with its amounts already looked up.
///
/// Extras are held as a set: repeats in the request collapse to one
/// surcharge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRequest<'a> {
    ticket_type: &'a str,
    entrant_type: &'a str,
    base: Money,
    surcharges: BTreeMap<&'a str, Money>,
    total: Money,
}

impl<'a> CheckedRequest<'a> {
    pub fn ticket_type(&self) -> &'a str {
        self.ticket_type
    }

    pub fn entrant_type(&self) -> &'a str {
        self.entrant_type
    }

    /// Ticket price before extras.
    pub fn base(&self) -> Money {
        self.base
    }

    /// Distinct extras, in key order.
    pub fn extras(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.surcharges.keys().copied()
    }

    pub fn has_extra(&self, extra: &str) -> bool {
        self.surcharges.contains_key(extra)
    }

    /// Base price plus one surcharge per distinct extra.
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Request Validators
// =============================================================================

/// Validates a ticket request against a price table.
///
/// ## Example
/// ```rust
/// use museum_core::{PriceTable, TicketRequest};
/// use museum_core::validation::validate_request;
///
/// let table = PriceTable::museum_default().unwrap();
/// let request = TicketRequest::new("general", "child").with_extras(["movie", "movie"]);
///
/// let checked = validate_request(&table, &request).unwrap();
/// assert_eq!(checked.total().cents(), 3000);
/// ```
pub fn validate_request<'a>(
    table: &'a PriceTable,
    request: &'a TicketRequest,
) -> ValidationResult<CheckedRequest<'a>> {
    let tier = table
        .ticket(&request.ticket_type)
        .ok_or_else(|| ValidationError::UnknownTicketType(request.ticket_type.clone()))?;

    let mut extra_tiers = BTreeMap::new();
    for extra in &request.extras {
        let extra_tier = table
            .extra(extra)
            .ok_or_else(|| ValidationError::UnknownExtra {
                extra: extra.clone(),
            })?;
        extra_tiers.insert(extra.as_str(), extra_tier);
    }

    let entrant = request.entrant_type.as_str();
    let base = price_for(tier, entrant)?;

    let mut surcharges = BTreeMap::new();
    for (extra, extra_tier) in extra_tiers {
        // Only reachable on an unverified table with uneven entrant sets.
        surcharges.insert(extra, price_for(extra_tier, entrant)?);
    }

    // Only reachable on an unverified table.
    let total = Money::checked_sum(std::iter::once(base).chain(surcharges.values().copied()))
        .ok_or(ValidationError::TotalOverflow)?;

    Ok(CheckedRequest {
        ticket_type: request.ticket_type.as_str(),
        entrant_type: entrant,
        base,
        surcharges,
        total,
    })
}

fn price_for(tier: &PriceTier, entrant: &str) -> ValidationResult<Money> {
    tier.get(entrant)
        .copied()
        .ok_or_else(|| ValidationError::UnknownEntrant {
            entrant: entrant.to_string(),
        })
}

// =============================================================================
// Table Validators
// =============================================================================

/// Checks a price table's invariants.
///
/// ## Rules
/// - At least one ticket type
/// - Every ticket type and every extra prices the same entrant types
/// - No negative amounts (zero is allowed)
/// - Every ticket type with every extra added still fits in `Money`
pub fn validate_table(table: &PriceTable) -> CoreResult<()> {
    let mut tickets = table.tickets();
    let (reference, reference_tier) = tickets.next().ok_or(CoreError::NoTicketTypes)?;
    let expected = entrant_keys(reference_tier);

    let extras = table
        .extras()
        .map(|(name, tier)| (format!("extras.{name}"), tier));
    let entries = std::iter::once((reference.to_string(), reference_tier))
        .chain(tickets.map(|(name, tier)| (name.to_string(), tier)))
        .chain(extras);

    for (entry, tier) in entries {
        let found = entrant_keys(tier);
        if found != expected {
            return Err(CoreError::EntrantMismatch {
                reference: reference.to_string(),
                expected,
                entry,
                found,
            });
        }

        for (entrant, amount) in tier {
            validate_amount(&entry, entrant, *amount)?;
        }
    }

    for (ticket_type, tier) in table.tickets() {
        for (entrant, base) in tier {
            let surcharges = table
                .extras()
                .filter_map(|(_, extra)| extra.get(entrant).copied());
            if Money::checked_sum(std::iter::once(*base).chain(surcharges)).is_none() {
                return Err(CoreError::PriceOverflow {
                    entry: ticket_type.to_string(),
                    entrant: entrant.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validates a single base price or surcharge.
///
/// ## Example
/// ```rust
/// use museum_core::Money;
/// use museum_core::validation::validate_amount;
///
/// assert!(validate_amount("general", "adult", Money::from_cents(3000)).is_ok());
/// assert!(validate_amount("general", "adult", Money::zero()).is_ok());
/// assert!(validate_amount("general", "adult", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_amount(entry: &str, entrant: &str, amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(CoreError::NegativePrice {
            entry: entry.to_string(),
            entrant: entrant.to_string(),
            cents: amount.cents(),
        });
    }

    Ok(())
}

fn entrant_keys(tier: &PriceTier) -> Vec<String> {
    tier.keys().cloned().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriceTable {
        PriceTable::museum_default().unwrap()
    }

    #[test]
    fn test_validate_request_ok() {
        let table = table();
        let request = TicketRequest::new("membership", "senior").with_extras(["terrace"]);
        let checked = validate_request(&table, &request).unwrap();

        assert_eq!(checked.ticket_type(), "membership");
        assert_eq!(checked.entrant_type(), "senior");
        assert_eq!(checked.base(), Money::from_cents(2300));
        assert!(checked.has_extra("terrace"));
        assert_eq!(checked.total(), Money::from_cents(3300));
    }

    #[test]
    fn test_duplicate_extras_collapse() {
        let table = table();
        let request =
            TicketRequest::new("general", "adult").with_extras(["movie", "terrace", "movie"]);
        let checked = validate_request(&table, &request).unwrap();

        assert_eq!(checked.extras().collect::<Vec<_>>(), vec!["movie", "terrace"]);
        assert_eq!(checked.total(), Money::from_cents(5000));
    }

    #[test]
    fn test_unknown_ticket_type() {
        let table = table();
        let request = TicketRequest::new("discount", "adult");
        assert_eq!(
            validate_request(&table, &request).unwrap_err(),
            ValidationError::UnknownTicketType("discount".to_string())
        );
    }

    #[test]
    fn test_extras_key_is_not_a_ticket_type() {
        let table = table();
        let request = TicketRequest::new("extras", "adult");
        assert!(matches!(
            validate_request(&table, &request),
            Err(ValidationError::UnknownTicketType(t)) if t == "extras"
        ));
    }

    #[test]
    fn test_check_order_ticket_before_extra_before_entrant() {
        let table = table();

        let all_bad = TicketRequest::new("vip", "kid").with_extras(["parking"]);
        assert!(matches!(
            validate_request(&table, &all_bad),
            Err(ValidationError::UnknownTicketType(_))
        ));

        let extra_and_entrant_bad = TicketRequest::new("general", "kid").with_extras(["parking"]);
        assert!(matches!(
            validate_request(&table, &extra_and_entrant_bad),
            Err(ValidationError::UnknownExtra { extra }) if extra == "parking"
        ));

        let entrant_bad = TicketRequest::new("general", "kid").with_extras(["movie"]);
        assert!(matches!(
            validate_request(&table, &entrant_bad),
            Err(ValidationError::UnknownEntrant { entrant }) if entrant == "kid"
        ));
    }

    #[test]
    fn test_validate_table_default_ok() {
        assert!(validate_table(&table()).is_ok());
    }

    #[test]
    fn test_validate_table_empty() {
        let table = PriceTable::default();
        assert!(matches!(validate_table(&table), Err(CoreError::NoTicketTypes)));
    }

    #[test]
    fn test_validate_table_entrant_mismatch_in_extra() {
        let result = PriceTable::from_json(
            r#"{
                "general": { "child": 2000, "adult": 3000 },
                "extras": { "movie": { "child": 1000 } }
            }"#,
        );
        match result {
            Err(CoreError::EntrantMismatch { entry, found, .. }) => {
                assert_eq!(entry, "extras.movie");
                assert_eq!(found, vec!["child".to_string()]);
            }
            other => panic!("expected entrant mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_table_entrant_mismatch_between_tickets() {
        let result = PriceTable::from_json(
            r#"{
                "general": { "child": 2000, "adult": 3000 },
                "membership": { "child": 1500, "adult": 2800, "senior": 2300 }
            }"#,
        );
        assert!(matches!(result, Err(CoreError::EntrantMismatch { .. })));
    }

    #[test]
    fn test_validate_table_negative_price() {
        let result = PriceTable::from_json(
            r#"{
                "general": { "adult": 3000 },
                "extras": { "movie": { "adult": -5 } }
            }"#,
        );
        assert!(matches!(
            result,
            Err(CoreError::NegativePrice { cents: -5, .. })
        ));
    }

    #[test]
    fn test_validate_table_price_overflow() {
        let result = PriceTable::from_json(
            r#"{
                "general": { "adult": 9223372036854775807 },
                "extras": { "movie": { "adult": 1 } }
            }"#,
        );
        match result {
            Err(CoreError::PriceOverflow { entry, entrant }) => {
                assert_eq!(entry, "general");
                assert_eq!(entrant, "adult");
            }
            other => panic!("expected price overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_table_largest_price_fits() {
        let result = PriceTable::from_json(
            r#"{
                "general": { "adult": 9223372036854775806 },
                "extras": { "movie": { "adult": 1 } }
            }"#,
        );
        let table = result.unwrap();
        let request = TicketRequest::new("general", "adult").with_extras(["movie"]);
        assert_eq!(
            validate_request(&table, &request).unwrap().total(),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_unverified_table_overflow_is_rejected() {
        let tickets = BTreeMap::from([(
            "general".to_string(),
            PriceTier::from([("adult".to_string(), Money::from_cents(i64::MAX))]),
        )]);
        let extras = BTreeMap::from([(
            "movie".to_string(),
            PriceTier::from([("adult".to_string(), Money::from_cents(1))]),
        )]);
        let table = PriceTable::new(tickets, extras);

        let request = TicketRequest::new("general", "adult").with_extras(["movie"]);
        assert_eq!(
            validate_request(&table, &request).unwrap_err(),
            ValidationError::TotalOverflow
        );
    }

    #[test]
    fn test_validate_table_malformed_json() {
        let result = PriceTable::from_json(r#"{ "general": { "adult": "thirty" } }"#);
        assert!(matches!(result, Err(CoreError::Malformed(_))));
    }

    #[test]
    fn test_unverified_table_with_uneven_extra_rejects_entrant() {
        let mut tickets = BTreeMap::new();
        tickets.insert(
            "general".to_string(),
            PriceTier::from([("adult".to_string(), Money::from_cents(3000))]),
        );
        let mut extras = BTreeMap::new();
        extras.insert(
            "movie".to_string(),
            PriceTier::from([("child".to_string(), Money::from_cents(1000))]),
        );
        let table = PriceTable::new(tickets, extras);

        let request = TicketRequest::new("general", "adult").with_extras(["movie"]);
        assert!(matches!(
            validate_request(&table, &request),
            Err(ValidationError::UnknownEntrant { .. })
        ));
    }
}
