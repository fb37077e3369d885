//! # Outcome
//!
//! Single-slot result for callers that expect either the value or the error
//! message in the same place, with no wrapper.
//!
//! ```text
//! resolve_price  ─► Ok(3000)        ─► Outcome::Value(3000)  ─► 3000
//!                ─► Err(Unknown..)  ─► Outcome::Message(..)  ─► "Ticket type 'vip' cannot be found."
//! build_receipt  ─► Ok("Thank ..")  ─► Outcome::Value(..)    ─► "Thank you for visiting ..."
//! ```
//!
//! Inside the crate everything stays a `Result`; this type only exists at the
//! edge where results are printed or serialized.

use std::fmt;

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Either the computed value or the rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Value(T),
    Message(String),
}

impl<T> Outcome<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl<T> From<ValidationResult<T>> for Outcome<T> {
    fn from(result: ValidationResult<T>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(err) => Outcome::from(err),
        }
    }
}

impl<T> From<ValidationError> for Outcome<T> {
    fn from(err: ValidationError) -> Self {
        Outcome::Message(err.to_string())
    }
}

/// Prices print as bare cents, receipts and messages as plain text.
impl fmt::Display for Outcome<Money> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(price) => write!(f, "{}", price.cents()),
            Outcome::Message(message) => f.write_str(message),
        }
    }
}

impl fmt::Display for Outcome<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(text) | Outcome::Message(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
