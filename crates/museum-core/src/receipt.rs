//! # Receipt Builder
//!
//! Turns a batch of ticket requests into a printed receipt.
//!
//! ## Layout
//! ```text
//! Thank you for visiting the Dinosaur Museum!
//! -------------------------------------------
//! Adult General Admission: $50.00 (Movie Access, Terrace Access)
//! Senior General Admission: $35.00 (Terrace Access)
//! Child General Admission: $45.00 (Education Access, Movie Access, Terrace Access)
//! Child General Admission: $45.00 (Education Access, Movie Access, Terrace Access)
//! -------------------------------------------
//! TOTAL: $175.00
//! ```
//! The rule is as wide as the banner. There is no newline after the total.
//!
//! ## Failure
//! Requests are validated in order. The first invalid one aborts the batch and
//! its error is returned on its own; lines already built are dropped.

use std::fmt;

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{PriceTable, TicketRequest};
use crate::validation::{validate_request, CheckedRequest};

/// Museum named in the receipt banner.
pub const DEFAULT_MUSEUM_NAME: &str = "Dinosaur Museum";

/// Extras with a fixed position in the label list, highest priority first.
const EXTRA_PRIORITY: [&str; 3] = ["education", "movie", "terrace"];

// =============================================================================
// Receipt Line
// =============================================================================

/// One admission on the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub entrant_label: String,
    pub ticket_label: String,
    pub price: Money,
    pub extra_labels: Vec<String>,
}

impl ReceiptLine {
    fn from_checked(checked: &CheckedRequest<'_>) -> Self {
        ReceiptLine {
            entrant_label: display_label(checked.entrant_type()),
            ticket_label: display_label(checked.ticket_type()),
            price: checked.total(),
            extra_labels: extra_labels(checked),
        }
    }
}

/// `Adult General Admission: $50.00 (Movie Access, Terrace Access)`
impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Admission: {}",
            self.entrant_label, self.ticket_label, self.price
        )?;
        if !self.extra_labels.is_empty() {
            write!(f, " ({})", self.extra_labels.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A fully priced batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    banner: String,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of every line price.
    pub fn total(&self) -> Money {
        self.total
    }

    fn rule(&self) -> String {
        "-".repeat(self.banner.chars().count())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.rule();
        writeln!(f, "{}", self.banner)?;
        writeln!(f, "{rule}")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "TOTAL: {}", self.total)
    }
}

// =============================================================================
// Receipt Builder
// =============================================================================

/// Builds receipts against one price table.
///
/// ## Example
/// ```rust
/// use museum_core::{PriceTable, ReceiptBuilder, TicketRequest};
///
/// let table = PriceTable::museum_default().unwrap();
/// let receipt = ReceiptBuilder::new(&table)
///     .compose(&[TicketRequest::new("general", "adult")])
///     .unwrap();
///
/// assert_eq!(receipt.total().cents(), 3000);
/// assert!(receipt.to_string().ends_with("TOTAL: $30.00"));
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptBuilder<'a> {
    table: &'a PriceTable,
    museum_name: String,
}

impl<'a> ReceiptBuilder<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        ReceiptBuilder {
            table,
            museum_name: DEFAULT_MUSEUM_NAME.to_string(),
        }
    }

    /// Names a different museum in the banner.
    pub fn with_museum_name(mut self, name: impl Into<String>) -> Self {
        self.museum_name = name.into();
        self
    }

    /// Prices every request and collects the receipt lines.
    pub fn compose(&self, purchases: &[TicketRequest]) -> ValidationResult<Receipt> {
        let mut lines = Vec::with_capacity(purchases.len());
        let mut total = Money::zero();

        for (index, request) in purchases.iter().enumerate() {
            let checked = validate_request(self.table, request).map_err(|err| {
                debug!(index, error = ?err, "Purchase batch rejected");
                err
            })?;

            let line = ReceiptLine::from_checked(&checked);
            total = total.checked_add(line.price).ok_or_else(|| {
                debug!(index, "Purchase batch total overflowed");
                ValidationError::TotalOverflow
            })?;
            lines.push(line);
        }

        debug!(lines = lines.len(), total = total.cents(), "Receipt composed");
        Ok(Receipt {
            banner: format!("Thank you for visiting the {}!", self.museum_name),
            lines,
            total,
        })
    }

    /// Prices every request and renders the receipt text.
    pub fn build(&self, purchases: &[TicketRequest]) -> ValidationResult<String> {
        self.compose(purchases).map(|receipt| receipt.to_string())
    }
}

/// Renders the receipt for a batch using the default banner.
pub fn build_receipt(table: &PriceTable, purchases: &[TicketRequest]) -> ValidationResult<String> {
    ReceiptBuilder::new(table).build(purchases)
}

// =============================================================================
// Labels
// =============================================================================

/// `child` → `Child`, `membership` → `Membership`.
fn display_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn access_label(extra: &str) -> String {
    format!("{} Access", display_label(extra))
}

/// Labels for the extras on one line.
///
/// Known extras come in priority order (education, movie, terrace). When the
/// set is exactly education + terrace the two are printed terrace first.
/// Existing receipts depend on that ordering; revisit only if exact output
/// compatibility is dropped. Extras outside the priority list follow in key
/// order.
fn extra_labels(checked: &CheckedRequest<'_>) -> Vec<String> {
    let mut labels: Vec<String> = EXTRA_PRIORITY
        .iter()
        .filter(|extra| checked.has_extra(extra))
        .map(|extra| access_label(extra))
        .collect();

    if checked.has_extra("education") && checked.has_extra("terrace") && !checked.has_extra("movie")
    {
        labels.swap(0, 1);
    }

    labels.extend(
        checked
            .extras()
            .filter(|extra| !EXTRA_PRIORITY.contains(extra))
            .map(access_label),
    );
    labels
}

// =============================================================================
// Unit Tests
// =============================================================================
