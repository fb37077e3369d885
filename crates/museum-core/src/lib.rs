//! # museum-core: Admission Pricing & Receipts
//!
//! Pure functions that price museum tickets and print purchase receipts from
//! a caller-supplied price table. No I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Museum Admissions                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/kiosk (binary)                            │   │
//! │  │   config ──► load price table ──► read purchases ──► print     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ museum-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌────────────┐   ┌───────────┐               │   │
//! │  │   │ validation│──►│  pricing   │──►│  receipt  │               │   │
//! │  │   │ 3 checks  │   │ base+extras│   │ lines+sum │               │   │
//! │  │   └───────────┘   └────────────┘   └───────────┘               │   │
//! │  │        ▲                                                        │   │
//! │  │   ┌────┴──────┐   ┌────────────┐   ┌───────────┐               │   │
//! │  │   │   types   │   │   money    │   │  outcome  │               │   │
//! │  │   │PriceTable │   │  cents     │   │ value|msg │               │   │
//! │  │   └───────────┘   └────────────┘   └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL PRICES • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `PriceTable`, `TicketRequest`
//! - [`money`] - integer cents with `$D.CC` display
//! - [`validation`] - request checks and table integrity
//! - [`pricing`] - [`resolve_price`]
//! - [`receipt`] - [`build_receipt`], [`ReceiptBuilder`]
//! - [`outcome`] - value-or-message form for printing/serializing results
//! - [`error`] - error types
//!
//! ## Example Usage
//!
//! ```rust
//! use museum_core::{build_receipt, resolve_price, PriceTable, TicketRequest};
//!
//! let table = PriceTable::museum_default().unwrap();
//!
//! let request = TicketRequest::new("general", "child").with_extras(["movie"]);
//! assert_eq!(resolve_price(&table, &request).unwrap().cents(), 3000);
//!
//! let receipt = build_receipt(&table, &[request]).unwrap();
//! assert!(receipt.contains("Child General Admission: $30.00 (Movie Access)"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod outcome;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use outcome::Outcome;
pub use pricing::resolve_price;
pub use receipt::{build_receipt, Receipt, ReceiptBuilder, ReceiptLine, DEFAULT_MUSEUM_NAME};
pub use types::{PriceTable, PriceTier, TicketRequest, EXTRAS_KEY};
