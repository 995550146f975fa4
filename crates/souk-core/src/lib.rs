//! # souk-core: Pure Business Logic for the Souk Back-Office
//!
//! This crate is the **heart** of the Souk back-office. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Souk Back-Office Architecture                     │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────┐     │
//! │  │                  Operator UI (forms, tables)              │     │
//! │  │   Vendor picker ──► Line entry ──► Payment ──► Print      │     │
//! │  └────────────────────────────┬──────────────────────────────┘     │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────┐     │
//! │  │              ★ souk-core (THIS CRATE) ★                   │     │
//! │  │                                                           │     │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐          │     │
//! │  │  │  money  │ │ pricing │ │ invoice │ │ ledger  │          │     │
//! │  │  │  Money  │ │ selling │ │  Draft  │ │ balance │          │     │
//! │  │  │ Margin  │ │  price  │ │  post   │ │ updates │          │     │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘          │     │
//! │  │                                                           │     │
//! │  │  NO I/O • NO STORE ACCESS • PURE FUNCTIONS                │     │
//! │  └────────────────────────────┬──────────────────────────────┘     │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────┐     │
//! │  │            souk-store (Persistence Layer)                 │     │
//! │  │     JSON key-value store, whole-collection snapshots      │     │
//! │  └───────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vendor, Product, Invoice, OrderRequest, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Selling-price derivation from cost and margin
//! - [`catalog`] - Product registration
//! - [`invoice`] - Invoice draft assembly and posting rules
//! - [`ledger`] - Vendor balance accounting
//! - [`sequence`] - Sequential invoice numbers and vendor codes
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation at entity-creation seams
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in piasters (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use souk_core::invoice::{InvoiceDraft, LineItemUpdate};
//! use souk_core::money::Money;
//! use souk_core::types::MarginRate;
//!
//! let margin = MarginRate::from_bps(1500); // 15%
//!
//! let mut draft = InvoiceDraft::new();
//! draft.select_vendor("v1");
//! draft.add_line_item();
//! draft.update_line_item(0, LineItemUpdate::Name("Premium rice 1kg".into()), margin);
//! draft.update_line_item(0, LineItemUpdate::CostPrice(Money::from_piasters(2000)), margin);
//! draft.update_line_item(0, LineItemUpdate::Quantity(2), margin);
//!
//! let invoice = draft.post(&[]).unwrap();
//! assert_eq!(invoice.invoice_number, 1001);
//! assert_eq!(invoice.total_amount.piasters(), 4000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod sequence;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use souk_core::Money` instead of
// `use souk_core::money::Money`

pub use catalog::{register_product, ProductEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{derive_status, InvoiceDraft, LineItemUpdate};
pub use money::Money;
pub use pricing::derive_selling_price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First invoice number ever issued.
///
/// ## Why 1001?
/// The shop's paper invoice book started in the thousands; the digital
/// sequence continues the convention so printed numbers stay four digits.
pub const FIRST_INVOICE_NUMBER: i64 = 1001;

/// First vendor code ever issued (codes are numeric strings: "100", "101", …).
pub const FIRST_VENDOR_CODE: i64 = 100;

/// Days between an invoice's creation date and its due-date marker.
pub const INVOICE_DUE_DAYS: i64 = 7;

/// Default profit margin in basis points (15%).
///
/// Used to seed `AppSettings` on first run; every derivation reads the
/// configured value at call time, never this constant directly.
pub const DEFAULT_PROFIT_MARGIN_BPS: i32 = 1500;

/// Stock level below which a product shows the reorder badge.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
