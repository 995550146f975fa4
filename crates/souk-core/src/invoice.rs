//! # Invoice Builder
//!
//! Assembles a purchase invoice draft line by line, then posts it.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Invoice Draft Lifecycle                         │
//! │                                                                     │
//! │  1. OPEN DRAFT                                                      │
//! │     └── InvoiceDraft::new() → vendor unset, no items, paid = 0      │
//! │                                                                     │
//! │  2. SELECT VENDOR                                                   │
//! │     └── select_vendor() — caller checks the ledger first and may    │
//! │         show a debt warning; the warning never blocks the draft     │
//! │                                                                     │
//! │  3. EDIT LINES                                                      │
//! │     └── add_line_item() → blank line (qty 1, zero prices)           │
//! │     └── update_line_item() → cost change re-derives selling price   │
//! │     └── remove_line_item()                                          │
//! │                                                                     │
//! │  4. POST                                                            │
//! │     └── post() → Invoice { number, totals, status, dates }          │
//! │         Validation failure leaves the draft open for correction.    │
//! │         Appending to storage and updating the vendor ledger is the  │
//! │         caller's job (see souk-store).                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::derive_selling_price;
use crate::sequence::next_invoice_number;
use crate::types::{Invoice, InvoiceItem, InvoiceStatus, MarginRate};
use crate::INVOICE_DUE_DAYS;

// =============================================================================
// Line Item Updates
// =============================================================================

/// A single field edit on a draft line.
///
/// Typed instead of stringly-keyed: the compiler, not the form layer,
/// decides which edits re-derive which fields.
#[derive(Debug, Clone)]
pub enum LineItemUpdate {
    /// Plain replacement.
    ProductId(String),
    /// Plain replacement.
    Barcode(String),
    /// Plain replacement.
    Name(String),
    /// Recomputes the line total.
    Quantity(i64),
    /// Re-derives the selling price from the margin and recomputes the
    /// line total.
    CostPrice(Money),
    /// Manual override of the derived selling price.
    SellingPrice(Money),
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// An in-progress purchase invoice before posting.
///
/// Drafts are permissive: lines start blank, edits are never validated, and
/// bad numeric input upstream coerces to zero. Validation happens once, at
/// [`InvoiceDraft::post`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Selected vendor; empty until the operator picks one.
    pub vendor_id: String,

    /// Ordered line items.
    pub items: Vec<InvoiceItem>,

    /// Amount the operator intends to settle at creation. Defaults to zero.
    pub paid_amount: Money,
}

impl InvoiceDraft {
    /// Opens a fresh empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the vendor for this draft.
    ///
    /// Checking `ledger::has_outstanding_debt` first and warning the
    /// operator is the caller's concern; the draft does not care.
    pub fn select_vendor(&mut self, vendor_id: impl Into<String>) {
        self.vendor_id = vendor_id.into();
    }

    /// Appends a blank line (quantity 1, empty name/barcode, zero prices).
    ///
    /// No validation at add time.
    pub fn add_line_item(&mut self) {
        self.items.push(InvoiceItem::blank());
    }

    /// Applies a single field edit to the line at `index`.
    ///
    /// Setting the cost price re-derives the selling price from `margin`
    /// (the configured global margin, passed in at call time) and
    /// recomputes the line total. Setting the quantity recomputes the
    /// total only. Everything else is a plain replacement.
    ///
    /// Re-derivation is idempotent: applying the same cost twice yields
    /// the same selling price and total as applying it once.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers only ever reference
    /// lines they just rendered, so a bad index is a programmer error.
    pub fn update_line_item(&mut self, index: usize, update: LineItemUpdate, margin: MarginRate) {
        let item = &mut self.items[index];

        match update {
            LineItemUpdate::ProductId(id) => item.product_id = id,
            LineItemUpdate::Barcode(barcode) => item.barcode = barcode,
            LineItemUpdate::Name(name) => item.name = name,
            LineItemUpdate::Quantity(qty) => {
                item.quantity = qty;
                item.total = item.cost_price.multiply_quantity(item.quantity);
            }
            LineItemUpdate::CostPrice(cost) => {
                item.cost_price = cost;
                item.selling_price = derive_selling_price(cost, margin);
                item.total = item.cost_price.multiply_quantity(item.quantity);
            }
            LineItemUpdate::SellingPrice(price) => item.selling_price = price,
        }
    }

    /// Removes the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, same contract as
    /// [`InvoiceDraft::update_line_item`].
    pub fn remove_line_item(&mut self, index: usize) {
        self.items.remove(index);
    }

    /// Sum of all line totals. Zero for an empty draft.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.total).sum()
    }

    /// Sets the amount settled at creation time.
    pub fn set_paid_amount(&mut self, amount: Money) {
        self.paid_amount = amount;
    }

    /// Posts the draft: validates it and produces the final [`Invoice`].
    ///
    /// On success the invoice carries:
    /// - a fresh UUID id,
    /// - `invoice_number` = max over `existing` + 1 (1001 if none),
    /// - `total_amount` = sum of line totals,
    /// - `remaining_amount` = total − paid (negative if overpaid; not
    ///   clamped),
    /// - `status` per [`derive_status`],
    /// - `date` = now, `expiry_date` = now + 7 days.
    ///
    /// Posting does NOT append the invoice to storage and does NOT touch
    /// the vendor ledger — both are the persistence layer's job, so a
    /// validation failure here provably mutates nothing.
    pub fn post(&self, existing: &[Invoice]) -> CoreResult<Invoice> {
        if self.vendor_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "vendorId".to_string(),
            }
            .into());
        }

        if self.items.is_empty() {
            return Err(ValidationError::EmptyCollection {
                field: "items".to_string(),
            }
            .into());
        }

        let total_amount = self.total();
        let now = Utc::now();

        Ok(Invoice {
            id: Uuid::new_v4().to_string(),
            invoice_number: next_invoice_number(existing),
            vendor_id: self.vendor_id.clone(),
            items: self.items.clone(),
            total_amount,
            paid_amount: self.paid_amount,
            remaining_amount: total_amount - self.paid_amount,
            status: derive_status(total_amount, self.paid_amount),
            date: now,
            expiry_date: now + Duration::days(INVOICE_DUE_DAYS),
        })
    }
}

// =============================================================================
// Status Derivation
// =============================================================================

/// Settlement status at save time: `Paid` iff `paid ≥ total`, otherwise
/// `Partial`.
///
/// Posting never produces `Unpaid` — that variant only exists as the
/// pre-save default on a draft's display.
pub fn derive_status(total: Money, paid: Money) -> InvoiceStatus {
    if paid >= total {
        InvoiceStatus::Paid
    } else {
        InvoiceStatus::Partial
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
