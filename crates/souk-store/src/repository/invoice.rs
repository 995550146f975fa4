//! # Invoice Repository
//!
//! Store operations for the invoices collection, including the one
//! cross-collection write in the system: posting an invoice whose unpaid
//! remainder lands on the vendor's ledger balance.
//!
//! ## Posting Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       post(draft)                                   │
//! │                                                                     │
//! │  1. read invoices snapshot                                          │
//! │  2. draft.post(&invoices)      ← validation + number + totals       │
//! │  3. remainder > 0?                                                  │
//! │     └── yes: read vendors, balance += remainder, write vendors      │
//! │  4. append invoice, write invoices                                  │
//! │                                                                     │
//! │  The ledger write comes FIRST: an unknown vendor id fails the       │
//! │  whole post before anything touches disk.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use souk_core::{ledger, sequence, Invoice, InvoiceDraft, Vendor};

use crate::error::StoreResult;
use crate::store::{keys, JsonStore};

/// Repository for invoice store operations.
#[derive(Debug)]
pub struct InvoiceRepository<'a> {
    store: &'a mut JsonStore,
}

impl<'a> InvoiceRepository<'a> {
    /// Creates a new InvoiceRepository over the given store.
    pub fn new(store: &'a mut JsonStore) -> Self {
        InvoiceRepository { store }
    }

    /// Returns the full invoices collection (empty for a fresh store).
    pub fn list(&self) -> StoreResult<Vec<Invoice>> {
        self.store.get(keys::INVOICES)
    }

    /// The number the next posted invoice will carry; shown in the entry
    /// form header before the operator saves anything.
    pub fn next_number(&self) -> StoreResult<i64> {
        Ok(sequence::next_invoice_number(&self.list()?))
    }

    /// Posts a draft: validates, numbers, totals, and persists it, and
    /// applies any unpaid remainder to the vendor's running balance.
    ///
    /// The ledger update is deliberate and explicit — a Partial invoice
    /// that did not increase the vendor's debt would leave the ledger
    /// lying about what the shop owes.
    pub fn post(&mut self, draft: &InvoiceDraft) -> StoreResult<Invoice> {
        let mut invoices = self.list()?;
        let invoice = draft.post(&invoices)?;

        if invoice.remaining_amount.is_positive() {
            let mut vendors: Vec<Vendor> = self.store.get(keys::VENDORS)?;
            let balance = ledger::apply_invoice_remainder(
                &mut vendors,
                &invoice.vendor_id,
                invoice.remaining_amount,
            )?;
            self.store.set(keys::VENDORS, &vendors)?;

            info!(
                vendor_id = %invoice.vendor_id,
                remainder = %invoice.remaining_amount,
                balance = %balance,
                "Applied invoice remainder to vendor balance"
            );
        }

        invoices.push(invoice.clone());
        self.store.set(keys::INVOICES, &invoices)?;

        info!(
            number = invoice.invoice_number,
            vendor_id = %invoice.vendor_id,
            total = %invoice.total_amount,
            status = ?invoice.status,
            "Posted purchase invoice"
        );
        Ok(invoice)
    }
}
