//! # Vendor Ledger
//!
//! Each vendor's running outstanding balance: what the shop still owes from
//! invoices that were not fully paid at creation time.
//!
//! ## Closed Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Vendor Balance Lifecycle                        │
//! │                                                                     │
//! │  register_vendor() ─────────────► balance = 0                       │
//! │                                                                     │
//! │  post invoice, paid < total ────► apply_invoice_remainder()         │
//! │                                   balance += remaining_amount       │
//! │                                                                     │
//! │  (future) record_payment() ─────► balance -= amount                 │
//! │                                   — not in scope yet; nothing       │
//! │                                   decreases a balance today         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The balance is a running total, not a recomputation from invoice
//! history. There is no reconciliation pass.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::sequence::next_vendor_code;
use crate::types::Vendor;
use crate::validation::validate_vendor_name;

/// Returns a vendor's outstanding balance.
///
/// Zero for an unknown vendor: a missing ledger entry means nothing is
/// owed, it is not an error.
pub fn get_balance(vendors: &[Vendor], vendor_id: &str) -> Money {
    vendors
        .iter()
        .find(|v| v.id == vendor_id)
        .map(|v| v.balance)
        .unwrap_or_else(Money::zero)
}

/// True iff the vendor is owed money from earlier invoices.
///
/// Consumed before invoice creation to decide whether to show the operator
/// a debt warning. Advisory only: it never blocks posting.
pub fn has_outstanding_debt(vendors: &[Vendor], vendor_id: &str) -> bool {
    get_balance(vendors, vendor_id).is_positive()
}

/// Adds an invoice's unpaid remainder to the vendor's running balance.
///
/// Returns the updated balance. Unlike [`get_balance`], an unknown vendor
/// here is an error: silently dropping a debt increment would un-balance
/// the ledger.
pub fn apply_invoice_remainder(
    vendors: &mut [Vendor],
    vendor_id: &str,
    remainder: Money,
) -> CoreResult<Money> {
    let vendor = vendors
        .iter_mut()
        .find(|v| v.id == vendor_id)
        .ok_or_else(|| CoreError::VendorNotFound(vendor_id.to_string()))?;

    vendor.balance += remainder;
    Ok(vendor.balance)
}

/// Registers a new vendor with the next sequential code and a zero opening
/// balance, appending it to the collection.
///
/// Returns a clone of the vendor that was added.
pub fn register_vendor(vendors: &mut Vec<Vendor>, name: &str) -> CoreResult<Vendor> {
    validate_vendor_name(name)?;

    let vendor = Vendor {
        id: Uuid::new_v4().to_string(),
        code: next_vendor_code(vendors),
        name: name.trim().to_string(),
        balance: Money::zero(),
    };

    vendors.push(vendor.clone());
    Ok(vendor)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str, code: &str, balance: i64) -> Vendor {
        Vendor {
            id: id.to_string(),
            code: code.to_string(),
            name: format!("Vendor {code}"),
            balance: Money::from_piasters(balance),
        }
    }

    #[test]
    fn test_get_balance() {
        let vendors = vec![vendor("v1", "100", 540_000), vendor("v2", "101", 0)];

        assert_eq!(get_balance(&vendors, "v1").piasters(), 540_000);
        assert_eq!(get_balance(&vendors, "v2").piasters(), 0);
    }

    #[test]
    fn test_get_balance_unknown_vendor_is_zero() {
        let vendors = vec![vendor("v1", "100", 540_000)];
        assert!(get_balance(&vendors, "nobody").is_zero());
    }

    #[test]
    fn test_has_outstanding_debt() {
        let vendors = vec![vendor("v1", "100", 540_000), vendor("v2", "101", 0)];

        assert!(has_outstanding_debt(&vendors, "v1"));
        assert!(!has_outstanding_debt(&vendors, "v2"));
        assert!(!has_outstanding_debt(&vendors, "nobody"));
    }

    #[test]
    fn test_apply_invoice_remainder_accumulates() {
        let mut vendors = vec![vendor("v1", "100", 1000)];

        let updated =
            apply_invoice_remainder(&mut vendors, "v1", Money::from_piasters(3500)).unwrap();
        assert_eq!(updated.piasters(), 4500);

        // Running total, not a recomputation: a second increment stacks
        let updated =
            apply_invoice_remainder(&mut vendors, "v1", Money::from_piasters(500)).unwrap();
        assert_eq!(updated.piasters(), 5000);
        assert_eq!(vendors[0].balance.piasters(), 5000);
    }

    #[test]
    fn test_apply_invoice_remainder_unknown_vendor_fails() {
        let mut vendors = vec![vendor("v1", "100", 0)];
        let err = apply_invoice_remainder(&mut vendors, "ghost", Money::from_piasters(100));
        assert!(matches!(err, Err(CoreError::VendorNotFound(_))));
    }

    #[test]
    fn test_register_vendor_assigns_code_and_zero_balance() {
        let mut vendors = vec![vendor("v1", "100", 0), vendor("v2", "101", 0)];

        let new = register_vendor(&mut vendors, "Amal Trading Est.").unwrap();
        assert_eq!(new.code, "102");
        assert!(new.balance.is_zero());
        assert_eq!(vendors.len(), 3);
    }

    #[test]
    fn test_register_vendor_rejects_empty_name() {
        let mut vendors = Vec::new();
        assert!(register_vendor(&mut vendors, "  ").is_err());
        assert!(vendors.is_empty());
    }
}
