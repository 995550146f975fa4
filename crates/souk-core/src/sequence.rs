//! # Sequential Code Assignment
//!
//! Business numbers for invoices and vendor codes, both assigned as
//! true-maximum-plus-one over the existing collection.
//!
//! Max-plus-one (rather than last-element-plus-one or count-plus-one) keeps
//! the sequence monotonic even if the collection is ever re-ordered,
//! filtered, or has gaps. The scan is O(n) per insert, which is fine at
//! whole-collection-snapshot scale; a shop does not post thousands of
//! purchase invoices a day.

use crate::types::{Invoice, Vendor};
use crate::{FIRST_INVOICE_NUMBER, FIRST_VENDOR_CODE};

/// Returns the number the next posted invoice will carry.
///
/// `max(existing) + 1`, or 1001 for the very first invoice.
///
/// ## Example
/// ```text
/// existing numbers [1001, 1002, 1005] → next is 1006 (max+1, not count+1)
/// ```
pub fn next_invoice_number(existing: &[Invoice]) -> i64 {
    existing
        .iter()
        .map(|inv| inv.invoice_number)
        .max()
        .map(|n| n + 1)
        .unwrap_or(FIRST_INVOICE_NUMBER)
}

/// Returns the code the next registered vendor will carry.
///
/// Codes are numeric strings starting at "100". Non-numeric codes (hand
/// edits in the stored JSON) are skipped rather than treated as fatal.
pub fn next_vendor_code(existing: &[Vendor]) -> String {
    existing
        .iter()
        .filter_map(|v| v.code.trim().parse::<i64>().ok())
        .max()
        .map(|n| n + 1)
        .unwrap_or(FIRST_VENDOR_CODE)
        .to_string()
}
