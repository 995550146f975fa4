//! # Domain Types
//!
//! Core domain types used throughout the Souk back-office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Vendor      │   │    Invoice     │   │  InvoiceItem   │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  product_id    │      │
//! │  │  code ("100"+) │   │  invoice_number│   │  cost_price    │      │
//! │  │  name          │   │  items         │   │  selling_price │      │
//! │  │  balance       │   │  total/paid    │   │  total (cost×q)│      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │   MarginRate   │   │ InvoiceStatus  │   │  OrderRequest  │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  bps (i32)     │   │  Paid          │   │  Pending       │      │
//! │  │  1500 = 15%    │   │  Partial       │   │  Received      │      │
//! │  └────────────────┘   │  Unpaid        │   └────────────────┘      │
//! │                       └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for references between collections
//! - Business ID: (vendor code, invoice number) - human-readable, sequential

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Margin Rate
// =============================================================================

/// Profit margin represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (the default shop margin)
///
/// Signed: a negative margin is permitted and simply marks the price down.
/// Whether that makes commercial sense is the caller's problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarginRate(i32);

impl MarginRate {
    /// Creates a margin rate from basis points.
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        MarginRate(bps)
    }

    /// Creates a margin rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        MarginRate((pct * 100.0).round() as i32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero margin (selling price equals cost price).
    #[inline]
    pub const fn zero() -> Self {
        MarginRate(0)
    }

    /// Checks if the margin is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for MarginRate {
    fn default() -> Self {
        MarginRate::zero()
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// A supplier company from whom goods are purchased on credit or cash.
///
/// ## Balance Semantics
/// `balance` is the outstanding debt owed *to* the vendor. It is a running
/// total: invoice posting adds the unpaid remainder, nothing recomputes it
/// from invoice history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Vendor {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Sequential numeric code as text, starting at "100".
    pub code: String,

    /// Display name.
    pub name: String,

    /// Outstanding debt owed to this vendor.
    pub balance: Money,
}

impl Vendor {
    /// True iff this vendor is owed money from earlier invoices.
    ///
    /// Advisory only: the operator gets a debt warning before creating a
    /// new invoice, but posting is never blocked by it.
    #[inline]
    pub fn has_outstanding_debt(&self) -> bool {
        self.balance.is_positive()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product: something the shop stocks and sells.
///
/// ## Price Semantics
/// `selling_price` is derived from `cost_price` and the configured margin at
/// registration time, then frozen on the record. Changing the margin setting
/// later never rewrites an existing product's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Barcode; required, the lookup key at invoice line entry.
    pub barcode: String,

    /// Display name.
    pub name: String,

    /// Supplying vendor id; `"0"` when no vendor is assigned.
    pub company_id: String,

    /// Per-unit purchase price.
    pub cost_price: Money,

    /// Per-unit shelf price, derived at registration time.
    pub selling_price: Money,

    /// Units on hand.
    pub stock: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sales unit shown next to the stock count ("bag", "bottle", …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Timestamp of the last change to this record.
    #[ts(as = "String")]
    pub last_updated: DateTime<Utc>,
}

impl Product {
    /// True when stock has fallen below the reorder badge threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < crate::LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A line item on a purchase invoice (or supply order).
///
/// ## Note on `total`
/// `total` is the cost-basis extension (`cost_price × quantity`) — what the
/// shop pays the vendor — NOT a sales total. `selling_price` is carried so
/// the shelf price derived at entry time is frozen with the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceItem {
    /// Catalog reference; empty for ad hoc entries.
    pub product_id: String,

    /// Barcode; may be empty.
    pub barcode: String,

    /// Item name as entered.
    pub name: String,

    /// Units purchased.
    pub quantity: i64,

    /// Per-unit purchase price.
    pub cost_price: Money,

    /// Per-unit shelf price, derived from cost via the configured margin
    /// (or manually overridden before save).
    pub selling_price: Money,

    /// Line total: `cost_price × quantity`.
    pub total: Money,
}

impl InvoiceItem {
    /// An empty line as it appears when first added to a draft:
    /// quantity 1, everything else blank or zero. No validation here.
    pub fn blank() -> Self {
        InvoiceItem {
            product_id: String::new(),
            barcode: String::new(),
            name: String::new(),
            quantity: 1,
            cost_price: Money::zero(),
            selling_price: Money::zero(),
            total: Money::zero(),
        }
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// Settlement status of a purchase invoice.
///
/// `Unpaid` is only the pre-save default: the posting rule derives either
/// `Paid` (paid ≥ total) or `Partial` for every saved invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InvoiceStatus {
    Paid,
    Partial,
    Unpaid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Unpaid
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A posted purchase invoice: goods bought from a vendor, not a sales
/// receipt to a customer.
///
/// Immutable once created. There is no edit or void operation; corrections
/// happen on the next invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Sequential business number, starting at 1001, strictly increasing.
    pub invoice_number: i64,

    /// The vendor this invoice belongs to.
    pub vendor_id: String,

    /// Ordered line items; non-empty for any posted invoice.
    pub items: Vec<InvoiceItem>,

    /// Sum of line totals.
    pub total_amount: Money,

    /// Amount settled at creation time.
    pub paid_amount: Money,

    /// `total_amount - paid_amount`. May be negative if overpaid; not clamped.
    pub remaining_amount: Money,

    /// Derived settlement status.
    pub status: InvoiceStatus,

    /// Creation timestamp.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Due-date marker: `date` + 7 days.
    #[ts(as = "String")]
    pub expiry_date: DateTime<Utc>,
}

// =============================================================================
// Order Request
// =============================================================================

/// Fulfilment status of a supply order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Received,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A draft supply request to a vendor.
///
/// Structurally an invoice without pricing settlement: no totals, no
/// payment, just the requested lines and a received/pending flag.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderRequest {
    pub id: String,
    pub vendor_id: String,
    pub items: Vec<InvoiceItem>,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl OrderRequest {
    /// Opens a new pending order for a vendor.
    ///
    /// Same structural rules as invoice posting: a vendor must be selected
    /// and at least one line requested. Pricing fields on the lines are
    /// ignored by order tracking.
    pub fn new(
        vendor_id: impl Into<String>,
        items: Vec<InvoiceItem>,
    ) -> crate::error::CoreResult<Self> {
        let vendor_id = vendor_id.into();

        if vendor_id.trim().is_empty() {
            return Err(crate::error::ValidationError::Required {
                field: "vendorId".to_string(),
            }
            .into());
        }

        if items.is_empty() {
            return Err(crate::error::ValidationError::EmptyCollection {
                field: "items".to_string(),
            }
            .into());
        }

        Ok(OrderRequest {
            id: uuid::Uuid::new_v4().to_string(),
            vendor_id,
            items,
            status: OrderStatus::Pending,
            date: Utc::now(),
        })
    }

    /// Flips the order between pending and received.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            OrderStatus::Pending => OrderStatus::Received,
            OrderStatus::Received => OrderStatus::Pending,
        };
    }
}

// =============================================================================
// App Settings
// =============================================================================

/// Application configuration consumed (not owned) by the core.
///
/// The profit margin is read at call time wherever a selling price is
/// derived; it is a snapshot, never stored per item beyond its effect on
/// the computed price.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppSettings {
    /// Shop name shown in the UI shell and on printed labels.
    pub app_name: String,

    /// Global profit margin in basis points (1500 = 15%).
    pub profit_margin_bps: i32,
}

impl AppSettings {
    /// Returns the configured margin as a rate.
    #[inline]
    pub fn margin(&self) -> MarginRate {
        MarginRate::from_bps(self.profit_margin_bps)
    }
}

impl Default for AppSettings {
    /// Seed settings for a fresh store: 15% margin, generic shop name.
    fn default() -> Self {
        AppSettings {
            app_name: "Souk Market".to_string(),
            profit_margin_bps: crate::DEFAULT_PROFIT_MARGIN_BPS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_rate_conversions() {
        let margin = MarginRate::from_percentage(15.0);
        assert_eq!(margin.bps(), 1500);
        assert_eq!(margin.percentage(), 15.0);

        let markdown = MarginRate::from_percentage(-7.5);
        assert_eq!(markdown.bps(), -750);
    }

    #[test]
    fn test_vendor_debt_check() {
        let mut vendor = Vendor {
            id: "v1".to_string(),
            code: "100".to_string(),
            name: "Nile Supplies Co.".to_string(),
            balance: Money::from_piasters(540_000),
        };
        assert!(vendor.has_outstanding_debt());

        vendor.balance = Money::zero();
        assert!(!vendor.has_outstanding_debt());
    }

    #[test]
    fn test_low_stock_threshold() {
        let mut product = Product {
            id: "p1".to_string(),
            barcode: "6221234567890".to_string(),
            name: "Premium rice 1kg".to_string(),
            company_id: "v1".to_string(),
            cost_price: Money::from_piasters(2000),
            selling_price: Money::from_piasters(2300),
            stock: 50,
            category: Some("Groceries".to_string()),
            unit: Some("bag".to_string()),
            description: None,
            last_updated: Utc::now(),
        };
        assert!(!product.is_low_stock());

        product.stock = 8;
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_blank_item_shape() {
        let item = InvoiceItem::blank();
        assert_eq!(item.quantity, 1);
        assert!(item.name.is_empty());
        assert!(item.cost_price.is_zero());
        assert!(item.total.is_zero());
    }

    #[test]
    fn test_order_status_toggle() {
        let mut order = OrderRequest {
            id: "o1".to_string(),
            vendor_id: "v1".to_string(),
            items: vec![InvoiceItem::blank()],
            status: OrderStatus::Pending,
            date: Utc::now(),
        };

        order.toggle_status();
        assert_eq!(order.status, OrderStatus::Received);
        order.toggle_status();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_status_serializes_as_original_literals() {
        // The stored JSON uses the original app's PascalCase literals
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Partial).unwrap(),
            "\"Partial\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Received).unwrap(),
            "\"Received\""
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.margin().bps(), 1500);
    }
}
