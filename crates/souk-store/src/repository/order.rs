//! # Order Repository
//!
//! Store operations for supply-order tracking: open a pending order with a
//! vendor, flip it to received when the goods arrive. Orders carry no
//! pricing settlement and never touch the ledger.

use tracing::info;

use souk_core::{InvoiceItem, OrderRequest};

use crate::error::StoreResult;
use crate::store::{keys, JsonStore};

/// Repository for order store operations.
#[derive(Debug)]
pub struct OrderRepository<'a> {
    store: &'a mut JsonStore,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository over the given store.
    pub fn new(store: &'a mut JsonStore) -> Self {
        OrderRepository { store }
    }

    /// Returns the full orders collection (empty for a fresh store).
    pub fn list(&self) -> StoreResult<Vec<OrderRequest>> {
        self.store.get(keys::ORDERS)
    }

    /// Opens a new pending order for a vendor.
    pub fn create(&mut self, vendor_id: &str, items: Vec<InvoiceItem>) -> StoreResult<OrderRequest> {
        let order = OrderRequest::new(vendor_id, items)?;

        let mut orders = self.list()?;
        orders.push(order.clone());
        self.store.set(keys::ORDERS, &orders)?;

        info!(order_id = %order.id, vendor_id = %order.vendor_id, "Created supply order");
        Ok(order)
    }

    /// Flips an order between pending and received.
    ///
    /// Returns the updated order, or `None` for an unknown id (silently a
    /// no-op, matching the permissive posture of the rest of the system).
    pub fn toggle_status(&mut self, order_id: &str) -> StoreResult<Option<OrderRequest>> {
        let mut orders = self.list()?;

        let Some(order) = orders.iter_mut().find(|o| o.id == order_id) else {
            return Ok(None);
        };
        order.toggle_status();
        let updated = order.clone();

        self.store.set(keys::ORDERS, &orders)?;
        info!(order_id, status = ?updated.status, "Toggled order status");
        Ok(Some(updated))
    }
}
