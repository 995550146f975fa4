//! # Vendor Repository
//!
//! Store operations for the vendors collection and its ledger balances.

use tracing::info;

use souk_core::{ledger, Money, Vendor};

use crate::error::StoreResult;
use crate::store::{keys, JsonStore};

/// Repository for vendor store operations.
#[derive(Debug)]
pub struct VendorRepository<'a> {
    store: &'a mut JsonStore,
}

impl<'a> VendorRepository<'a> {
    /// Creates a new VendorRepository over the given store.
    pub fn new(store: &'a mut JsonStore) -> Self {
        VendorRepository { store }
    }

    /// Returns the full vendors collection (empty for a fresh store).
    pub fn list(&self) -> StoreResult<Vec<Vendor>> {
        self.store.get(keys::VENDORS)
    }

    /// Registers a new vendor: next sequential code, zero opening balance.
    pub fn register(&mut self, name: &str) -> StoreResult<Vendor> {
        let mut vendors = self.list()?;
        let vendor = ledger::register_vendor(&mut vendors, name)?;
        self.store.set(keys::VENDORS, &vendors)?;

        info!(code = %vendor.code, name = %vendor.name, "Registered vendor");
        Ok(vendor)
    }

    /// The vendor's outstanding balance; zero for an unknown id.
    pub fn balance(&self, vendor_id: &str) -> StoreResult<Money> {
        Ok(ledger::get_balance(&self.list()?, vendor_id))
    }

    /// Advisory debt check shown to the operator before invoice entry.
    pub fn has_outstanding_debt(&self, vendor_id: &str) -> StoreResult<bool> {
        Ok(ledger::has_outstanding_debt(&self.list()?, vendor_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("store.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_register_assigns_sequential_codes() {
        let (_dir, mut store) = temp_store();
        let mut repo = VendorRepository::new(&mut store);

        let first = repo.register("Nile Supplies Co.").unwrap();
        let second = repo.register("Amal Trading Est.").unwrap();

        assert_eq!(first.code, "100");
        assert_eq!(second.code, "101");
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_register_rejects_blank_name_without_writing() {
        let (_dir, mut store) = temp_store();
        let mut repo = VendorRepository::new(&mut store);

        assert!(repo.register("   ").is_err());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_balance_defaults_to_zero() {
        let (_dir, mut store) = temp_store();
        let repo = VendorRepository::new(&mut store);

        assert!(repo.balance("nobody").unwrap().is_zero());
        assert!(!repo.has_outstanding_debt("nobody").unwrap());
    }
}
