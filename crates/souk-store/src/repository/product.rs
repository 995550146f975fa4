//! # Product Repository
//!
//! Store operations for the product catalog. Registration reads the
//! configured margin and hands it to the core so the shelf price is derived
//! once, at registration time, and frozen on the record.

use tracing::info;

use souk_core::{catalog, AppSettings, Product, ProductEntry};

use crate::error::StoreResult;
use crate::store::{keys, JsonStore};

/// Repository for product store operations.
#[derive(Debug)]
pub struct ProductRepository<'a> {
    store: &'a mut JsonStore,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository over the given store.
    pub fn new(store: &'a mut JsonStore) -> Self {
        ProductRepository { store }
    }

    /// Returns the full products collection (empty for a fresh store).
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.store.get(keys::PRODUCTS)
    }

    /// Registers a new catalog product, deriving its shelf price from the
    /// configured margin.
    pub fn register(&mut self, entry: ProductEntry) -> StoreResult<Product> {
        let settings: AppSettings = self.store.get(keys::SETTINGS)?;

        let mut products = self.list()?;
        let product = catalog::register_product(&mut products, entry, settings.margin())?;
        self.store.set(keys::PRODUCTS, &products)?;

        info!(
            barcode = %product.barcode,
            name = %product.name,
            price = %product.selling_price,
            "Registered product"
        );
        Ok(product)
    }

    /// Looks up a product by barcode, the key used at invoice line entry.
    pub fn find_by_barcode(&self, barcode: &str) -> StoreResult<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.barcode == barcode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SettingsRepository;
    use souk_core::Money;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("store.json")).unwrap();
        (dir, store)
    }

    fn rice_entry() -> ProductEntry {
        ProductEntry {
            barcode: "6221234567890".to_string(),
            name: "Premium rice 1kg".to_string(),
            company_id: "v1".to_string(),
            cost_price: Money::from_piasters(2000),
            stock: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_register_uses_configured_margin() {
        let (_dir, mut store) = temp_store();

        // Absent settings fall back to the 15% seed default
        let product = ProductRepository::new(&mut store).register(rice_entry()).unwrap();
        assert_eq!(product.selling_price.piasters(), 2300);

        // A saved margin is picked up by the next registration
        let mut settings = SettingsRepository::new(&mut store).get().unwrap();
        settings.profit_margin_bps = 3000;
        SettingsRepository::new(&mut store).save(&settings).unwrap();

        let mut entry = rice_entry();
        entry.barcode = "6220987654321".to_string();
        let product = ProductRepository::new(&mut store).register(entry).unwrap();
        assert_eq!(product.selling_price.piasters(), 2600);
    }

    #[test]
    fn test_register_rejects_missing_barcode_without_writing() {
        let (_dir, mut store) = temp_store();
        let mut repo = ProductRepository::new(&mut store);

        let mut entry = rice_entry();
        entry.barcode.clear();
        assert!(repo.register(entry).is_err());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_barcode() {
        let (_dir, mut store) = temp_store();
        let mut repo = ProductRepository::new(&mut store);
        repo.register(rice_entry()).unwrap();

        let found = repo.find_by_barcode("6221234567890").unwrap().unwrap();
        assert_eq!(found.name, "Premium rice 1kg");
        assert!(repo.find_by_barcode("0000000000000").unwrap().is_none());
    }
}
