//! # JSON Key-Value Store
//!
//! The persistence primitive for the whole back-office: a single JSON
//! document on disk mapping keys to values, the Rust stand-in for the
//! browser-local storage the original system used.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Store Contract                                   │
//! │                                                                     │
//! │  get(key)  ──► whole typed collection, or the default when absent   │
//! │  set(key)  ──► replaces the ENTIRE value at that key and rewrites   │
//! │                the document; there is no partial/patch primitive    │
//! │                                                                     │
//! │  Keys:   "vendors"  → Vec<Vendor>                                   │
//! │          "products" → Vec<Product>                                  │
//! │          "invoices" → Vec<Invoice>                                  │
//! │          "orders"   → Vec<OrderRequest>                             │
//! │          "settings" → AppSettings                                   │
//! │                                                                     │
//! │  Last write wins per key. No transactions, no schema versioning.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer, By Construction
//! All operations are synchronous, in-memory transformations flushed
//! wholesale. There is exactly one logical writer (one interactive
//! session), so read-modify-write races are structurally impossible in
//! scope. Sharing the store file between sessions WOULD race on invoice
//! numbers and balance increments; moving to a shared database requires
//! adding optimistic concurrency control first.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use souk_core::AppSettings;

use crate::error::StoreResult;

// =============================================================================
// Keys
// =============================================================================

/// Well-known store keys, one per collection.
pub mod keys {
    pub const VENDORS: &str = "vendors";
    pub const PRODUCTS: &str = "products";
    pub const INVOICES: &str = "invoices";
    pub const ORDERS: &str = "orders";
    pub const SETTINGS: &str = "settings";

    /// First-run flag; set once [`super::JsonStore::initialize`] has seeded
    /// the defaults.
    pub const INITIALIZED: &str = "initialized";
}

// =============================================================================
// JsonStore
// =============================================================================

/// A file-backed key-value store holding one JSON value per key.
///
/// The whole document is kept in memory and rewritten on every `set`;
/// at whole-collection-snapshot scale that is the entire durability story
/// (last write wins, no fsync ceremony).
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonStore {
    /// Opens the store at `path`, loading the document if one exists.
    ///
    /// A missing file is a fresh store, not an error.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened store");
        Ok(JsonStore { path, entries })
    }

    /// Reads the value at `key`, or the type's default when the key is
    /// absent (empty collection, seed settings).
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> StoreResult<T> {
        match self.entries.get(key) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(T::default()),
        }
    }

    /// Replaces the entire value at `key` and rewrites the document.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()?;
        debug!(key, "Stored collection snapshot");
        Ok(())
    }

    /// Whether a value exists at `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// First-run seeding: writes the default settings once, guarded by the
    /// `initialized` flag key. Returns true if seeding happened.
    pub fn initialize(&mut self) -> StoreResult<bool> {
        if self.contains(keys::INITIALIZED) {
            return Ok(false);
        }

        self.set(keys::SETTINGS, &AppSettings::default())?;
        self.set(keys::INITIALIZED, &true)?;
        info!(path = %self.path.display(), "Store initialized with seed settings");
        Ok(true)
    }

    /// Writes the whole document to disk.
    fn flush(&self) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use souk_core::{Money, Vendor};

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("store.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_key_yields_default() {
        let (_dir, store) = temp_store();

        let vendors: Vec<Vendor> = store.get(keys::VENDORS).unwrap();
        assert!(vendors.is_empty());

        let settings: AppSettings = store.get(keys::SETTINGS).unwrap();
        assert_eq!(settings.profit_margin_bps, 1500);
    }

    #[test]
    fn test_set_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let vendors = vec![Vendor {
            id: "v1".to_string(),
            code: "100".to_string(),
            name: "Nile Supplies Co.".to_string(),
            balance: Money::from_piasters(540_000),
        }];

        let mut store = JsonStore::open(&path).unwrap();
        store.set(keys::VENDORS, &vendors).unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        let loaded: Vec<Vendor> = reopened.get(keys::VENDORS).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].code, "100");
        assert_eq!(loaded[0].balance.piasters(), 540_000);
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let (_dir, mut store) = temp_store();

        store.set(keys::ORDERS, &vec!["a", "b"]).unwrap();
        store.set(keys::ORDERS, &vec!["c"]).unwrap();

        let orders: Vec<String> = store.get(keys::ORDERS).unwrap();
        assert_eq!(orders, vec!["c".to_string()]);
    }

    #[test]
    fn test_initialize_runs_once() {
        let (_dir, mut store) = temp_store();

        assert!(store.initialize().unwrap());
        assert!(!store.initialize().unwrap());
        assert!(store.contains(keys::SETTINGS));
    }
}
