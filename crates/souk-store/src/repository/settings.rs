//! # Settings Repository
//!
//! Store operations for the application settings.
//!
//! The one reader that matters is the pricing path: the configured profit
//! margin is fetched at call time and handed to the Pricing Deriver as an
//! explicit value, never read from ambient global state.

use tracing::info;

use souk_core::{AppSettings, MarginRate};

use crate::error::StoreResult;
use crate::store::{keys, JsonStore};

/// Repository for settings store operations.
#[derive(Debug)]
pub struct SettingsRepository<'a> {
    store: &'a mut JsonStore,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new SettingsRepository over the given store.
    pub fn new(store: &'a mut JsonStore) -> Self {
        SettingsRepository { store }
    }

    /// Returns the stored settings, or the seed defaults when absent.
    pub fn get(&self) -> StoreResult<AppSettings> {
        self.store.get(keys::SETTINGS)
    }

    /// Replaces the stored settings.
    pub fn save(&mut self, settings: &AppSettings) -> StoreResult<()> {
        self.store.set(keys::SETTINGS, settings)?;
        info!(margin_bps = settings.profit_margin_bps, "Saved settings");
        Ok(())
    }

    /// The configured profit margin, a snapshot for the next derivation.
    pub fn profit_margin(&self) -> StoreResult<MarginRate> {
        Ok(self.get()?.margin())
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
    fn test_defaults_when_absent() {
        let (_dir, mut store) = temp_store();
        let repo = SettingsRepository::new(&mut store);

        assert_eq!(repo.profit_margin().unwrap().bps(), 1500);
    }

    #[test]
    fn test_margin_change_is_visible_on_next_read() {
        let (_dir, mut store) = temp_store();
        let mut repo = SettingsRepository::new(&mut store);

        let mut settings = repo.get().unwrap();
        settings.profit_margin_bps = 2000;
        repo.save(&settings).unwrap();

        assert_eq!(repo.profit_margin().unwrap().bps(), 2000);
    }
}
