//! # souk-store: Persistence Layer for the Souk Back-Office
//!
//! This crate provides storage for the Souk back-office: a JSON key-value
//! document holding whole collections, written wholesale on every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Souk Back-Office Data Flow                       │
//! │                                                                     │
//! │  Operator action (save invoice)                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────┐     │
//! │  │                  souk-store (THIS CRATE)                  │     │
//! │  │                                                           │     │
//! │  │   ┌─────────────┐    ┌───────────────┐    ┌───────────┐   │     │
//! │  │   │  JsonStore  │    │  Repositories │    │  Seeding  │   │     │
//! │  │   │ (store.rs)  │◄───│ (invoice.rs,  │    │ (bin/seed)│   │     │
//! │  │   │ get/set by  │    │  vendor.rs,…) │    │           │   │     │
//! │  │   │ key, whole  │    │ read-modify-  │    │           │   │     │
//! │  │   │ snapshots   │    │ write         │    │           │   │     │
//! │  │   └─────────────┘    └───────────────┘    └───────────┘   │     │
//! │  └───────────────────────────────────────────────────────────┘     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  one JSON document on disk (the localStorage of this deployment)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The key-value document: open, get, set, first-run seeding
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (vendor, product, invoice, order, settings)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use souk_store::{InvoiceRepository, JsonStore, VendorRepository};
//! use souk_core::InvoiceDraft;
//!
//! # fn main() -> Result<(), souk_store::StoreError> {
//! let mut store = JsonStore::open("souk.json")?;
//! store.initialize()?;
//!
//! let vendor = VendorRepository::new(&mut store).register("Nile Supplies Co.")?;
//!
//! let mut draft = InvoiceDraft::new();
//! draft.select_vendor(&vendor.id);
//! // … add and edit lines …
//! # draft.add_line_item();
//! let invoice = InvoiceRepository::new(&mut store).post(&draft)?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{keys, JsonStore};

// Repository re-exports for convenience
pub use repository::invoice::InvoiceRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
pub use repository::settings::SettingsRepository;
pub use repository::vendor::VendorRepository;
