//! # Repositories
//!
//! Typed access to the stored collections, one repository per entity.
//!
//! Every mutation here is whole-collection read-modify-write against the
//! [`JsonStore`](crate::store::JsonStore): read the snapshot, transform it
//! with souk-core logic, write it back. No per-record addressing exists
//! and none is wanted at this scale.

pub mod invoice;
pub mod order;
pub mod product;
pub mod settings;
pub mod vendor;

pub use invoice::InvoiceRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use settings::SettingsRepository;
pub use vendor::VendorRepository;
