//! # Product Catalog
//!
//! Registration of catalog products. This is the Pricing Deriver's second
//! call site: a product's shelf price is derived from its cost and the
//! configured margin at registration time and frozen on the record, exactly
//! as an invoice line's is at entry time.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::derive_selling_price;
use crate::types::{MarginRate, Product};
use crate::validation::validate_item_name;

/// Placeholder `company_id` for products with no supplying vendor assigned.
pub const UNASSIGNED_COMPANY: &str = "0";

/// Operator-entered fields for a new catalog product.
///
/// There is no selling price here on purpose: it is derived at
/// registration, never typed in.
#[derive(Debug, Clone, Default)]
pub struct ProductEntry {
    pub barcode: String,
    pub name: String,
    /// Supplying vendor id; empty means unassigned.
    pub company_id: String,
    pub cost_price: Money,
    pub stock: i64,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// Registers a new catalog product, deriving its shelf price from the cost
/// and `margin`, and appends it to the collection.
///
/// Barcode and name are required; everything else is optional (bad numeric
/// input upstream coerces to zero, same as invoice line entry). Returns a
/// clone of the product that was added.
pub fn register_product(
    products: &mut Vec<Product>,
    entry: ProductEntry,
    margin: MarginRate,
) -> CoreResult<Product> {
    if entry.barcode.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        }
        .into());
    }
    validate_item_name(&entry.name)?;

    let company_id = if entry.company_id.trim().is_empty() {
        UNASSIGNED_COMPANY.to_string()
    } else {
        entry.company_id
    };

    let product = Product {
        id: Uuid::new_v4().to_string(),
        barcode: entry.barcode,
        name: entry.name.trim().to_string(),
        company_id,
        cost_price: entry.cost_price,
        selling_price: derive_selling_price(entry.cost_price, margin),
        stock: entry.stock,
        category: entry.category,
        unit: entry.unit,
        description: entry.description,
        last_updated: Utc::now(),
    };

    products.push(product.clone());
    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================
