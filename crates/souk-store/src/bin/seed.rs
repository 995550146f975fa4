//! # Seed Data Generator
//!
//! Populates a fresh store document with development data: the default
//! settings plus two vendors, one carrying an opening balance so the debt
//! warning path has something to warn about.
//!
//! ## Usage
//! ```bash
//! # Seed ./souk_dev.json (default)
//! cargo run -p souk-store --bin seed
//!
//! # Specify store path
//! cargo run -p souk-store --bin seed -- --store ./data/souk.json
//! ```

use std::env;

use souk_core::{catalog, AppSettings, Money, ProductEntry, Vendor};
use souk_store::{keys, JsonStore};
use uuid::Uuid;

/// Seed vendors: (code, name, opening balance in piasters).
///
/// The first vendor starts in debt so the invoice entry flow shows its
/// prior-debt warning out of the box.
const VENDORS: &[(&str, &str, i64)] = &[
    ("100", "Nile Supplies Co.", 540_000),
    ("101", "Amal Trading Est.", 0),
];

/// Seed products: (barcode, name, cost in piasters, stock, category, unit).
///
/// Shelf prices are derived at seed time from the default margin. The oil
/// starts below the low-stock threshold so the reorder badge shows up.
const PRODUCTS: &[(&str, &str, i64, i64, &str, &str)] = &[
    ("6221234567890", "Premium rice 1kg", 2000, 50, "Groceries", "bag"),
    ("6220987654321", "Sunflower oil 1L", 4500, 8, "Oils", "bottle"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut store_path = String::from("./souk_dev.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--store" | "-s" => {
                if i + 1 < args.len() {
                    store_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Souk Back-Office Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --store <PATH>  Store file path (default: ./souk_dev.json)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Souk Back-Office Seed Data Generator");
    println!("=======================================");
    println!("Store: {}", store_path);
    println!();

    let mut store = JsonStore::open(&store_path)?;

    if !store.initialize()? {
        println!("⚠ Store is already initialized");
        println!("  Skipping seed to avoid clobbering live data.");
        println!("  Delete the store file to regenerate.");
        return Ok(());
    }
    println!("✓ Default settings written");

    let vendors: Vec<Vendor> = VENDORS
        .iter()
        .map(|(code, name, balance)| Vendor {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            name: name.to_string(),
            balance: Money::from_piasters(*balance),
        })
        .collect();
    store.set(keys::VENDORS, &vendors)?;

    for vendor in &vendors {
        println!("✓ Vendor {} ({}) balance {}", vendor.code, vendor.name, vendor.balance);
    }

    let margin = AppSettings::default().margin();
    let mut products = Vec::new();
    for (barcode, name, cost, stock, category, unit) in PRODUCTS {
        let product = catalog::register_product(
            &mut products,
            ProductEntry {
                barcode: (*barcode).to_string(),
                name: (*name).to_string(),
                company_id: vendors[0].id.clone(),
                cost_price: Money::from_piasters(*cost),
                stock: *stock,
                category: Some((*category).to_string()),
                unit: Some((*unit).to_string()),
                ..Default::default()
            },
            margin,
        )?;
        println!(
            "✓ Product {} ({}) shelf price {}",
            product.barcode, product.name, product.selling_price
        );
    }
    store.set(keys::PRODUCTS, &products)?;

    println!();
    println!("✓ Seed complete!");
    Ok(())
}
