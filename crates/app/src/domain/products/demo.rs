//! Demo Products
//!
//! The catalogue the in-memory product repository is seeded with.

use rusty_money::{Money, iso};

use shop::products::{Product, ProductId};

/// Builds a demo product. IDs are fixed so they stay stable across restarts.
fn product(
    id: &'static str,
    name: &str,
    description: &str,
    price_minor: i64,
    items_in_stock: u32,
) -> Option<Product> {
    let id = ProductId::new(id).ok()?;

    Some(Product::new(
        id,
        name,
        description,
        Money::from_minor(price_minor, iso::EUR),
        items_in_stock,
    ))
}

/// Returns the demo catalogue in display order.
pub fn demo_products() -> Vec<Product> {
    [
        product(
            "K3SR7PBX",
            "Plastic Sheeting",
            "Clear plastic roll for packing, moving and storage",
            28_49,
            55,
        ),
        product(
            "Q3W43CNC",
            "27-Inch Computer Monitor",
            "Full HD resolution, 1920 x 1080 pixels, ultra thin bezel",
            199_99,
            24,
        ),
        product(
            "WM3BPG3E",
            "Dual Monitor Desk Mount",
            "Height-adjustable mount for two monitors up to 27 inches",
            61_99,
            14,
        ),
        product(
            "5T3WNKE5",
            "50ft Led Lights",
            "Color changing light strip with remote control",
            11_99,
            44,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
