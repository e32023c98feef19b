// Test Data Factory
//
// Generates catalog products and request payloads for integration tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

use catalog::products::Product;

/// Test data factory for generating test products
pub struct TestDataFactory;

impl TestDataFactory {
    /// The two-product catalog most tests start from:
    /// `{1, Pencil, Red}` and `{2, Book, Blue}`
    pub fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                price: dec!(100),
                stock: 50,
                name: "Pencil".to_string(),
                color: "Red".to_string(),
            },
            Product {
                id: 2,
                price: dec!(150),
                stock: 50,
                name: "Book".to_string(),
                color: "Blue".to_string(),
            },
        ]
    }

    /// Unique product name with TEST prefix
    pub fn unique_name() -> String {
        format!("TEST-{}", Uuid::new_v4().simple())
    }

    /// Transient product with a unique name
    pub fn new_product() -> Product {
        Product::new(Self::unique_name(), "Green", dec!(12.50), 5)
    }

    /// JSON payload for POST /api/products
    pub fn product_payload(name: &str, price: Decimal, stock: i32) -> Value {
        json!({
            "name": name,
            "price": price.to_string(),
            "stock": stock,
            "color": "Green",
        })
    }

    /// Form fields for the create/edit pages
    pub fn product_form(product: &Product) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("name", product.name.clone()),
            ("price", product.price.to_string()),
            ("stock", product.stock.to_string()),
            ("color", product.color.clone()),
        ];
        if product.id != 0 {
            form.push(("id", product.id.to_string()));
        }
        form
    }
}
