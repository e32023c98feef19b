use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::persistence::{InMemoryRepository, MySqlQuery, MySqlRepository, TableEntity};
use crate::core::traits::Repository;
use crate::modules::products::models::Product;

/// Capability interface the product controllers depend on
pub type ProductRepository = dyn Repository<Product>;

pub type MySqlProductRepository = MySqlRepository<Product>;

pub type InMemoryProductRepository = InMemoryRepository<Product>;

impl TableEntity for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "price", "stock", "color"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.price)
            .bind(self.stock)
            .bind(self.color.as_str())
    }
}

/// Product repository backed by the `products` table
pub fn mysql_product_repository(pool: MySqlPool) -> Arc<ProductRepository> {
    Arc::new(MySqlProductRepository::new(pool))
}

/// Product repository held in process memory
pub fn in_memory_product_repository(
    products: impl IntoIterator<Item = Product>,
) -> Arc<ProductRepository> {
    Arc::new(InMemoryProductRepository::with_entities(products))
}
