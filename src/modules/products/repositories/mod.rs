pub mod product_repository;

pub use product_repository::{
    in_memory_product_repository, mysql_product_repository, InMemoryProductRepository,
    MySqlProductRepository, ProductRepository,
};
