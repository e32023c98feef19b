// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{FieldError, Product};
pub use repositories::ProductRepository;
pub use services::ProductService;
