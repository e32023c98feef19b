//! Product catalog service library
//!
//! A generic repository abstraction over interchangeable storage backends,
//! and the page and JSON surfaces that manage catalog products through it.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::health;
pub use modules::products;

use actix_web::web;

use crate::middleware::{form_error_handler, json_error_handler};

/// Configure payload handling and all application routes.
///
/// Expects a `web::Data<ProductService>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .configure(health::configure)
        .configure(products::configure);
}
