pub mod page;
pub mod product_api_controller;
pub mod product_controller;
pub mod views;

pub use page::{PageResult, View, ViewModel, INDEX_ACTION};

use actix_web::web;

/// Configure both product surfaces: the JSON API and the HTML pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    product_api_controller::configure(cfg);
    product_controller::configure(cfg);
}
