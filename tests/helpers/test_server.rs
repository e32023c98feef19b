// Test Server Helpers
//
// Spawns a real HTTP test server using actix-test, wired exactly like the
// production app but backed by the in-memory product repository.

use std::sync::Arc;

use actix_web::{web, App};
use awc::Client;

use catalog::middleware::{ErrorHandler, RequestId};
use catalog::products::repositories::in_memory_product_repository;
use catalog::products::{Product, ProductRepository, ProductService};

pub use actix_test::TestServer;

/// Spawn a test server whose catalog starts with `products`
///
/// # Example
/// ```no_run
/// #[actix_web::test]
/// async fn test_health_endpoint() {
///     let srv = spawn_test_server(TestDataFactory::sample_products());
///     let response = srv.get("/health").send().await.unwrap();
///     assert_eq!(response.status(), 200);
/// }
/// ```
pub fn spawn_test_server(products: Vec<Product>) -> TestServer {
    spawn_test_server_with_repository(in_memory_product_repository(products))
}

/// Spawn a test server over a caller-supplied repository
pub fn spawn_test_server_with_repository(repository: Arc<ProductRepository>) -> TestServer {
    let service = web::Data::new(ProductService::new(repository));

    actix_test::start(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .app_data(service.clone())
            .configure(catalog::configure)
    })
}

/// HTTP client that reports redirects instead of following them
pub fn non_following_client() -> Client {
    Client::builder().disable_redirects().finish()
}
