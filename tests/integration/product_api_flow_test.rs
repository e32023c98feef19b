// Integration test for the JSON product API
//
// Drives a real HTTP server (in-memory backend) through the whole
// list → get → create → update → delete lifecycle.

#[path = "../helpers/mod.rs"]
mod helpers;

use catalog::products::Product;
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::Value;

#[actix_web::test]
async fn test_catalog_lifecycle() {
    let srv = spawn_test_server(TestDataFactory::sample_products());

    // List starts with the two seeded products
    let mut response = srv.get("/api/products").send().await.unwrap();
    assert_success(&response);
    let products: Vec<Product> = response.json().await.unwrap();
    assert_eq!(products.len(), 2);

    // Unknown id is a 404, not an error
    let response = srv.get("/api/products/0").send().await.unwrap();
    assert_not_found(&response);

    let mut response = srv.get("/api/products/2").send().await.unwrap();
    assert_success(&response);
    let book: Product = response.json().await.unwrap();
    assert_eq!(book.name, "Book");

    // Create returns the new resource and where to find it
    let name = TestDataFactory::unique_name();
    let mut response = srv
        .post("/api/products")
        .send_json(&TestDataFactory::product_payload(&name, dec!(3.75), 9))
        .await
        .unwrap();
    assert_created(&response);
    let created_at = location(&response);
    let created: Product = response.json().await.unwrap();
    assert_eq!(created_at, format!("/api/products/{}", created.id));
    assert_eq!(created.name, name);
    assert_eq!(created.price, dec!(3.75));

    let mut response = srv.get(created_at.as_str()).send().await.unwrap();
    assert_success(&response);
    let fetched: Product = response.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update is visible on the next read
    let updated = Product {
        stock: 0,
        ..created.clone()
    };
    let response = srv
        .put(created_at.as_str())
        .send_json(&updated)
        .await
        .unwrap();
    assert_no_content(&response);

    let mut response = srv.get(created_at.as_str()).send().await.unwrap();
    let fetched: Product = response.json().await.unwrap();
    assert_eq!(fetched.stock, 0);

    // Delete removes it from reads and from the list
    let response = srv.delete("/api/products/1").send().await.unwrap();
    assert_no_content(&response);

    let response = srv.get("/api/products/1").send().await.unwrap();
    assert_not_found(&response);

    let mut response = srv.get("/api/products").send().await.unwrap();
    let products: Vec<Product> = response.json().await.unwrap();
    assert_eq!(products.len(), 2);
}

#[actix_web::test]
async fn test_put_with_mismatched_ids_is_rejected() {
    let srv = spawn_test_server(TestDataFactory::sample_products());
    let pencil = TestDataFactory::sample_products().remove(0);

    let mut response = srv.put("/api/products/2").send_json(&pencil).await.unwrap();
    assert_bad_request(&response);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], 400);

    // Neither product changed
    let mut response = srv.get("/api/products/2").send().await.unwrap();
    let book: Product = response.json().await.unwrap();
    assert_eq!(book.name, "Book");
}

#[actix_web::test]
async fn test_put_for_missing_product_is_not_found() {
    let srv = spawn_test_server(TestDataFactory::sample_products());
    let ghost = Product {
        id: 40,
        ..TestDataFactory::new_product()
    };

    let response = srv.put("/api/products/40").send_json(&ghost).await.unwrap();
    assert_not_found(&response);
}

#[actix_web::test]
async fn test_delete_missing_product_is_not_found() {
    let srv = spawn_test_server(Vec::new());

    let response = srv.delete("/api/products/7").send().await.unwrap();
    assert_not_found(&response);
}

#[actix_web::test]
async fn test_invalid_payloads_are_bad_requests() {
    let srv = spawn_test_server(Vec::new());

    let too_long = "x".repeat(201);
    let response = srv
        .post("/api/products")
        .send_json(&TestDataFactory::product_payload(&too_long, dec!(1), 1))
        .await
        .unwrap();
    assert_bad_request(&response);

    let response = srv
        .post("/api/products")
        .send_json(&serde_json::json!({"name": "No price", "stock": 1}))
        .await
        .unwrap();
    assert_bad_request(&response);

    let mut response = srv.get("/api/products").send().await.unwrap();
    let products: Vec<Product> = response.json().await.unwrap();
    assert!(products.is_empty());
}

#[actix_web::test]
async fn test_request_id_round_trip_and_readiness() {
    let srv = spawn_test_server(Vec::new());

    let response = srv
        .get("/ready")
        .insert_header(("X-Request-ID", "flow-42"))
        .send()
        .await
        .unwrap();
    assert_success(&response);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "flow-42");
}
