use actix_web::{http::header, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::Product;
use crate::modules::products::services::ProductService;

/// Location of a single product resource
pub fn product_location(id: i32) -> String {
    format!("/api/products/{}", id)
}

/// List all products
/// GET /api/products
pub async fn get_products(service: web::Data<ProductService>) -> Result<HttpResponse, AppError> {
    let products = service.list().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /api/products/{id}
pub async fn get_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let product = service.find(Some(path.into_inner())).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Create a product
/// POST /api/products
/// Responds 201 with a Location header pointing at GET /api/products/{id}
pub async fn post_product(
    service: web::Data<ProductService>,
    payload: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, product_location(product.id)))
        .json(product))
}

/// Replace a product
/// PUT /api/products/{id}
pub async fn put_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
    payload: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    service
        .update(path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product
/// DELETE /api/products/{id}
pub async fn delete_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure product API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .route("", web::get().to(get_products))
            .route("", web::post().to(post_product))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(put_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
