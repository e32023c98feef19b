//! Page controller for the product catalog.
//!
//! Handlers return `PageResult` so the outcome (view, redirect, not found)
//! is inspectable without rendering. Routes that take an optional id are
//! registered both with and without the `{id}` segment; an absent or
//! unparsable id arrives as `None`.

use actix_web::web;

use crate::core::error::{AppError, AppResult};
use crate::modules::products::controllers::page::{PageResult, View, ViewModel};
use crate::modules::products::models::Product;
use crate::modules::products::services::ProductService;

type ProductId = Option<web::Path<i32>>;

fn into_id(id: ProductId) -> Option<i32> {
    id.map(web::Path::into_inner)
}

/// GET /products
pub async fn index(service: web::Data<ProductService>) -> AppResult<PageResult> {
    let products = service.list().await?;

    Ok(PageResult::view("Index", ViewModel::Products(products)))
}

/// GET /products/details/{id}
pub async fn details(service: web::Data<ProductService>, id: ProductId) -> AppResult<PageResult> {
    show(&service, into_id(id), "Details").await
}

/// GET /products/create
pub async fn create_form() -> PageResult {
    PageResult::view("Create", ViewModel::Blank)
}

/// POST /products/create
pub async fn create(
    service: web::Data<ProductService>,
    form: web::Form<Product>,
) -> AppResult<PageResult> {
    let product = form.into_inner();

    match service.create(product.clone()).await {
        Ok(_) => Ok(PageResult::redirect_to_index()),
        Err(AppError::Validation(message)) => Ok(PageResult::View(
            View::new("Create", ViewModel::Product(product)).with_errors(vec![message]),
        )),
        Err(err) => Err(err),
    }
}

/// GET /products/edit/{id}
pub async fn edit_form(service: web::Data<ProductService>, id: ProductId) -> AppResult<PageResult> {
    show(&service, into_id(id), "Edit").await
}

/// POST /products/edit/{id}
pub async fn edit(
    service: web::Data<ProductService>,
    id: web::Path<i32>,
    form: web::Form<Product>,
) -> AppResult<PageResult> {
    let product = form.into_inner();

    match service.update(id.into_inner(), product.clone()).await {
        Ok(()) => Ok(PageResult::redirect_to_index()),
        Err(AppError::IdMismatch { .. }) | Err(AppError::NotFound(_)) => Ok(PageResult::NotFound),
        Err(AppError::Validation(message)) => Ok(PageResult::View(
            View::new("Edit", ViewModel::Product(product)).with_errors(vec![message]),
        )),
        Err(err) => Err(err),
    }
}

/// GET /products/delete/{id}
///
/// Confirmation page; a missing id is a 404 here rather than a redirect.
pub async fn delete(service: web::Data<ProductService>, id: ProductId) -> AppResult<PageResult> {
    match service.find(into_id(id)).await {
        Ok(product) => Ok(PageResult::view("Delete", ViewModel::Product(product))),
        Err(AppError::MissingId) | Err(AppError::NotFound(_)) => Ok(PageResult::NotFound),
        Err(err) => Err(err),
    }
}

/// POST /products/delete/{id}
pub async fn delete_confirmed(
    service: web::Data<ProductService>,
    id: web::Path<i32>,
) -> AppResult<PageResult> {
    match service.delete(id.into_inner()).await {
        Ok(_) | Err(AppError::NotFound(_)) => Ok(PageResult::redirect_to_index()),
        Err(err) => Err(err),
    }
}

async fn show(service: &ProductService, id: Option<i32>, view: &'static str) -> AppResult<PageResult> {
    match service.find(id).await {
        Ok(product) => Ok(PageResult::view(view, ViewModel::Product(product))),
        Err(AppError::MissingId) => Ok(PageResult::redirect_to_index()),
        Err(AppError::NotFound(_)) => Ok(PageResult::NotFound),
        Err(err) => Err(err),
    }
}

/// Configure product page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(index))
            .route("/details", web::get().to(details))
            .route("/details/{id}", web::get().to(details))
            .route("/create", web::get().to(create_form))
            .route("/create", web::post().to(create))
            .route("/edit", web::get().to(edit_form))
            .route("/edit/{id}", web::get().to(edit_form))
            .route("/edit/{id}", web::post().to(edit))
            .route("/delete", web::get().to(delete))
            .route("/delete/{id}", web::get().to(delete))
            .route("/delete/{id}", web::post().to(delete_confirmed)),
    );
}
