// Request workflow shared by the page and JSON surfaces.
//
// Each operation follows the same shape: validate the request, look the
// product up where one must exist, check path/payload consistency, then
// issue exactly one repository mutation. Controllers only decide how each
// outcome is presented.

use std::sync::Arc;

use crate::core::error::{AppError, AppResult};
use crate::modules::products::models::Product;
use crate::modules::products::repositories::ProductRepository;

/// Service for product catalog operations
pub struct ProductService {
    repository: Arc<ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<ProductRepository>) -> Self {
        Self { repository }
    }

    /// All products in the catalog
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let products = self.repository.get_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list products");
            e
        })?;

        Ok(products)
    }

    /// Look up a single product.
    ///
    /// `None` means the request carried no identifier at all.
    #[tracing::instrument(skip(self))]
    pub async fn find(&self, id: Option<i32>) -> AppResult<Product> {
        let id = id.ok_or(AppError::MissingId)?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate and store a new product, returning it with its assigned id
    #[tracing::instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: Product) -> AppResult<Product> {
        ensure_valid(&product)?;

        let created = self.repository.create(product).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create product");
            e
        })?;

        tracing::info!(product_id = created.id, "Product created");
        Ok(created)
    }

    /// Replace the product stored under `id` with `product`.
    ///
    /// The payload must carry the same id as the path. If the write fails,
    /// the product is probed again so a row deleted in the meantime is
    /// reported as not found rather than as a storage failure.
    #[tracing::instrument(skip(self, product))]
    pub async fn update(&self, id: i32, product: Product) -> AppResult<()> {
        if id != product.id {
            tracing::warn!(payload_id = product.id, "Path and payload ids differ");
            return Err(AppError::IdMismatch {
                path: id,
                payload: product.id,
            });
        }

        ensure_valid(&product)?;

        if let Err(err) = self.repository.update(&product).await {
            if !self.repository.any(id).await? {
                tracing::debug!("Product vanished before update");
                return Err(not_found(id));
            }
            tracing::error!(error = %err, "Failed to update product");
            return Err(err.into());
        }

        tracing::info!(product_id = id, "Product updated");
        Ok(())
    }

    /// Remove the product stored under `id`, returning what was removed
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> AppResult<Product> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        self.repository.delete(&product).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to delete product");
            e
        })?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(product)
    }

    /// Round-trip to the backend without touching any product
    pub async fn probe(&self) -> AppResult<()> {
        self.repository.any(0).await?;
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    tracing::debug!(product_id = id, "Product not found");
    AppError::not_found(format!("Product {}", id))
}

fn ensure_valid(product: &Product) -> AppResult<()> {
    product.validate().map_err(|errors| {
        AppError::validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    })
}
