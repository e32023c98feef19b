use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;

/// Column width of `products.name`
pub const NAME_MAX_LEN: usize = 200;

/// Column width of `products.color`
pub const COLOR_MAX_LEN: usize = 50;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Assigned by the backend on creation; 0 until then
    #[serde(default)]
    pub id: i32,
    pub price: Decimal,
    pub stock: i32,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// A single model validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Product {
    /// Create a transient product (not yet persisted)
    pub fn new(name: impl Into<String>, color: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            id: 0,
            price,
            stock,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Check model validity before it reaches the repository
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required."));
        } else if self.name.chars().count() > NAME_MAX_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at most {} characters.", NAME_MAX_LEN),
            ));
        }

        if self.color.chars().count() > COLOR_MAX_LEN {
            errors.push(FieldError::new(
                "color",
                format!("Color must be at most {} characters.", COLOR_MAX_LEN),
            ));
        }

        if self.price < Decimal::ZERO {
            errors.push(FieldError::new("price", "Price cannot be negative."));
        }

        if self.stock < 0 {
            errors.push(FieldError::new("stock", "Stock cannot be negative."));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Entity for Product {
    const NAME: &'static str = "Product";

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }

    fn schema_violation(&self) -> Option<String> {
        if self.name.chars().count() > NAME_MAX_LEN {
            return Some(format!("name exceeds column width {}", NAME_MAX_LEN));
        }
        if self.color.chars().count() > COLOR_MAX_LEN {
            return Some(format!("color exceeds column width {}", COLOR_MAX_LEN));
        }
        None
    }
}
