pub mod product;

pub use product::{FieldError, Product, COLOR_MAX_LEN, NAME_MAX_LEN};
