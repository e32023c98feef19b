pub mod error;
pub mod persistence;
pub mod traits;

pub use error::{AppError, AppResult, PersistenceError, PersistenceResult};
pub use persistence::{InMemoryRepository, MySqlRepository, TableEntity};
pub use traits::{Entity, Repository};
