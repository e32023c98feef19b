use async_trait::async_trait;

use crate::core::error::PersistenceResult;
use crate::core::traits::Entity;

/// Persistence gateway over a single entity collection.
///
/// Callers depend on this trait only, so any backend (MySQL, in-memory)
/// can be substituted without touching controller code. Every mutation is
/// its own unit of work: it either commits or returns a `PersistenceError`.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored entity, in backend-defined order
    async fn get_all(&self) -> PersistenceResult<Vec<T>>;

    /// The entity with `id`, or `None` when nothing is stored under it
    async fn get_by_id(&self, id: i32) -> PersistenceResult<Option<T>>;

    /// Store a new entity and return it with its persisted id.
    ///
    /// A new entity (id 0) gets an id assigned by the backend; a non-zero id
    /// is accepted as given.
    async fn create(&self, entity: T) -> PersistenceResult<T>;

    /// Overwrite all fields of the stored entity with the same id.
    ///
    /// Fails with `PersistenceError::MissingRow` if no such row exists.
    async fn update(&self, entity: &T) -> PersistenceResult<()>;

    /// Remove the stored entity with the same id.
    ///
    /// Fails with `PersistenceError::MissingRow` if no such row exists.
    async fn delete(&self, entity: &T) -> PersistenceResult<()>;

    /// Whether an entity with `id` currently exists
    async fn any(&self, id: i32) -> PersistenceResult<bool>;
}
