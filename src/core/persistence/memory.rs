use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{PersistenceError, PersistenceResult};
use crate::core::traits::{Entity, Repository};

/// Plain id → entity map behind the repository contract.
///
/// Serves as the test double and as the `memory` storage backend. It mirrors
/// the database's observable behavior: ids are assigned on insert, explicit
/// duplicate ids are rejected, schema bounds are enforced and writes to
/// missing rows fail.
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
}

struct Store<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a store pre-populated with already persisted entities
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let rows: BTreeMap<i32, T> = entities.into_iter().map(|e| (e.id(), e)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max.saturating_add(1));

        Self {
            store: RwLock::new(Store { rows, next_id }),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.rows.is_empty()
    }

    fn check_schema(entity: &T) -> PersistenceResult<()> {
        match entity.schema_violation() {
            Some(violation) => Err(PersistenceError::Constraint(violation)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> PersistenceResult<Vec<T>> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> PersistenceResult<Option<T>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, entity: T) -> PersistenceResult<T> {
        Self::check_schema(&entity)?;

        let mut store = self.store.write().await;

        let id = if entity.is_new() {
            // next_id saturates at i32::MAX, so an occupied slot means exhaustion
            if store.rows.contains_key(&store.next_id) {
                return Err(PersistenceError::Constraint(format!(
                    "{} identity range exhausted",
                    T::NAME
                )));
            }
            store.next_id
        } else {
            entity.id()
        };

        if store.rows.contains_key(&id) {
            return Err(PersistenceError::DuplicateKey { entity: T::NAME, id });
        }

        store.next_id = store.next_id.max(id.saturating_add(1));

        let stored = entity.with_id(id);
        store.rows.insert(id, stored.clone());

        tracing::debug!(entity = T::NAME, id, "Inserted in-memory row");
        Ok(stored)
    }

    async fn update(&self, entity: &T) -> PersistenceResult<()> {
        Self::check_schema(entity)?;

        let id = entity.id();
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(row) => {
                *row = entity.clone();
                Ok(())
            }
            None => Err(PersistenceError::MissingRow { entity: T::NAME, id }),
        }
    }

    async fn delete(&self, entity: &T) -> PersistenceResult<()> {
        let id = entity.id();

        match self.store.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(PersistenceError::MissingRow { entity: T::NAME, id }),
        }
    }

    async fn any(&self, id: i32) -> PersistenceResult<bool> {
        Ok(self.store.read().await.rows.contains_key(&id))
    }
}
