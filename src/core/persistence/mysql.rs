// MySQL-backed repository, generic over any entity that knows its table.
//
// Statements are built once per repository from the entity's column list.
// Every mutation runs in its own transaction and commits exactly once.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::Query;
use sqlx::{FromRow, MySql};

use crate::core::error::{PersistenceError, PersistenceResult};
use crate::core::traits::{Entity, Repository};

/// SQLSTATE raised by MySQL strict mode for oversized values
const DATA_TOO_LONG: &str = "22001";

pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Mapping between an entity and its MySQL table.
///
/// The key column is always `id`; `COLUMNS` lists the remaining columns in
/// the order `bind_columns` binds their values.
pub trait TableEntity: Entity + for<'r> FromRow<'r, MySqlRow> + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

struct Statements {
    select_all: String,
    select_by_id: String,
    lock_by_id: String,
    insert: String,
    update: String,
    delete: String,
    count_by_id: String,
}

impl Statements {
    fn for_table(table: &str, columns: &[&str]) -> Self {
        let column_list = columns.join(", ");
        let placeholders = vec!["?"; columns.len() + 1].join(", ");
        let assignments = columns
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select_all: format!("SELECT id, {} FROM {} ORDER BY id", column_list, table),
            select_by_id: format!("SELECT id, {} FROM {} WHERE id = ?", column_list, table),
            lock_by_id: format!("SELECT id FROM {} WHERE id = ? FOR UPDATE", table),
            insert: format!(
                "INSERT INTO {} (id, {}) VALUES ({})",
                table, column_list, placeholders
            ),
            update: format!("UPDATE {} SET {} WHERE id = ?", table, assignments),
            delete: format!("DELETE FROM {} WHERE id = ?", table),
            count_by_id: format!("SELECT COUNT(*) FROM {} WHERE id = ?", table),
        }
    }
}

/// Repository over a MySQL table
pub struct MySqlRepository<T> {
    pool: MySqlPool,
    sql: Statements,
    _entity: PhantomData<fn() -> T>,
}

impl<T: TableEntity> MySqlRepository<T> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            sql: Statements::for_table(T::TABLE, T::COLUMNS),
            _entity: PhantomData,
        }
    }

    /// Translate a write failure into the persistence taxonomy
    fn classify(err: sqlx::Error, id: i32) -> PersistenceError {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return PersistenceError::DuplicateKey { entity: T::NAME, id };
            }
            if db_err.code().as_deref() == Some(DATA_TOO_LONG) {
                return PersistenceError::Constraint(db_err.message().to_string());
            }
        }
        PersistenceError::Database(err)
    }
}

#[async_trait]
impl<T: TableEntity> Repository<T> for MySqlRepository<T> {
    async fn get_all(&self) -> PersistenceResult<Vec<T>> {
        let entities = sqlx::query_as::<_, T>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities)
    }

    async fn get_by_id(&self, id: i32) -> PersistenceResult<Option<T>> {
        let entity = sqlx::query_as::<_, T>(&self.sql.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity)
    }

    async fn create(&self, entity: T) -> PersistenceResult<T> {
        let is_new = entity.is_new();
        let explicit_id = (!is_new).then(|| entity.id());

        let mut tx = self.pool.begin().await?;

        let result = entity
            .bind_columns(sqlx::query(&self.sql.insert).bind(explicit_id))
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::classify(e, entity.id()))?;

        tx.commit().await?;

        let id = if is_new {
            i32::try_from(result.last_insert_id()).map_err(|_| {
                PersistenceError::Constraint(format!(
                    "{} id {} exceeds the identity range",
                    T::NAME,
                    result.last_insert_id()
                ))
            })?
        } else {
            entity.id()
        };

        tracing::debug!(entity = T::NAME, id, "Inserted row");
        Ok(entity.with_id(id))
    }

    async fn update(&self, entity: &T) -> PersistenceResult<()> {
        let id = entity.id();
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query(&self.sql.lock_by_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if locked.is_none() {
            return Err(PersistenceError::MissingRow { entity: T::NAME, id });
        }

        entity
            .bind_columns(sqlx::query(&self.sql.update))
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::classify(e, id))?;

        tx.commit().await?;

        tracing::debug!(entity = T::NAME, id, "Updated row");
        Ok(())
    }

    async fn delete(&self, entity: &T) -> PersistenceResult<()> {
        let id = entity.id();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::MissingRow { entity: T::NAME, id });
        }

        tx.commit().await?;

        tracing::debug!(entity = T::NAME, id, "Deleted row");
        Ok(())
    }

    async fn any(&self, id: i32) -> PersistenceResult<bool> {
        let count: i64 = sqlx::query_scalar(&self.sql.count_by_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
