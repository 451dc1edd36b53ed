//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_key;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bind parameters on every query for SQL injection protection.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, "key", url, created_at
            FROM links
            WHERE "key" = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn exists_by_key(&self, key: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM links WHERE "key" = $1)"#,
        )
        .bind(key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn save(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links ("key", url)
            VALUES ($1, $2)
            RETURNING id, "key", url, created_at
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_key(&e) {
                AppError::StoreConflict {
                    constraint: e
                        .as_database_error()
                        .and_then(|db| db.constraint())
                        .map(str::to_owned),
                }
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(link)
    }
}
