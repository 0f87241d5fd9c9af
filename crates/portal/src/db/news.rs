//! News board repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use samaj_core::NewsId;

use super::RepositoryError;
use crate::models::news::{CreateNewsInput, News, UpdateNewsInput};

/// Internal row type for news queries.
#[derive(Debug, sqlx::FromRow)]
struct NewsRow {
    id: i32,
    title: String,
    body: String,
    published_on: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        Self {
            id: NewsId::new(row.id),
            title: row.title,
            body: row.body,
            published_on: row.published_on,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const NEWS_COLUMNS: &str = "id, title, body, published_on, created_at, updated_at";

/// Repository for news board database operations.
pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    /// Create a new news repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List news items, most recently published first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<News>, RepositoryError> {
        let rows = sqlx::query_as::<_, NewsRow>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news \
             ORDER BY published_on DESC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a news item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateNewsInput) -> Result<News, RepositoryError> {
        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "INSERT INTO news (title, body, published_on) \
             VALUES ($1, $2, $3) \
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.published_on)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a news item. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: NewsId,
        input: &UpdateNewsInput,
    ) -> Result<News, RepositoryError> {
        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "UPDATE news SET \
                title = COALESCE($2, title), \
                body = COALESCE($3, body), \
                published_on = COALESCE($4, published_on) \
             WHERE id = $1 \
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.published_on)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a news item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: NewsId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
