//! Sangathan (local chapter) repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use samaj_core::SangathanId;

use super::RepositoryError;
use crate::models::sangathan::{CreateSangathanInput, Sangathan, UpdateSangathanInput};

/// Internal row type for sangathan queries.
#[derive(Debug, sqlx::FromRow)]
struct SangathanRow {
    id: i32,
    name: String,
    city: String,
    president_name: Option<String>,
    contact_phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SangathanRow> for Sangathan {
    fn from(row: SangathanRow) -> Self {
        Self {
            id: SangathanId::new(row.id),
            name: row.name,
            city: row.city,
            president_name: row.president_name,
            contact_phone: row.contact_phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SANGATHAN_COLUMNS: &str =
    "id, name, city, president_name, contact_phone, created_at, updated_at";

/// Repository for sangathan database operations.
pub struct SangathanRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SangathanRepository<'a> {
    /// Create a new sangathan repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List sangathans, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Sangathan>, RepositoryError> {
        let rows = sqlx::query_as::<_, SangathanRow>(&format!(
            "SELECT {SANGATHAN_COLUMNS} FROM sangathan ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new sangathan.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateSangathanInput) -> Result<Sangathan, RepositoryError> {
        let row = sqlx::query_as::<_, SangathanRow>(&format!(
            "INSERT INTO sangathan (name, city, president_name, contact_phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SANGATHAN_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.president_name)
        .bind(&input.contact_phone)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a sangathan. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the sangathan doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: SangathanId,
        input: &UpdateSangathanInput,
    ) -> Result<Sangathan, RepositoryError> {
        let row = sqlx::query_as::<_, SangathanRow>(&format!(
            "UPDATE sangathan SET \
                name = COALESCE($2, name), \
                city = COALESCE($3, city), \
                president_name = COALESCE($4, president_name), \
                contact_phone = COALESCE($5, contact_phone) \
             WHERE id = $1 \
             RETURNING {SANGATHAN_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.president_name)
        .bind(&input.contact_phone)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a sangathan. Members pointing at it keep existing with a
    /// cleared affiliation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the sangathan doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: SangathanId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM sangathan WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
