//! Shok (condolences) board repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use samaj_core::ShokId;

use super::RepositoryError;
use crate::models::shok::{CreateShokInput, Shok, UpdateShokInput};

/// Internal row type for shok queries.
#[derive(Debug, sqlx::FromRow)]
struct ShokRow {
    id: i32,
    deceased_name: String,
    date_of_death: NaiveDate,
    city: String,
    ceremony_details: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ShokRow> for Shok {
    fn from(row: ShokRow) -> Self {
        Self {
            id: ShokId::new(row.id),
            deceased_name: row.deceased_name,
            date_of_death: row.date_of_death,
            city: row.city,
            ceremony_details: row.ceremony_details,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SHOK_COLUMNS: &str =
    "id, deceased_name, date_of_death, city, ceremony_details, created_at, updated_at";

/// Repository for shok board database operations.
pub struct ShokRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShokRepository<'a> {
    /// Create a new shok repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List shok entries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Shok>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShokRow>(&format!(
            "SELECT {SHOK_COLUMNS} FROM shok \
             ORDER BY date_of_death DESC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new shok entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateShokInput) -> Result<Shok, RepositoryError> {
        let row = sqlx::query_as::<_, ShokRow>(&format!(
            "INSERT INTO shok (deceased_name, date_of_death, city, ceremony_details) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SHOK_COLUMNS}"
        ))
        .bind(&input.deceased_name)
        .bind(input.date_of_death)
        .bind(&input.city)
        .bind(&input.ceremony_details)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a shok entry. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ShokId,
        input: &UpdateShokInput,
    ) -> Result<Shok, RepositoryError> {
        let row = sqlx::query_as::<_, ShokRow>(&format!(
            "UPDATE shok SET \
                deceased_name = COALESCE($2, deceased_name), \
                date_of_death = COALESCE($3, date_of_death), \
                city = COALESCE($4, city), \
                ceremony_details = COALESCE($5, ceremony_details) \
             WHERE id = $1 \
             RETURNING {SHOK_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.deceased_name)
        .bind(input.date_of_death)
        .bind(&input.city)
        .bind(&input.ceremony_details)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a shok entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ShokId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shok WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
