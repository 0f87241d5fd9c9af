//! Badhai (congratulations) board repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use samaj_core::BadhaiId;

use super::RepositoryError;
use crate::models::badhai::{Badhai, CreateBadhaiInput, UpdateBadhaiInput};

/// Internal row type for badhai queries.
#[derive(Debug, sqlx::FromRow)]
struct BadhaiRow {
    id: i32,
    person_name: String,
    occasion: String,
    event_date: NaiveDate,
    city: String,
    details: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BadhaiRow> for Badhai {
    fn from(row: BadhaiRow) -> Self {
        Self {
            id: BadhaiId::new(row.id),
            person_name: row.person_name,
            occasion: row.occasion,
            event_date: row.event_date,
            city: row.city,
            details: row.details,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const BADHAI_COLUMNS: &str =
    "id, person_name, occasion, event_date, city, details, created_at, updated_at";

/// Repository for badhai board database operations.
pub struct BadhaiRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BadhaiRepository<'a> {
    /// Create a new badhai repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List badhai entries, most recent event first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Badhai>, RepositoryError> {
        let rows = sqlx::query_as::<_, BadhaiRow>(&format!(
            "SELECT {BADHAI_COLUMNS} FROM badhai \
             ORDER BY event_date DESC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new badhai entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateBadhaiInput) -> Result<Badhai, RepositoryError> {
        let row = sqlx::query_as::<_, BadhaiRow>(&format!(
            "INSERT INTO badhai (person_name, occasion, event_date, city, details) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {BADHAI_COLUMNS}"
        ))
        .bind(&input.person_name)
        .bind(&input.occasion)
        .bind(input.event_date)
        .bind(&input.city)
        .bind(&input.details)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a badhai entry. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: BadhaiId,
        input: &UpdateBadhaiInput,
    ) -> Result<Badhai, RepositoryError> {
        let row = sqlx::query_as::<_, BadhaiRow>(&format!(
            "UPDATE badhai SET \
                person_name = COALESCE($2, person_name), \
                occasion = COALESCE($3, occasion), \
                event_date = COALESCE($4, event_date), \
                city = COALESCE($5, city), \
                details = COALESCE($6, details) \
             WHERE id = $1 \
             RETURNING {BADHAI_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.person_name)
        .bind(&input.occasion)
        .bind(input.event_date)
        .bind(&input.city)
        .bind(&input.details)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a badhai entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: BadhaiId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM badhai WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
