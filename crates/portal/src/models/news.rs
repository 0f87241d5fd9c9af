//! News board domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::NewsId;

/// A news article.
#[derive(Debug, Clone, Serialize)]
pub struct News {
    /// Unique article ID.
    pub id: NewsId,
    /// Headline.
    pub title: String,
    /// Article body.
    pub body: String,
    /// Publication date shown on the site.
    pub published_on: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for publishing an article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsInput {
    /// Headline.
    pub title: String,
    /// Article body.
    pub body: String,
    /// Publication date shown on the site.
    pub published_on: NaiveDate,
}

/// Input for updating an article. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNewsInput {
    /// Headline.
    pub title: Option<String>,
    /// Article body.
    pub body: Option<String>,
    /// Publication date shown on the site.
    pub published_on: Option<NaiveDate>,
}
