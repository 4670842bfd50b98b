//! SQLite-backed course store
//!
//! Courses live in a single `courses` table; `tags` is a JSON array stored
//! as text. Name lookups walk rows in `id` order and test each description
//! with the shared literal matcher, since SQLite's `lower()` and `LIKE` only
//! fold ASCII.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::store::{literal_matcher, CourseStore, StoredCourse};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const CREATE_COURSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]'
)";

const SELECT_COURSES: &str = "SELECT id, description, tags FROM courses ORDER BY id";

/// Course store over a SQLite connection pool
pub struct SqliteCourseStore {
    pool: SqlitePool,
}

impl SqliteCourseStore {
    /// Connect using the store configuration
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        if !config.url.starts_with("sqlite:") {
            return Err(Error::Config(format!(
                "Unsupported store URL: {}",
                config.url
            )));
        }

        info!("Connecting to course store");
        let options = SqliteConnectOptions::from_str(&config.url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool);
        if config.create_schema {
            store.ensure_schema().await?;
        }
        info!("Course store initialized");
        Ok(store)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `courses` table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_COURSES_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn find_by_description(&self, needle: &str) -> Result<Option<StoredCourse>> {
        let matcher = literal_matcher(needle)?;
        let mut rows =
            sqlx::query_as::<_, (i64, String, String)>(SELECT_COURSES).fetch(&self.pool);

        while let Some((id, description, tags)) = rows.try_next().await? {
            if matcher.is_match(&description) {
                return Ok(Some(StoredCourse {
                    id,
                    description,
                    tags: serde_json::from_str(&tags)?,
                }));
            }
        }
        Ok(None)
    }
}
