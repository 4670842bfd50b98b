//! Store module — persisted course records
//!
//! The persisted collection is separate from the static catalog. This crate
//! only reads from it, through the [`CourseStore`] trait.

pub mod handler;
pub mod memory;
pub mod sqlite;

pub use handler::{lookup_by_name, lookup_router, LookupState};
pub use memory::MemoryCourseStore;
pub use sqlite::SqliteCourseStore;

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// URL selecting the in-process store
pub const MEMORY_STORE_URL: &str = "memory:";

/// A course record as kept in the persisted store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCourse {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Read access to the persisted course collection
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// First course whose description contains `needle`, ignoring case
    ///
    /// `needle` is a literal string. Pattern metacharacters in it match
    /// themselves.
    async fn find_by_description(&self, needle: &str) -> Result<Option<StoredCourse>>;
}

/// Case-insensitive matcher for `needle` taken as a literal substring
///
/// Every regex metacharacter is escaped, so `a.b*c` only matches the text
/// `a.b*c`. Case folding is Unicode-aware.
pub fn literal_matcher(needle: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Store(format!("Failed to build name matcher: {}", e)))
}

/// Open the store named by `config.url`
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn CourseStore>> {
    if config.url == MEMORY_STORE_URL {
        tracing::info!("Using in-memory course store");
        return Ok(Arc::new(MemoryCourseStore::default()));
    }
    Ok(Arc::new(SqliteCourseStore::connect(config).await?))
}
