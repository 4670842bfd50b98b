//! Catalog data model
//!
//! The catalog is an ordered list of academic years. Each year maps a
//! category key (usually a semester) to the courses offered under it, and
//! both levels keep the order they had in the source file.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/courses.json");

/// A single course entry
///
/// By convention `tags[0]` is the course name (its code) and `tags[1]` its
/// specialization. The remaining tags name programs and topic categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CourseRecord {
    pub fn new<I, S>(description: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Course name (first tag), if present
    pub fn name(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Specialization (second tag), if present
    pub fn specialization(&self) -> Option<&str> {
        self.tags.get(1).map(String::as_str)
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Courses of one academic year, keyed by category
pub type YearGroup = IndexMap<String, Vec<CourseRecord>>;

/// The static course catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    years: Vec<YearGroup>,
}

impl Catalog {
    pub fn from_years(years: Vec<YearGroup>) -> Self {
        Self { years }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Catalog(format!("Invalid catalog data: {}", e)))
    }

    /// Load a catalog from a JSON file
    pub async fn from_path(path: &Path) -> Result<Self> {
        let data = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    /// The catalog bundled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn years(&self) -> &[YearGroup] {
        &self.years
    }

    /// All records in year, then category, then list order
    pub fn records(&self) -> impl Iterator<Item = &CourseRecord> + '_ {
        self.years
            .iter()
            .flat_map(|year| year.values())
            .flat_map(|courses| courses.iter())
    }

    /// Flat, ordered view over every record in the catalog
    pub fn flatten(&self) -> Vec<&CourseRecord> {
        self.records().collect()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.years
            .iter()
            .flat_map(|year| year.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Name and specialization projected out of a course's tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl From<&CourseRecord> for CourseDetail {
    fn from(record: &CourseRecord) -> Self {
        Self {
            name: record.name().map(str::to_string),
            specialization: record.specialization().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_YEARS: &str = r#"[
        {
            "second": [{ "description": "B", "tags": ["B1"] }],
            "first": [
                { "description": "A", "tags": ["A1", "Core"] },
                { "description": "C", "tags": [] }
            ]
        },
        { "only": [{ "description": "D" }] }
    ]"#;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.years().len(), 4);
        assert_eq!(catalog.len(), 32);
        assert!(catalog.records().all(|c| c.tags.len() >= 2));
    }

    #[test]
    fn test_flatten_keeps_source_order() {
        let catalog = Catalog::from_json(TWO_YEARS).unwrap();
        let descriptions: Vec<&str> = catalog
            .flatten()
            .iter()
            .map(|c| c.description.as_str())
            .collect();

        // Category keys are not re-sorted
        assert_eq!(descriptions, vec!["B", "A", "C", "D"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_missing_tags_default_empty() {
        let catalog = Catalog::from_json(TWO_YEARS).unwrap();
        let last = catalog.flatten()[3];
        assert!(last.tags.is_empty());
        assert_eq!(last.name(), None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.flatten().is_empty());
    }

    #[test]
    fn test_invalid_catalog() {
        let err = Catalog::from_json(r#"{"year": 1}"#).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));

        let err = Catalog::from_json(r#"[{"core": [{"tags": ["X"]}]}]"#).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_record_accessors() {
        let record = CourseRecord::new("Database Systems", ["IS 104", "Database", "BSIS"]);
        assert_eq!(record.name(), Some("IS 104"));
        assert_eq!(record.specialization(), Some("Database"));
        assert!(record.has_tag("BSIS"));
        assert!(!record.has_tag("bsis"));
        assert!(!record.has_tag("BSI"));
    }

    #[test]
    fn test_course_detail_omits_absent_fields() {
        let detail = CourseDetail::from(&CourseRecord::new("Solo", ["X 1"]));
        let json = serde_json::to_string(&detail).unwrap();
        assert_eq!(json, r#"{"name":"X 1"}"#);
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", TWO_YEARS).unwrap();

        let catalog = Catalog::from_path(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 4);

        let missing = Catalog::from_path(Path::new("/nonexistent/courses.json")).await;
        assert!(matches!(missing, Err(Error::Catalog(_))));
    }
}
