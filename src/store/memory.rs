//! In-process course store
//!
//! Holds courses in a vector and matches names with the shared literal
//! matcher. Used with `store.url = "memory:"` and in tests.

use crate::catalog::CourseRecord;
use crate::error::Result;
use crate::store::{literal_matcher, CourseStore, StoredCourse};
use async_trait::async_trait;

/// Vector-backed course store
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: Vec<StoredCourse>,
}

impl MemoryCourseStore {
    pub fn new(courses: Vec<StoredCourse>) -> Self {
        Self { courses }
    }

    /// Build a store from catalog records, numbering ids from 1
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        let courses = records
            .into_iter()
            .zip(1..)
            .map(|(record, id)| StoredCourse {
                id,
                description: record.description.clone(),
                tags: record.tags.clone(),
            })
            .collect();
        Self { courses }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn find_by_description(&self, needle: &str) -> Result<Option<StoredCourse>> {
        let matcher = literal_matcher(needle)?;

        Ok(self
            .courses
            .iter()
            .find(|course| matcher.is_match(&course.description))
            .cloned())
    }
}
