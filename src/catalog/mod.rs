//! Catalog module — static course catalog and its queries
//!
//! The catalog is loaded once at startup from the bundled data file (or a
//! configured override) and shared read-only by every request.

pub mod handler;
pub mod query;
pub mod types;

pub use handler::{catalog_router, CatalogState};
pub use query::{backend_courses, course_details, courses_with_tag, filter_by_tag, is_backend};
pub use types::{Catalog, CourseDetail, CourseRecord, YearGroup};
