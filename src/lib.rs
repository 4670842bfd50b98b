//! Courses API - read-only HTTP API over a course catalog
//!
//! Serves a static catalog of academic courses, bundled with the binary and
//! grouped by year and semester, together with a single lookup against a
//! persisted course collection.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      axum Router                          │
//! │   /  /health  /api/test      (api)                        │
//! │   /api/courses/{bsis,bsit}                                │
//! │   /api/backend-courses       (catalog)                    │
//! │   /api/course-details                                     │
//! │   /api/courses/byname        (store)                      │
//! └──────────────┬──────────────────────────────┬────────────┘
//!                │                              │
//!   ┌────────────▼────────────┐    ┌────────────▼────────────┐
//!   │  Catalog (Arc, frozen)  │    │  CourseStore (trait)    │
//!   │  - flatten / filter     │    │  - SqliteCourseStore    │
//!   │  - backend + collate    │    │  - MemoryCourseStore    │
//!   │  - course details       │    │                         │
//!   └─────────────────────────┘    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: router assembly, root endpoints, CORS
//! - [`catalog`]: catalog model, queries and handlers
//! - [`store`]: persisted course store and the name lookup
//! - [`server`]: server builder and serve loop
//! - [`config`]: configuration management

pub mod api;
pub mod api_error;
pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod store;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use server::{Server, ServerBuilder};
