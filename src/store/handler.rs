//! HTTP handler for the course name lookup
//!
//! - GET /api/courses/byname?name=... — first persisted course whose
//!   description contains `name`, ignoring case

use crate::api_error::ApiError;
use crate::store::{CourseStore, StoredCourse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for the lookup handler
#[derive(Clone)]
pub struct LookupState {
    pub store: Arc<dyn CourseStore>,
}

/// Query string of `/api/courses/byname`
#[derive(Debug, Deserialize)]
pub struct ByNameQuery {
    pub name: Option<String>,
}

/// Create the lookup router
pub fn lookup_router(state: LookupState) -> Router {
    Router::new()
        .route("/api/courses/byname", get(find_by_name))
        .with_state(state)
}

/// Resolve a persisted course by a literal, case-insensitive name fragment
///
/// A missing or empty `name` is rejected before the store is queried.
/// Store failures are logged and reported with a generic message only.
pub async fn lookup_by_name(
    store: &dyn CourseStore,
    name: Option<&str>,
) -> Result<StoredCourse, ApiError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::warn!("Course lookup without a name");
            return Err(ApiError::bad_request("Name query parameter is required"));
        }
    };

    match store.find_by_description(name).await {
        Ok(Some(course)) => {
            tracing::debug!(id = course.id, "Course found by name");
            Ok(course)
        }
        Ok(None) => Err(ApiError::not_found(
            "Course not found with the provided name",
        )),
        Err(e) => {
            tracing::error!(error = %e, "Error retrieving course by name");
            Err(ApiError::internal("Internal Server Error"))
        }
    }
}

/// GET /api/courses/byname
///
/// A query string that does not deserialize (e.g. a repeated `name`) is a
/// bad request with the same JSON body as any other error.
async fn find_by_name(
    State(state): State<LookupState>,
    query: Result<Query<ByNameQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed course lookup query");
            return ApiError::bad_request(format!(
                "Invalid query string: {}",
                rejection.body_text()
            ))
            .into_response();
        }
    };

    match lookup_by_name(state.store.as_ref(), query.name.as_deref()).await {
        Ok(course) => Json(course).into_response(),
        Err(err) => err.into_response(),
    }
}
