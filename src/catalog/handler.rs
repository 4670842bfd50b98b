//! HTTP handlers for the Catalog API
//!
//! Provides 4 read-only endpoints:
//! - GET /api/courses/bsis      — courses tagged BSIS
//! - GET /api/courses/bsit      — courses tagged BSIT
//! - GET /api/backend-courses   — backend courses sorted by description
//! - GET /api/course-details    — name/specialization of every course

use crate::catalog::query::{backend_courses, course_details, courses_with_tag, BSIS, BSIT};
use crate::catalog::types::Catalog;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<Catalog>,
}

/// Create the catalog router
pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .route("/api/courses/bsis", get(list_bsis))
        .route("/api/courses/bsit", get(list_bsit))
        .route("/api/backend-courses", get(list_backend))
        .route("/api/course-details", get(list_details))
        .with_state(state)
}

/// GET /api/courses/bsis
async fn list_bsis(State(state): State<CatalogState>) -> Response {
    let courses = courses_with_tag(&state.catalog, BSIS);
    tracing::debug!(count = courses.len(), "Listed BSIS courses");
    Json(courses).into_response()
}

/// GET /api/courses/bsit
async fn list_bsit(State(state): State<CatalogState>) -> Response {
    let courses = courses_with_tag(&state.catalog, BSIT);
    tracing::debug!(count = courses.len(), "Listed BSIT courses");
    Json(courses).into_response()
}

/// GET /api/backend-courses
async fn list_backend(State(state): State<CatalogState>) -> Response {
    let courses = backend_courses(&state.catalog);
    tracing::debug!(count = courses.len(), "Listed backend courses");
    Json(courses).into_response()
}

/// GET /api/course-details
async fn list_details(State(state): State<CatalogState>) -> Response {
    Json(course_details(&state.catalog)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn make_app(catalog: Catalog) -> Router {
        catalog_router(CatalogState {
            catalog: Arc::new(catalog),
        })
    }

    fn bundled_app() -> Router {
        make_app(Catalog::bundled().unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 256)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_bsis() {
        let (status, json) = get_json(bundled_app(), "/api/courses/bsis").await;
        assert_eq!(status, StatusCode::OK);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 19);
        assert!(arr
            .iter()
            .all(|c| c["tags"].as_array().unwrap().iter().any(|t| t == "BSIS")));
        assert_eq!(arr[0]["description"], "Introduction to Computing");
    }

    #[tokio::test]
    async fn test_list_bsit() {
        let (status, json) = get_json(bundled_app(), "/api/courses/bsit").await;
        assert_eq!(status, StatusCode::OK);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 22);
        assert!(arr
            .iter()
            .all(|c| c["tags"].as_array().unwrap().iter().any(|t| t == "BSIT")));
    }

    #[tokio::test]
    async fn test_list_backend_sorted() {
        let (status, json) = get_json(bundled_app(), "/api/backend-courses").await;
        assert_eq!(status, StatusCode::OK);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 18);
        assert_eq!(arr[0]["description"], "Advanced Database Systems");
        assert_eq!(arr[17]["description"], "Web Systems and Technologies");

        let names: Vec<&str> = arr
            .iter()
            .map(|c| c["description"].as_str().unwrap())
            .collect();
        let ip = names.iter().position(|n| *n == "Integrative Programming and Technologies");
        let is = names.iter().position(|n| *n == "IS Project Management");
        assert!(ip < is);
    }

    #[tokio::test]
    async fn test_course_details() {
        let (status, json) = get_json(bundled_app(), "/api/course-details").await;
        assert_eq!(status, StatusCode::OK);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 32);
        assert_eq!(arr[0]["name"], "CC 101");
        assert_eq!(arr[0]["specialization"], "Fundamentals");
    }

    #[tokio::test]
    async fn test_single_record_catalog() {
        let catalog = Catalog::from_json(
            r#"[{"core": [{"description": "X", "tags": ["BSIS", "Database"]}]}]"#,
        )
        .unwrap();
        let app = make_app(catalog);

        let (status, bsis) = get_json(app.clone(), "/api/courses/bsis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            bsis,
            serde_json::json!([{"description": "X", "tags": ["BSIS", "Database"]}])
        );

        let (_, backend) = get_json(app.clone(), "/api/backend-courses").await;
        assert_eq!(backend, bsis);

        let (_, bsit) = get_json(app.clone(), "/api/courses/bsit").await;
        assert_eq!(bsit, serde_json::json!([]));

        let (_, details) = get_json(app, "/api/course-details").await;
        assert_eq!(
            details,
            serde_json::json!([{"name": "BSIS", "specialization": "Database"}])
        );
    }

    #[tokio::test]
    async fn test_short_tags_projection() {
        let catalog = Catalog::from_json(
            r#"[{"core": [{"description": "A", "tags": ["A 1"]}, {"description": "B", "tags": []}]}]"#,
        )
        .unwrap();
        let (status, details) = get_json(make_app(catalog), "/api/course-details").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(details, serde_json::json!([{"name": "A 1"}, {}]));
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let (status, json) = get_json(make_app(Catalog::default()), "/api/backend-courses").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }
}
