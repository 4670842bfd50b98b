//! Unified API router for the Courses API
//!
//! Merges the module routers into a single axum `Router` with CORS and
//! request tracing.
//!
//! ## Endpoint Map
//!
//! | Path                     | Module  | Description                          |
//! |--------------------------|---------|--------------------------------------|
//! | `/`                      | api     | Plain-text greeting                  |
//! | `/health`                | api     | Health check with catalog size       |
//! | `/api/test`              | api     | Fixed sample payload                 |
//! | `/api/courses/bsis`      | catalog | BSIS courses                         |
//! | `/api/courses/bsit`      | catalog | BSIT courses                         |
//! | `/api/backend-courses`   | catalog | Backend courses by description       |
//! | `/api/course-details`    | catalog | Name/specialization projection       |
//! | `/api/courses/byname`    | store   | Persisted course by name fragment    |

use crate::catalog::{catalog_router, CatalogState};
use crate::store::{lookup_router, LookupState};
use axum::{
    extract::State,
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete Courses API application
pub fn build_app(
    catalog_state: CatalogState,
    lookup_state: LookupState,
    cors_origins: &[String],
) -> Router {
    let cors = build_cors(cors_origins);

    let root_routes = Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .route("/api/test", get(test_objects))
        .with_state(catalog_state.clone());

    Router::new()
        .merge(root_routes)
        .merge(catalog_router(catalog_state))
        .merge(lookup_router(lookup_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// =============================================================================
// Root handlers
// =============================================================================

async fn hello() -> &'static str {
    "Hello World!"
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    courses: usize,
}

async fn health_check(State(state): State<CatalogState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        courses: state.catalog.len(),
    })
}

#[derive(Serialize)]
struct TestObject {
    id: u32,
    text: &'static str,
}

async fn test_objects() -> impl IntoResponse {
    Json(vec![TestObject {
        id: 1,
        text: "Test Objects-Test Objects",
    }])
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
