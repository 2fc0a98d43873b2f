//! HTTP API route definitions.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, index, AppState};
use crate::error::ApiError;

/// Create the API router.
///
/// The 404/405/500 boundaries are wired once here, not per route: unknown
/// paths hit the router fallback, known paths with an unregistered method hit
/// the per-route method fallback, and panics escaping route logic are caught
/// by the outermost layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Fallback for paths not in the route table.
async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for unregistered methods on known paths.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Convert a caught panic into the generic 500 envelope.
///
/// The payload is logged server-side; the client never sees it.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("panic while serving request: {detail}")).into_response()
}
