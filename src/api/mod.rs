//! HTTP API module for the info and health endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
