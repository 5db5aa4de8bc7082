//! HTTP API module for the fetch endpoint and health check.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
