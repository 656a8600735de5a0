//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! body limit), and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The browser client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/presets", get(handlers::list_presets))
        // Cosmology
        .route("/calculate_redshift", post(handlers::calculate_redshift))
        .route("/calculate_absolute_magnitude", post(handlers::calculate_absolute_magnitude))
        .route("/calculate_extinction", post(handlers::calculate_extinction))
        // Dates and angles
        .route("/convert_date", post(handlers::convert_date))
        .route("/convert_ra", post(handlers::convert_ra))
        .route("/convert_dec", post(handlers::convert_dec))
        // Optics
        .route("/calculate_fov", post(handlers::calculate_fov))
        .route("/calculate_mosaic", post(handlers::calculate_mosaic))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router = create_router(AppState::default());
        // If we got here, router was created successfully
    }
}
