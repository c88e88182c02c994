//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/summary", get(handlers::summary::get_summary))
        .route("/api/projects", get(handlers::projects::get_projects))
        .route("/api/timeline", get(handlers::timeline::get_timeline))
        .route(
            "/api/achievements",
            get(handlers::achievements::get_achievements),
        )
        .route("/api/blog", get(handlers::blog::get_posts))
        .route("/api/blog/{id}", get(handlers::blog::get_post))
        .route("/api/contact", post(handlers::contact::submit_contact));

    let router = Router::new().merge(api_routes);

    // Static files and SPA fallback
    let router = router.merge(static_files::static_router());

    // Add security headers middleware
    router
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
