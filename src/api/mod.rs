mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::models::Portfolio;

/// Path of the typewriter frame stream, relative to the site root.
pub const ROLES_STREAM_PATH: &str = "/api/v1/hero/roles/stream";

/// Shared, read-only state of the server.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(portfolio: Portfolio, config: SiteConfig) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            config: Arc::new(config),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Content
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/projects", get(handlers::list_projects))
        .route("/projects/categories", get(handlers::list_project_categories))
        .route("/projects/{id}", get(handlers::get_project))
        .route("/skills/{category}", get(handlers::get_skill_category))
        // Hero typewriter
        .route("/hero/roles/stream", get(handlers::stream_roles))
        // Contact
        .route("/contact", post(handlers::submit_contact))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::page))
        .route("/contact", post(handlers::submit_contact_form))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
