pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::render::handlers as render_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route(
            "/api/v1/templates",
            get(catalog_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/templates/:id",
            get(catalog_handlers::handle_get_template),
        )
        // Resume storage
        .route("/api/v1/resumes", post(resume_handlers::handle_create_resume))
        .route("/api/v1/resumes/:id", get(resume_handlers::handle_get_resume))
        // Expansion
        .route(
            "/api/v1/resumes/:id/render",
            post(render_handlers::handle_render_resume),
        )
        .route(
            "/api/v1/render/preview",
            post(render_handlers::handle_preview),
        )
        .with_state(state)
}
