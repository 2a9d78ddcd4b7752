pub mod api;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_index))
        .route("/preview", get(pages::handle_preview))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(api::handle_get_resume))
        .route("/api/v1/config", get(api::handle_get_config))
        .route("/api/v1/theme", get(api::handle_get_theme))
        .route("/api/v1/themes/:palette", get(api::handle_resolve_palette))
        .route("/api/v1/templates", get(api::handle_list_templates))
        .route("/api/v1/data-gaps", get(api::handle_data_gaps))
        .fallback(not_found)
        .with_state(state)
}
