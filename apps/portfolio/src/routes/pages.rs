use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::errors::AppError;
use crate::loader::ConfigOverrides;
use crate::render::render_page;
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.resume, &state.sections, &state.render))
}

/// GET /preview
/// Renders with query overrides (`palette`, `template`, per-section variants).
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(overrides): Query<ConfigOverrides>,
) -> Result<Html<String>, AppError> {
    let config = if overrides.is_empty() {
        state.sections
    } else {
        overrides.apply(&state.sections)?
    };
    Ok(Html(render_page(&state.resume, &config, &state.render)))
}
