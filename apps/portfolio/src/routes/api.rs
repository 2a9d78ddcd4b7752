use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::loader::{data_gaps, DataGap};
use crate::models::resume::ResumeData;
use crate::models::sections::SectionConfig;
use crate::models::template::{templates, Template};
use crate::theme::{resolve_palette_name, resolve_theme, ResolvedTheme};
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.resume.as_ref().clone())
}

/// GET /api/v1/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<SectionConfig> {
    Json(state.sections)
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ResolvedTheme> {
    Json(resolve_theme(state.sections.color_palette))
}

/// GET /api/v1/themes/:palette
pub async fn handle_resolve_palette(Path(palette): Path<String>) -> Result<Json<ResolvedTheme>, AppError> {
    Ok(Json(resolve_palette_name(&palette)?))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [Template]> {
    Json(templates())
}

/// GET /api/v1/data-gaps
pub async fn handle_data_gaps(State(state): State<AppState>) -> Json<Vec<DataGap>> {
    Json(data_gaps(&state.resume))
}
