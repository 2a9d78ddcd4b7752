use std::sync::Arc;

use crate::models::resume::ResumeData;
use crate::models::sections::SectionConfig;
use crate::render::RenderContext;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub resume: Arc<ResumeData>,
    /// Section configuration chosen at startup; `/preview` layers overrides on a copy.
    pub sections: SectionConfig,
    pub render: RenderContext,
}
