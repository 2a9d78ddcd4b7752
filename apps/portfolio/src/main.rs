mod config;
mod errors;
mod interaction;
mod loader;
mod models;
mod render;
mod routes;
mod state;
mod theme;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::{data_gaps, default_resume, load_resume_file, resolve_startup_config, StartupSections};
use crate::render::RenderContext;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Resume data and section config load independently; they meet at render time.
    let resume = match &config.resume_path {
        Some(path) => {
            let data = load_resume_file(path)?;
            info!("Resume loaded from {}", path.display());
            data
        }
        None => default_resume().context("Embedded resume data is malformed")?,
    };
    for gap in data_gaps(&resume) {
        warn!("Resume gap in {}: {}", gap.section, gap.detail);
    }

    let sections = resolve_startup_config(&StartupSections {
        template: config.template.as_deref(),
        palette: config.palette.as_deref(),
        path: config.sections_path.as_deref(),
        policy: config.config_policy,
    })?;
    info!(
        "Sections: hero={} about={} experience={} projects={} skills={} ({}) contact={}, palette {}",
        sections.hero,
        sections.about,
        sections.experience,
        sections.projects,
        sections.skills,
        sections.skills_display,
        sections.contact,
        sections.color_palette
    );

    let state = AppState {
        resume: Arc::new(resume),
        sections,
        render: RenderContext::current(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
