use crate::models::resume::{present, present_opt, ProjectItem, ResumeData};
use crate::models::sections::ProjectsVariant;
use crate::render::html::{escape, external_link_attrs};
use crate::render::{MissingData, SectionResult};
use crate::theme::ResolvedTheme;

/// Technology pills shown per project.
pub const TECHNOLOGY_LIMIT: usize = 3;

type Presentation = fn(&[ProjectItem], &ResolvedTheme) -> String;

const DEFAULT_PRESENTATION: Presentation = featured;

fn presentation(variant: ProjectsVariant) -> Presentation {
    match variant {
        ProjectsVariant::Featured => featured,
        ProjectsVariant::Grid
        | ProjectsVariant::Carousel
        | ProjectsVariant::Masonry
        | ProjectsVariant::Minimal
        | ProjectsVariant::Showcase => DEFAULT_PRESENTATION,
    }
}

pub fn render(data: &ResumeData, theme: &ResolvedTheme, variant: ProjectsVariant) -> SectionResult {
    if data.projects.is_empty() {
        return Err(MissingData {
            section: "projects",
            reason: "no projects",
        });
    }
    Ok(presentation(variant)(&data.projects, theme))
}

fn project_card(project: &ProjectItem, theme: &ResolvedTheme) -> String {
    let pills: String = project
        .technologies
        .iter()
        .filter_map(|t| present(t))
        .take(TECHNOLOGY_LIMIT)
        .map(|t| {
            format!(
                r#"<span class="tech px-3 py-1.5 bg-slate-800 {} text-xs font-medium rounded-full">{}</span>"#,
                theme.primary,
                escape(t)
            )
        })
        .collect();
    let pills = if pills.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="flex flex-wrap gap-2 mb-5">{pills}</div>"#)
    };

    let mut actions = String::new();
    if let Some(link) = present(&project.link) {
        actions.push_str(&format!(
            r#"<a href="{href}"{ext} class="project-link flex-1 text-center px-4 py-3 bg-gradient-to-r {gradient} text-white text-sm font-semibold rounded-xl">View Project</a>"#,
            href = escape(link),
            ext = external_link_attrs(link),
            gradient = theme.gradient,
        ));
    }
    if let Some(source) = present_opt(&project.github) {
        actions.push_str(&format!(
            r#"<a href="{href}"{ext} class="project-source flex-1 text-center px-4 py-3 bg-slate-800 text-slate-200 text-sm font-semibold rounded-xl">Source Code</a>"#,
            href = escape(source),
            ext = external_link_attrs(source),
        ));
    }
    let actions = if actions.is_empty() {
        actions
    } else {
        format!(r#"<div class="flex gap-3">{actions}</div>"#)
    };

    let description = present(&project.description)
        .map(|d| format!(r#"<p class="text-slate-400 text-sm leading-relaxed mb-4">{}</p>"#, escape(d)))
        .unwrap_or_default();

    format!(
        r#"<div class="project-card w-full max-w-sm group">
<div class="relative h-full rounded-2xl bg-slate-900 border border-slate-700 overflow-hidden">
<div class="aspect-[16/10] bg-gradient-to-br {gradient} flex items-center justify-center relative"><span class="absolute top-4 left-4 px-3 py-1.5 bg-slate-900/90 rounded-full {primary} text-xs font-bold tracking-wider">FEATURED</span></div>
<div class="relative p-6 pt-2">
<h3 class="text-xl font-bold text-white mb-2">{name}</h3>
{description}{pills}{actions}
</div>
</div>
</div>
"#,
        gradient = theme.gradient,
        primary = theme.primary,
        name = escape(&project.name),
    )
}

/// Bento-style cards with a featured badge.
fn featured(projects: &[ProjectItem], theme: &ResolvedTheme) -> String {
    let cards: String = projects.iter().map(|p| project_card(p, theme)).collect();
    format!(
        r#"<section id="projects" class="py-16 sm:py-24 px-4 sm:px-6 bg-slate-950">
<div class="max-w-7xl mx-auto">
<div class="text-center mb-12 sm:mb-16">
<span class="inline-block px-4 py-1.5 rounded-full text-xs font-semibold tracking-wider uppercase bg-slate-800 {primary} mb-4">Featured Work</span>
<h2 class="text-3xl sm:text-5xl font-bold text-white mb-4">Handpicked Projects</h2>
<p class="text-base sm:text-lg text-slate-400 max-w-2xl mx-auto">Each project represents a unique challenge and creative solution</p>
</div>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8 justify-items-center">
{cards}</div>
</div>
</section>
"#,
        primary = theme.primary,
    )
}
