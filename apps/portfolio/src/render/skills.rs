use crate::models::resume::{present, ResumeData, SkillCategory};
use crate::models::sections::SkillsVariant;
use crate::render::html::escape;
use crate::render::{MissingData, SectionResult};
use crate::theme::ResolvedTheme;

type Presentation = fn(&[&SkillCategory], &ResolvedTheme) -> String;

const DEFAULT_PRESENTATION: Presentation = tags;

fn presentation(variant: SkillsVariant) -> Presentation {
    match variant {
        SkillsVariant::Tags => tags,
        SkillsVariant::Bars
        | SkillsVariant::Circular
        | SkillsVariant::Categories
        | SkillsVariant::Grid
        | SkillsVariant::Minimal => DEFAULT_PRESENTATION,
    }
}

/// Renders the standalone skills section. Categories without skills are skipped.
pub fn render(data: &ResumeData, theme: &ResolvedTheme, variant: SkillsVariant) -> SectionResult {
    let categories: Vec<&SkillCategory> = data.skills.non_empty().collect();
    if categories.is_empty() {
        return Err(MissingData {
            section: "skills",
            reason: "no category has any skills",
        });
    }
    Ok(presentation(variant)(&categories, theme))
}

fn tags(categories: &[&SkillCategory], theme: &ResolvedTheme) -> String {
    let mut groups = String::new();
    for category in categories {
        let chips: String = category
            .items
            .iter()
            .filter_map(|s| present(s))
            .map(|s| {
                format!(
                    r#"<span class="skill-tag px-3 py-1.5 rounded-full text-sm bg-white/5 border {border} text-slate-200">{name}</span>"#,
                    border = theme.border,
                    name = escape(s),
                )
            })
            .collect();
        groups.push_str(&format!(
            r#"<div class="skill-category mb-6"><h3 class="text-sm font-semibold uppercase tracking-wider {primary} mb-3">{name}</h3><div class="flex flex-wrap gap-2">{chips}</div></div>
"#,
            primary = theme.primary,
            name = escape(&category.name),
        ));
    }

    format!(
        r#"<section id="skills" class="py-16 px-4 sm:px-6 bg-slate-950">
<div class="max-w-4xl mx-auto">
<h2 class="text-3xl sm:text-4xl font-bold text-white text-center mb-10">Skills</h2>
{groups}</div>
</section>
"#
    )
}
