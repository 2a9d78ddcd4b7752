use crate::models::resume::{present, present_opt, EducationItem, ResumeData};
use crate::models::sections::AboutVariant;
use crate::render::html::escape;
use crate::render::{MissingData, SectionResult};
use crate::theme::ResolvedTheme;

type Presentation = fn(&ResumeData, &ResolvedTheme) -> String;

const DEFAULT_PRESENTATION: Presentation = split;

fn presentation(variant: AboutVariant) -> Presentation {
    match variant {
        AboutVariant::Split => split,
        AboutVariant::Simple | AboutVariant::Modern | AboutVariant::Cards => DEFAULT_PRESENTATION,
    }
}

pub fn render(data: &ResumeData, theme: &ResolvedTheme, variant: AboutVariant) -> SectionResult {
    if present(&data.personal_info.summary).is_none() && data.education.is_empty() {
        return Err(MissingData {
            section: "about",
            reason: "no summary and no education",
        });
    }
    Ok(presentation(variant)(data, theme))
}

fn education_entry(item: &EducationItem, theme: &ResolvedTheme) -> String {
    let gpa = present_opt(&item.gpa)
        .map(|g| format!(r#"<span class="gpa text-xs {} ml-2">GPA {}</span>"#, theme.primary, escape(g)))
        .unwrap_or_default();
    let years = present(&item.years)
        .map(|y| format!(r#"<p class="text-xs text-slate-500">{}</p>"#, escape(y)))
        .unwrap_or_default();
    format!(
        r#"<li class="education-entry rounded-xl border {border} bg-white/5 p-4"><p class="font-semibold text-white">{degree}{gpa}</p><p class="text-sm text-slate-400">{institution}</p>{years}</li>"#,
        border = theme.border,
        degree = escape(&item.degree),
        institution = escape(&item.institution),
    )
}

/// Terminal-window summary, with education underneath.
fn split(data: &ResumeData, theme: &ResolvedTheme) -> String {
    let info = &data.personal_info;

    let terminal = match present(&info.summary) {
        Some(summary) => format!(
            r#"<div class="terminal rounded-xl overflow-hidden border border-white/10 bg-slate-900 shadow-2xl">
<div class="flex items-center gap-2 px-4 py-2 bg-slate-800"><span class="w-3 h-3 rounded-full bg-red-500"></span><span class="w-3 h-3 rounded-full bg-yellow-500"></span><span class="w-3 h-3 rounded-full bg-green-500"></span><span class="ml-2 text-xs text-slate-400">{title}</span></div>
<p class="typewriter p-4 font-mono text-sm text-slate-300" data-type-delay="5">{summary}</p>
</div>
"#,
            title = escape(&info.name),
            summary = escape(summary),
        ),
        None => String::new(),
    };

    let education = if data.education.is_empty() {
        String::new()
    } else {
        let entries: String = data
            .education
            .iter()
            .map(|e| education_entry(e, theme))
            .collect();
        format!(
            r#"<h3 class="text-lg font-semibold text-white mt-8 mb-3">Education</h3><ul class="education grid gap-3">{entries}</ul>
"#
        )
    };

    format!(
        r#"<section id="about" class="py-8 sm:py-12 px-4 sm:px-6 bg-slate-950">
<div class="max-w-4xl mx-auto">
<div class="text-center mb-8"><h2 class="text-2xl sm:text-4xl font-bold text-white mb-2">About Me</h2></div>
{terminal}{education}</div>
</section>
"#
    )
}
