use crate::interaction::{RevealTracker, Teardown};
use crate::models::resume::{present, ExperienceItem, ResumeData};
use crate::models::sections::ExperienceVariant;
use crate::render::html::{escape, ordinal};
use crate::render::{MissingData, SectionResult};
use crate::theme::ResolvedTheme;

/// Highlights shown per card; the rest are dropped.
pub const HIGHLIGHT_LIMIT: usize = 2;

type Presentation = fn(&[ExperienceItem], &ResolvedTheme, &RevealTracker) -> String;

const DEFAULT_PRESENTATION: Presentation = cards;

fn presentation(variant: ExperienceVariant) -> Presentation {
    match variant {
        ExperienceVariant::Cards => cards,
        ExperienceVariant::List
        | ExperienceVariant::Accordion
        | ExperienceVariant::Detailed
        | ExperienceVariant::Timeline
        | ExperienceVariant::Chain => DEFAULT_PRESENTATION,
    }
}

pub fn render(data: &ResumeData, theme: &ResolvedTheme, variant: ExperienceVariant) -> SectionResult {
    if data.experience.is_empty() {
        return Err(MissingData {
            section: "experience",
            reason: "no experience entries",
        });
    }

    // Cards are emitted in their pre-reveal state; the page script reveals them
    // on first intersection.
    let mut reveal = RevealTracker::new(data.experience.len());
    let html = presentation(variant)(&data.experience, theme, &reveal);
    reveal.teardown();
    Ok(html)
}

fn reveal_classes(reveal: &RevealTracker, index: usize) -> &'static str {
    if reveal.is_revealed(index) {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-12"
    }
}

fn highlights_block(item: &ExperienceItem, theme: &ResolvedTheme) -> String {
    let bullets: Vec<&str> = item
        .highlights
        .iter()
        .filter_map(|h| present(h))
        .take(HIGHLIGHT_LIMIT)
        .collect();
    if bullets.is_empty() {
        return String::new();
    }

    let items: String = bullets
        .iter()
        .map(|h| {
            format!(
                r#"<li class="highlight text-slate-300 flex items-start gap-1.5 text-xs"><span class="flex-shrink-0 w-3.5 h-3.5 rounded-full bg-gradient-to-br {gradient} mt-0.5"></span><span>{text}</span></li>"#,
                gradient = theme.gradient,
                text = escape(h),
            )
        })
        .collect();

    format!(
        r#"<div class="highlights pt-3 border-t border-white/10"><p class="text-xs uppercase tracking-wider text-slate-500 mb-2 font-semibold">Highlights</p><ul class="space-y-1.5">{items}</ul></div>"#
    )
}

fn cards(items: &[ExperienceItem], theme: &ResolvedTheme, reveal: &RevealTracker) -> String {
    let mut cards = String::new();
    for (i, item) in items.iter().enumerate() {
        let description = present(&item.description)
            .map(|d| {
                format!(
                    r#"<p class="description text-slate-400 text-xs sm:text-sm leading-relaxed mb-3">{}</p>"#,
                    escape(d)
                )
            })
            .unwrap_or_default();

        cards.push_str(&format!(
            r#"<div class="experience-card w-full max-w-lg transition-all duration-700 {reveal}" data-reveal-index="{i}" style="transition-delay: {delay}ms">
<div class="relative rounded-2xl p-6 border bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 border-white/10" data-tilt>
<div class="absolute -top-4 -right-4 w-12 h-12 rounded-xl bg-gradient-to-br {gradient} flex items-center justify-center text-white font-bold text-xl">{number}</div>
<h3 class="text-xl font-bold text-white mb-1">{title}</h3>
<p class="company {primary} font-semibold text-sm">{company}</p>
<span class="dates inline-flex text-xs {primary} px-2.5 py-1 bg-white/5 border {border} rounded-full my-3">{dates}</span>
{description}{highlights}<div class="h-0.5 w-full mt-3 bg-gradient-to-r from-transparent {via} to-transparent opacity-50"></div>
</div>
</div>
"#,
            reveal = reveal_classes(reveal, i),
            delay = i * 100,
            gradient = theme.gradient,
            number = ordinal(i),
            title = escape(&item.title),
            primary = theme.primary,
            company = escape(&item.company),
            border = theme.border,
            dates = escape(&item.dates),
            highlights = highlights_block(item, theme),
            via = theme.via_stop(),
        ));
    }

    format!(
        r#"<section id="experience" class="relative py-16 sm:py-24 px-4 sm:px-6 bg-gradient-to-b from-slate-950 via-slate-900 to-black overflow-hidden">
<div class="absolute top-1/4 -left-32 w-64 h-64 rounded-full blur-[100px] opacity-30" style="background: {accent}"></div>
<div class="relative max-w-6xl mx-auto z-10">
<div class="text-center mb-12 sm:mb-16">
<div class="inline-flex text-xs sm:text-sm font-semibold {primary} tracking-widest uppercase mb-4 px-4 py-2 rounded-full border {border} bg-white/5">Experience Cards</div>
<h2 class="text-3xl sm:text-5xl font-bold text-white mb-4">Professional Experience</h2>
<p class="text-slate-400 text-sm sm:text-base max-w-lg mx-auto">A visual showcase of my career journey and professional milestones.</p>
<div class="w-24 h-1 bg-gradient-to-r {gradient} mx-auto rounded-full mt-6"></div>
</div>
<div class="flex flex-col items-center gap-8">
{cards}</div>
</div>
</section>
"#,
        accent = theme.accent_hex,
        primary = theme.primary,
        border = theme.border,
        gradient = theme.gradient,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::PersonalInfo;
    use crate::models::Tag;
    use crate::theme::{resolve_theme, ColorPalette};

    fn resume(experience: Vec<ExperienceItem>) -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo::default(),
            experience,
            education: vec![],
            skills: Default::default(),
            projects: vec![],
        }
    }

    fn item(highlights: &[&str]) -> ExperienceItem {
        ExperienceItem {
            title: "Software Engineer (Internship)".into(),
            company: "Microsoft".into(),
            dates: "May 2024 - June 2024".into(),
            description: "...".into(),
            highlights: highlights.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn rose() -> ResolvedTheme {
        resolve_theme(ColorPalette::Rose)
    }

    #[test]
    fn test_single_card_end_to_end() {
        let html = render(&resume(vec![item(&["A", "B"])]), &rose(), ExperienceVariant::Cards).unwrap();
        assert_eq!(html.matches("experience-card").count(), 1);
        assert!(html.contains("Software Engineer (Internship)"));
        assert!(html.contains(">Microsoft<"));
        assert!(html.contains("May 2024 - June 2024"));
        assert_eq!(html.matches(r#"<li class="highlight"#).count(), 2);
        let a = html.find("<span>A</span>").unwrap();
        let b = html.find("<span>B</span>").unwrap();
        assert!(a < b);
        assert!(html.contains("text-rose-400"));
    }

    #[test]
    fn test_no_highlights_block_when_empty() {
        let html = render(&resume(vec![item(&[])]), &rose(), ExperienceVariant::Cards).unwrap();
        assert!(!html.contains("Highlights"));
        assert!(!html.contains(r#"class="highlights"#));
    }

    #[test]
    fn test_blank_highlights_count_as_empty() {
        let html = render(&resume(vec![item(&["", "  "])]), &rose(), ExperienceVariant::Cards).unwrap();
        assert!(!html.contains("Highlights"));
    }

    #[test]
    fn test_highlights_truncated_to_two() {
        let html = render(
            &resume(vec![item(&["one", "two", "three", "four", "five"])]),
            &rose(),
            ExperienceVariant::Cards,
        )
        .unwrap();
        assert_eq!(html.matches(r#"<li class="highlight"#).count(), HIGHLIGHT_LIMIT);
        assert!(html.contains("two"));
        assert!(!html.contains("three"));
    }

    #[test]
    fn test_cards_are_numbered_and_hidden_before_reveal() {
        let html = render(&resume(vec![item(&[]), item(&[])]), &rose(), ExperienceVariant::Cards).unwrap();
        assert!(html.contains(">01<"));
        assert!(html.contains(">02<"));
        assert_eq!(html.matches("opacity-0 translate-y-12").count(), 2);
        assert!(html.contains(r#"data-reveal-index="1""#));
    }

    #[test]
    fn test_every_variant_falls_back_to_cards() {
        let data = resume(vec![item(&["A"])]);
        let expected = render(&data, &rose(), ExperienceVariant::Cards).unwrap();
        for variant in ExperienceVariant::ALL {
            assert_eq!(render(&data, &rose(), *variant).unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_experience_is_missing_data() {
        let err = render(&resume(vec![]), &rose(), ExperienceVariant::Cards).unwrap_err();
        assert_eq!(err.section, "experience");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut it = item(&["<script>"]);
        it.company = "R&D <Labs>".into();
        let html = render(&resume(vec![it]), &rose(), ExperienceVariant::Cards).unwrap();
        assert!(html.contains("R&amp;D &lt;Labs&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = resume(vec![item(&["A", "B"])]);
        assert_eq!(
            render(&data, &rose(), ExperienceVariant::Cards),
            render(&data, &rose(), ExperienceVariant::Cards)
        );
    }
}
