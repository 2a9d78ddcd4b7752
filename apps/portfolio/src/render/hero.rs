use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::interaction::particles::DEFAULT_EMIT_INTERVAL;
use crate::interaction::{PointerTracker, SnowField, Teardown};
use crate::models::resume::{present, PersonalInfo, ResumeData};
use crate::models::sections::HeroVariant;
use crate::render::html::escape;
use crate::theme::ResolvedTheme;

/// Skill chips shown in the hero when skills are displayed there.
pub const HERO_SKILL_LIMIT: usize = 8;

/// Fixed so the pre-rendered snowfall is identical on every render.
const SNOW_SEED: u64 = 0x5107_F1A4;
/// Simulated time before the first frame, long enough that flakes cover the screen.
const SNOW_WARM_UP: Duration = Duration::from_secs(12);

struct HeroProps<'a> {
    info: &'a PersonalInfo,
    theme: &'a ResolvedTheme,
    skills: Vec<&'a str>,
    link_projects: bool,
}

type Presentation = fn(&HeroProps<'_>) -> String;

const DEFAULT_PRESENTATION: Presentation = spotlight;

fn presentation(variant: HeroVariant) -> Presentation {
    match variant {
        HeroVariant::Spotlight => spotlight,
        HeroVariant::FallingSnow => falling_snow,
        HeroVariant::InteractiveBoxes
        | HeroVariant::ShinyText
        | HeroVariant::FloatingShapes
        | HeroVariant::AnimatedBorder => DEFAULT_PRESENTATION,
    }
}

/// Renders the hero banner. Always produces output: a blank name still gets the
/// banner. "View Work" is only linked when the projects section is on the page.
pub fn render(
    data: &ResumeData,
    theme: &ResolvedTheme,
    variant: HeroVariant,
    show_skills: bool,
    link_projects: bool,
) -> String {
    let skills = if show_skills {
        data.skills.flattened().take(HERO_SKILL_LIMIT).collect()
    } else {
        Vec::new()
    };
    let props = HeroProps {
        info: &data.personal_info,
        theme,
        skills,
        link_projects,
    };
    presentation(variant)(&props)
}

fn intro(props: &HeroProps<'_>) -> String {
    let info = props.info;
    let theme = props.theme;

    let mut parts = format!(
        r#"<p class="font-mono mb-2 text-sm sm:text-base bg-gradient-to-r {gradient} bg-clip-text text-transparent">Hello, I&#39;m</p>
<h1 class="text-3xl sm:text-5xl md:text-6xl font-bold mb-3 sm:mb-4">{name}</h1>
"#,
        gradient = theme.gradient,
        name = escape(&info.name),
    );
    if let Some(title) = present(&info.title) {
        parts.push_str(&format!(
            r#"<p class="text-lg sm:text-2xl text-slate-300 mb-4 sm:mb-6">{}</p>
"#,
            escape(title)
        ));
    }
    if let Some(summary) = present(&info.summary) {
        parts.push_str(&format!(
            r#"<p class="text-sm sm:text-base text-slate-400 mb-6 sm:mb-8 max-w-md">{}</p>
"#,
            escape(summary)
        ));
    }
    if !props.skills.is_empty() {
        let chips: String = props
            .skills
            .iter()
            .map(|s| {
                format!(
                    r#"<span class="skill-chip px-3 py-1 rounded-full text-xs bg-white/5 border {border} {primary}">{name}</span>"#,
                    border = theme.border,
                    primary = theme.primary,
                    name = escape(s),
                )
            })
            .collect();
        parts.push_str(&format!(
            r#"<div class="hero-skills flex flex-wrap gap-2 mb-6">{chips}</div>
"#
        ));
    }

    let mut actions = String::new();
    if let Some(email) = present(&info.email) {
        actions.push_str(&format!(
            r#"<a href="mailto:{email}" class="px-6 py-3 bg-gradient-to-r {gradient} text-white rounded-lg font-semibold">Get in Touch</a>"#,
            email = escape(email),
            gradient = theme.gradient,
        ));
    }
    if props.link_projects {
        actions.push_str(
            r##"<a href="#projects" class="px-6 py-3 border border-slate-600 rounded-lg font-semibold hover:border-slate-400">View Work</a>"##,
        );
    }
    if !actions.is_empty() {
        parts.push_str(&format!(
            r#"<div class="flex gap-3 sm:gap-4 flex-wrap">{actions}</div>
"#
        ));
    }
    parts
}

fn spotlight_layers(theme: &ResolvedTheme) -> String {
    let pointer = PointerTracker::default();
    let pos = pointer.position();
    let rgb = theme.spotlight_rgb;
    format!(
        r#"<div class="absolute inset-0 bg-gradient-to-br {gradient} opacity-20"></div>
<div class="spotlight absolute inset-0 pointer-events-none" data-spotlight-rgb="{r},{g},{b}" style="background-image: radial-gradient(circle at {x}px {y}px, {strong} 0%, {faint} 200px, transparent 350px)"></div>
<div class="absolute inset-0 pointer-events-none opacity-30" style="background-image: radial-gradient(circle, {dot} 1px, transparent 1px); background-size: 24px 24px"></div>
"#,
        gradient = theme.gradient,
        r = rgb.0,
        g = rgb.1,
        b = rgb.2,
        x = pos.x,
        y = pos.y,
        strong = rgb.rgba(0.15),
        faint = rgb.rgba(0.05),
        dot = rgb.rgba(0.3),
    )
}

fn shell(variant_class: &str, layers: &str, content: &str) -> String {
    format!(
        r#"<section id="home" class="hero {variant_class} min-h-screen flex bg-slate-950 relative overflow-hidden">
{layers}<div class="w-full min-h-screen text-white flex items-center justify-center p-6 sm:p-12 relative z-10">
<div class="max-w-lg">
{content}</div>
</div>
</section>
"#
    )
}

fn spotlight(props: &HeroProps<'_>) -> String {
    shell("hero-spotlight", &spotlight_layers(props.theme), &intro(props))
}

fn falling_snow(props: &HeroProps<'_>) -> String {
    let mut field = SnowField::new(
        StdRng::seed_from_u64(SNOW_SEED),
        props.theme.particle_colors,
        DEFAULT_EMIT_INTERVAL,
    );
    field.advance(SNOW_WARM_UP);

    let now = field.now();
    let flakes: String = field
        .flakes()
        .iter()
        .map(|f| {
            // A negative delay starts each flake part-way through its fall.
            format!(
                r#"<svg class="snowflake absolute" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" style="left: {x:.2}%; opacity: {opacity}; --drift: {drift:.2}%; animation: snow-fall {life:.2}s linear {delay:.2}s forwards"><path d="M12 2v20M2 12h20M6 6l12 12M6 18L18 6"/></svg>"#,
                size = f.size,
                color = f.color,
                x = f.x,
                opacity = f.opacity,
                drift = f.drift,
                life = f.lifetime_secs,
                delay = -f.age_secs(now),
            )
        })
        .collect();
    field.teardown();

    let layers = format!(
        r#"{spot}<div class="snow absolute inset-0 pointer-events-none overflow-hidden" data-snow-interval-ms="{interval}" data-snow-colors="{colors}">{flakes}</div>
"#,
        spot = spotlight_layers(props.theme),
        interval = DEFAULT_EMIT_INTERVAL.as_millis(),
        colors = escape(&props.theme.particle_colors.join(",")),
    );
    shell("hero-falling-snow", &layers, &intro(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::default_resume;
    use crate::models::resume::{SkillCategory, SkillsGrouped};
    use crate::models::Tag;
    use crate::theme::{resolve_theme, ColorPalette};

    fn blue() -> ResolvedTheme {
        resolve_theme(ColorPalette::Blue)
    }

    #[test]
    fn test_spotlight_shows_name_title_and_summary() {
        let data = default_resume().unwrap();
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, true);
        assert!(html.contains("Mayank Saini"));
        assert!(html.contains("Professional"));
        assert!(html.contains("hero-spotlight"));
        assert!(html.contains("circle at 400px 300px"));
        assert!(html.contains("rgba(59, 130, 246, 0.15)"));
    }

    #[test]
    fn test_get_in_touch_requires_email() {
        let mut data = default_resume().unwrap();
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, true);
        assert!(html.contains("Get in Touch"));

        data.personal_info.email = String::new();
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, true);
        assert!(!html.contains("Get in Touch"));
        assert!(!html.contains("mailto:"));
        assert!(html.contains(r##"href="#projects""##));
    }

    #[test]
    fn test_unimplemented_variants_use_spotlight() {
        let data = default_resume().unwrap();
        let expected = render(&data, &blue(), HeroVariant::Spotlight, false, true);
        for variant in HeroVariant::ALL {
            if *variant == HeroVariant::FallingSnow {
                continue;
            }
            assert_eq!(render(&data, &blue(), *variant, false, true), expected);
        }
    }

    #[test]
    fn test_falling_snow_renders_flakes_deterministically() {
        let data = default_resume().unwrap();
        let a = render(&data, &blue(), HeroVariant::FallingSnow, false, true);
        let b = render(&data, &blue(), HeroVariant::FallingSnow, false, true);
        assert_eq!(a, b);
        assert!(a.contains("hero-falling-snow"));
        assert!(a.matches("class=\"snowflake").count() > 40);
        assert!(a.contains("Mayank Saini"));
    }

    #[test]
    fn test_snow_uses_palette_colors() {
        let data = default_resume().unwrap();
        let html = render(&data, &blue(), HeroVariant::FallingSnow, false, true);
        let theme = blue();
        assert!(theme.particle_colors.iter().any(|c| html.contains(c)));
    }

    #[test]
    fn test_skill_chips_only_when_requested() {
        let mut data = default_resume().unwrap();
        data.skills = SkillsGrouped(vec![SkillCategory {
            name: "Languages".into(),
            items: (0..12).map(|i| format!("Lang{i}")).collect(),
        }]);
        let html = render(&data, &blue(), HeroVariant::Spotlight, true, true);
        assert_eq!(html.matches("skill-chip").count(), HERO_SKILL_LIMIT);
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, true);
        assert!(!html.contains("skill-chip"));
    }

    #[test]
    fn test_view_work_follows_projects_section() {
        let mut data = default_resume().unwrap();
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, false);
        assert!(!html.contains(r##"href="#projects""##));
        assert!(html.contains("Get in Touch"));

        data.personal_info.email = String::new();
        let html = render(&data, &blue(), HeroVariant::Spotlight, false, false);
        assert!(!html.contains("View Work"));
        assert!(!html.contains("flex gap-3 sm:gap-4 flex-wrap"));
    }

    #[test]
    fn test_snow_container_carries_emitter_settings() {
        let data = default_resume().unwrap();
        let theme = blue();
        let html = render(&data, &theme, HeroVariant::FallingSnow, false, true);
        assert!(html.contains(r#"data-snow-interval-ms="150""#));
        assert!(html.contains(&format!(r#"data-snow-colors="{}""#, theme.particle_colors.join(","))));
    }
}
