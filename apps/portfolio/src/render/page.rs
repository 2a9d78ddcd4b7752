//! Full-page composition.
//!
//! Resolves the theme once per render pass, runs each section renderer
//! independently, and drops sections that report `MissingData`.

use tracing::debug;

use crate::models::resume::{present, ResumeData};
use crate::models::sections::{SectionConfig, SkillsDisplay};
use crate::render::html::escape;
use crate::render::{about, contact, experience, hero, projects, skills, SectionResult};
use crate::theme::resolve_theme;

/// Inputs to a render that are fixed per process rather than per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub copyright_year: i32,
}

impl RenderContext {
    pub fn current() -> Self {
        use chrono::Datelike;

        RenderContext {
            copyright_year: chrono::Utc::now().year(),
        }
    }
}

/// Nav anchors in page order.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Client-side counterpart of the interaction models: moves the spotlight,
/// reveals experience cards once, keeps the snow emitter running and types out
/// the about summary. Listeners, observers and timers are released on `pagehide`.
const PAGE_SCRIPT: &str = r#"(() => {
  const timers = [];
  const hero = document.querySelector('.hero');
  const spot = document.querySelector('.spotlight');
  const onMove = (e) => {
    const r = hero.getBoundingClientRect();
    const [cr, cg, cb] = spot.dataset.spotlightRgb.split(',');
    const x = e.clientX - r.left, y = e.clientY - r.top;
    spot.style.backgroundImage = `radial-gradient(circle at ${x}px ${y}px, rgba(${cr}, ${cg}, ${cb}, 0.15) 0%, rgba(${cr}, ${cg}, ${cb}, 0.05) 200px, transparent 350px)`;
  };
  if (hero && spot) hero.addEventListener('mousemove', onMove);
  const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
      if (!entry.isIntersecting) return;
      entry.target.classList.remove('opacity-0', 'translate-y-12');
      entry.target.classList.add('opacity-100', 'translate-y-0');
      observer.unobserve(entry.target);
    });
  }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
  document.querySelectorAll('[data-reveal-index]').forEach((el) => observer.observe(el));
  const snow = document.querySelector('.snow[data-snow-interval-ms]');
  if (snow) {
    const colors = snow.dataset.snowColors.split(',');
    const pick = (xs) => xs[Math.floor(Math.random() * xs.length)];
    const settle = (el) => el.addEventListener('animationend', () => el.remove(), { once: true });
    snow.querySelectorAll('.snowflake').forEach(settle);
    const addFlake = () => {
      const size = pick([12, 16, 20, 24]);
      const flake = document.createElementNS('http://www.w3.org/2000/svg', 'svg');
      flake.setAttribute('class', 'snowflake absolute');
      flake.setAttribute('width', size);
      flake.setAttribute('height', size);
      flake.setAttribute('viewBox', '0 0 24 24');
      flake.setAttribute('fill', 'none');
      flake.setAttribute('stroke', pick(colors));
      flake.setAttribute('stroke-width', '2');
      flake.setAttribute('stroke-linecap', 'round');
      flake.style.left = `${Math.random() * 100}%`;
      flake.style.opacity = pick([0.6, 0.7, 0.8, 0.9, 1]);
      flake.style.setProperty('--drift', `${(Math.random() - 0.5) * 50}%`);
      flake.style.animation = `snow-fall ${8 + Math.random() * 4}s linear forwards`;
      flake.innerHTML = '<path d="M12 2v20M2 12h20M6 6l12 12M6 18L18 6"/>';
      settle(flake);
      snow.appendChild(flake);
    };
    timers.push(setInterval(addFlake, Number(snow.dataset.snowIntervalMs)));
  }
  document.querySelectorAll('.typewriter[data-type-delay]').forEach((el) => {
    const text = el.textContent;
    let shown = 0;
    el.textContent = '';
    const timer = setInterval(() => {
      shown += 1;
      el.textContent = text.slice(0, shown);
      if (shown >= text.length) clearInterval(timer);
    }, Number(el.dataset.typeDelay));
    timers.push(timer);
  });
  window.addEventListener('pagehide', () => {
    if (hero) hero.removeEventListener('mousemove', onMove);
    observer.disconnect();
    timers.forEach(clearInterval);
  });
})();"#;

const PAGE_STYLE: &str = r#"@keyframes snow-fall {
  from { top: -5%; transform: translateX(0) rotate(0deg); }
  to { top: 105%; transform: translateX(var(--drift)) rotate(720deg); opacity: 0; }
}"#;

fn collect(section: &'static str, result: SectionResult, body: &mut String, rendered: &mut Vec<&'static str>) {
    match result {
        Ok(html) => {
            body.push_str(&html);
            rendered.push(section);
        }
        Err(missing) => debug!("{missing}"),
    }
}

fn nav(name: &str, rendered: &[&str]) -> String {
    let links: String = NAV_SECTIONS
        .iter()
        .filter(|(id, _)| rendered.contains(id))
        .map(|(id, label)| {
            format!(r##"<a href="#{id}" class="text-sm text-slate-300 hover:text-white">{label}</a>"##)
        })
        .collect();
    format!(
        r##"<nav class="fixed top-0 inset-x-0 z-50 flex items-center justify-between px-6 py-4 bg-slate-950/70 backdrop-blur"><a href="#home" class="font-bold text-white">{}</a><div class="flex gap-6">{links}</div></nav>
"##,
        escape(name)
    )
}

/// Renders the whole document. Identical inputs give identical output.
pub fn render_page(data: &ResumeData, config: &SectionConfig, ctx: &RenderContext) -> String {
    let theme = resolve_theme(config.color_palette);
    let info = &data.personal_info;
    let skills_in_hero = config.skills_display == SkillsDisplay::Hero;

    let mut sections = String::new();
    let mut rendered = Vec::new();

    collect("about", about::render(data, &theme, config.about), &mut sections, &mut rendered);
    if !skills_in_hero {
        collect("skills", skills::render(data, &theme, config.skills), &mut sections, &mut rendered);
    }
    collect(
        "experience",
        experience::render(data, &theme, config.experience),
        &mut sections,
        &mut rendered,
    );
    collect("projects", projects::render(data, &theme, config.projects), &mut sections, &mut rendered);
    collect(
        "contact",
        contact::render(data, &theme, config.contact, ctx.copyright_year),
        &mut sections,
        &mut rendered,
    );

    let link_projects = rendered.contains(&"projects");
    let body = hero::render(data, &theme, config.hero, skills_in_hero, link_projects) + &sections;

    let title = match present(&info.title) {
        Some(title) => format!("{} | {}", escape(&info.name), escape(title)),
        None => escape(&info.name),
    };
    let description = escape(present(&info.summary).unwrap_or_default());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="theme-palette" content="{palette}">
<script src="https://cdn.tailwindcss.com"></script>
<style>{style}</style>
</head>
<body class="bg-slate-950 antialiased">
{nav}<main>
{body}</main>
<script>{script}</script>
</body>
</html>
"#,
        palette = theme.name,
        style = PAGE_STYLE,
        nav = nav(&info.name, &rendered),
        script = PAGE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::default_resume;
    use crate::models::resume::{SkillCategory, SkillsGrouped};
    use crate::models::sections::default_section_config;
    use crate::theme::ColorPalette;

    const CTX: RenderContext = RenderContext { copyright_year: 2026 };

    #[test]
    fn test_default_page_has_anchor_sections() {
        let page = render_page(&default_resume().unwrap(), &default_section_config(), &CTX);
        for id in ["home", "about", "experience", "projects", "contact"] {
            assert!(page.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert!(page.contains(r#"<meta name="theme-palette" content="rose">"#));
        assert!(page.contains("<title>Mayank Saini | Professional</title>"));
    }

    #[test]
    fn test_empty_skills_section_is_omitted_with_its_nav_link() {
        let page = render_page(&default_resume().unwrap(), &default_section_config(), &CTX);
        assert!(!page.contains(r#"id="skills""#));
        assert!(!page.contains(r##"href="#skills""##));
        assert!(page.contains(r##"href="#experience""##));
    }

    #[test]
    fn test_skills_in_hero_replace_section() {
        let mut data = default_resume().unwrap();
        data.skills = SkillsGrouped(vec![SkillCategory {
            name: "Languages".into(),
            items: vec!["Rust".into(), "TypeScript".into()],
        }]);
        let mut config = default_section_config();

        let page = render_page(&data, &config, &CTX);
        assert!(page.contains(r#"id="skills""#));
        assert!(!page.contains("skill-chip"));

        config.skills_display = SkillsDisplay::Hero;
        let page = render_page(&data, &config, &CTX);
        assert!(!page.contains(r#"id="skills""#));
        assert_eq!(page.matches("skill-chip").count(), 2);
    }

    #[test]
    fn test_palette_flows_into_every_section() {
        let mut config = default_section_config();
        config.color_palette = ColorPalette::Emerald;
        let page = render_page(&default_resume().unwrap(), &config, &CTX);
        assert!(page.contains("from-emerald-500"));
        assert!(!page.contains("from-rose-500"));
    }

    #[test]
    fn test_missing_sections_are_dropped() {
        let mut data = default_resume().unwrap();
        data.experience.clear();
        data.projects.clear();
        let page = render_page(&data, &default_section_config(), &CTX);
        assert!(!page.contains(r#"id="experience""#));
        assert!(!page.contains(r#"id="projects""#));
        assert!(page.contains(r#"id="contact""#));
    }

    #[test]
    fn test_view_work_link_dropped_with_projects() {
        let mut data = default_resume().unwrap();
        let page = render_page(&data, &default_section_config(), &CTX);
        assert!(page.contains(r##"href="#projects""##));

        data.projects.clear();
        let page = render_page(&data, &default_section_config(), &CTX);
        assert!(!page.contains(r#"id="projects""#));
        assert!(!page.contains(r##"href="#projects""##));
        assert!(!page.contains("View Work"));
    }

    #[test]
    fn test_falling_snow_page_runs_and_stops_emitter() {
        let mut config = default_section_config();
        config.hero = crate::models::sections::HeroVariant::FallingSnow;
        let page = render_page(&default_resume().unwrap(), &config, &CTX);
        assert!(page.contains(r#"data-snow-interval-ms="150""#));
        assert!(page.contains("snow.dataset.snowIntervalMs"));
        assert!(page.contains("setInterval(addFlake"));
        assert!(page.contains("'animationend', () => el.remove()"));
        assert!(page.contains("timers.forEach(clearInterval)"));
    }

    #[test]
    fn test_typewriter_marker_is_driven_by_script() {
        let page = render_page(&default_resume().unwrap(), &default_section_config(), &CTX);
        assert!(page.contains(r#"data-type-delay="5""#));
        assert!(page.contains("el.dataset.typeDelay"));
        assert!(!page.contains("reveal-on-scroll"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = default_resume().unwrap();
        let mut config = default_section_config();
        config.hero = crate::models::sections::HeroVariant::FallingSnow;
        assert_eq!(render_page(&data, &config, &CTX), render_page(&data, &config, &CTX));
    }
}
