//! Per-section variant tags and the section configuration record.
//!
//! Every section carries exactly one variant. Only some variants have a dedicated
//! presentation; the renderers map the rest to their section default.

use serde::{Deserialize, Serialize};

use crate::theme::ColorPalette;

tag_enum!(
    /// Hero banner presentation.
    HeroVariant {
        InteractiveBoxes => "interactive-boxes",
        Spotlight => "spotlight",
        ShinyText => "shiny-text",
        FloatingShapes => "floating-shapes",
        AnimatedBorder => "animated-border",
        FallingSnow => "falling-snow",
    }
);

tag_enum!(
    AboutVariant {
        Simple => "simple",
        Split => "split",
        Modern => "modern",
        Cards => "cards",
    }
);

tag_enum!(
    ExperienceVariant {
        Cards => "cards",
        List => "list",
        Accordion => "accordion",
        Detailed => "detailed",
        Timeline => "timeline",
        Chain => "chain",
    }
);

tag_enum!(
    ProjectsVariant {
        Grid => "grid",
        Carousel => "carousel",
        Masonry => "masonry",
        Featured => "featured",
        Minimal => "minimal",
        Showcase => "showcase",
    }
);

tag_enum!(
    SkillsVariant {
        Bars => "bars",
        Tags => "tags",
        Circular => "circular",
        Categories => "categories",
        Grid => "grid",
        Minimal => "minimal",
    }
);

tag_enum!(
    ContactVariant {
        Simple => "simple",
        Split => "split",
        Card => "card",
        Floating => "floating",
        Minimal => "minimal",
        Modern => "modern",
    }
);

tag_enum!(
    /// Where skills are shown: as chips inside the hero, or as their own section.
    SkillsDisplay {
        Hero => "hero",
        Separate => "separate",
    }
);

/// Per-section variant choices without a palette. This is what a template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVariants {
    pub hero: HeroVariant,
    pub about: AboutVariant,
    pub experience: ExperienceVariant,
    pub projects: ProjectsVariant,
    pub skills: SkillsVariant,
    pub skills_display: SkillsDisplay,
    pub contact: ContactVariant,
}

impl SectionVariants {
    pub fn with_palette(self, color_palette: ColorPalette) -> SectionConfig {
        SectionConfig {
            hero: self.hero,
            about: self.about,
            experience: self.experience,
            projects: self.projects,
            skills: self.skills,
            skills_display: self.skills_display,
            contact: self.contact,
            color_palette,
        }
    }
}

/// The full rendering configuration: one variant per section plus the global palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub hero: HeroVariant,
    pub about: AboutVariant,
    pub experience: ExperienceVariant,
    pub projects: ProjectsVariant,
    pub skills: SkillsVariant,
    pub skills_display: SkillsDisplay,
    pub contact: ContactVariant,
    pub color_palette: ColorPalette,
}

impl SectionConfig {
    pub fn variants(&self) -> SectionVariants {
        SectionVariants {
            hero: self.hero,
            about: self.about,
            experience: self.experience,
            projects: self.projects,
            skills: self.skills,
            skills_display: self.skills_display,
            contact: self.contact,
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        default_section_config()
    }
}

pub const DEFAULT_VARIANTS: SectionVariants = SectionVariants {
    hero: HeroVariant::Spotlight,
    about: AboutVariant::Split,
    experience: ExperienceVariant::Cards,
    projects: ProjectsVariant::Featured,
    skills: SkillsVariant::Tags,
    skills_display: SkillsDisplay::Separate,
    contact: ContactVariant::Floating,
};

pub const DEFAULT_PALETTE: ColorPalette = ColorPalette::Rose;

/// The documented fallback used for missing or invalid fields in lenient loading.
pub fn default_section_config() -> SectionConfig {
    DEFAULT_VARIANTS.with_palette(DEFAULT_PALETTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let c = default_section_config();
        assert_eq!(c.hero, HeroVariant::Spotlight);
        assert_eq!(c.about, AboutVariant::Split);
        assert_eq!(c.experience, ExperienceVariant::Cards);
        assert_eq!(c.projects, ProjectsVariant::Featured);
        assert_eq!(c.skills, SkillsVariant::Tags);
        assert_eq!(c.skills_display, SkillsDisplay::Separate);
        assert_eq!(c.contact, ContactVariant::Floating);
        assert_eq!(c.color_palette, ColorPalette::Rose);
    }

    #[test]
    fn test_serializes_with_camel_case_keys_and_kebab_tags() {
        let json = serde_json::to_value(default_section_config()).unwrap();
        assert_eq!(json["skillsDisplay"], "separate");
        assert_eq!(json["colorPalette"], "rose");
        assert_eq!(json["hero"], "spotlight");
    }

    #[test]
    fn test_hero_tags_parse() {
        assert_eq!(HeroVariant::parse("falling-snow"), Some(HeroVariant::FallingSnow));
        assert_eq!(HeroVariant::parse("interactive-boxes"), Some(HeroVariant::InteractiveBoxes));
        assert_eq!(HeroVariant::parse("Spotlight"), None);
        assert_eq!(HeroVariant::ALL.len(), 6);
    }

    #[test]
    fn test_variants_round_trip_through_palette() {
        let c = default_section_config();
        assert_eq!(c.variants().with_palette(c.color_palette), c);
    }
}
