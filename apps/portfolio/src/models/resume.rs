use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The single resume record a portfolio is rendered from.
///
/// Loaded once at startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: SkillsGrouped,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
}

/// Contact and headline details. An empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    /// Free-text range, rendered verbatim.
    pub dates: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub years: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// One named skill category, e.g. `"Frontend" -> ["React", "Vue"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Skills grouped by category name.
///
/// Categories are dynamic keys taken from the resume content. On the wire this is
/// a JSON object; the author's key order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsGrouped(pub Vec<SkillCategory>);

impl SkillsGrouped {
    /// Categories that have at least one non-blank skill.
    pub fn non_empty(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0
            .iter()
            .filter(|c| c.items.iter().any(|s| present(s).is_some()))
    }

    /// Every non-blank skill name in category order.
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|c| c.items.iter())
            .filter_map(|s| present(s))
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }
}

impl Serialize for SkillsGrouped {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillsGrouped {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedSkills;

        impl<'de> Visitor<'de> for OrderedSkills {
            type Value = SkillsGrouped;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category names to lists of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories: Vec<SkillCategory> = Vec::new();
                while let Some((name, items)) = access.next_entry::<String, Vec<String>>()? {
                    // A repeated key replaces the earlier list but keeps its position.
                    match categories.iter_mut().find(|c| c.name == name) {
                        Some(existing) => existing.items = items,
                        None => categories.push(SkillCategory { name, items }),
                    }
                }
                Ok(SkillsGrouped(categories))
            }
        }

        deserializer.deserialize_map(OrderedSkills)
    }
}

/// Returns the trimmed value, or `None` when the field is blank.
pub fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Same as [`present`] for the optional URL fields.
pub fn present_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(present)
}
