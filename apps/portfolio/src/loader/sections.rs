//! Section configuration loading.
//!
//! Raw configuration is untyped JSON (a hand-edited file or query overrides). Every
//! field is checked against its closed enumeration in one pass, so a strict load
//! reports all invalid fields together. A lenient load substitutes the default for
//! each bad field and logs it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::{ConfigurationError, FieldError};
use crate::models::sections::{default_section_config, SectionConfig};
use crate::models::template::find_template;
use crate::models::Tag;
use crate::theme::ColorPalette;

/// What to do with an invalid or missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Fail with every invalid field listed.
    #[default]
    Strict,
    /// Replace each invalid field with its default and carry on.
    Lenient,
}

impl ValidationPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(ValidationPolicy::Strict),
            "lenient" => Some(ValidationPolicy::Lenient),
            _ => None,
        }
    }
}

/// Reads one tagged field, recording a `FieldError` when it is missing or invalid.
fn read_field<T: Tag>(
    raw: &Map<String, Value>,
    key: &'static str,
    fallback: T,
    errors: &mut Vec<FieldError>,
) -> T {
    let value = match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            if let Some(tag) = T::parse(s.trim()) {
                return tag;
            }
            Some(s.clone())
        }
        Some(other) => Some(other.to_string()),
    };

    errors.push(FieldError {
        field: key,
        value,
        expected: T::expected(),
    });
    fallback
}

/// Validates a raw section configuration.
pub fn load_config(raw: &Value, policy: ValidationPolicy) -> Result<SectionConfig, ConfigurationError> {
    let defaults = default_section_config();

    let Some(obj) = raw.as_object() else {
        return match policy {
            ValidationPolicy::Strict => Err(ConfigurationError::NotAnObject),
            ValidationPolicy::Lenient => {
                warn!("Section configuration is not an object, using defaults");
                Ok(defaults)
            }
        };
    };

    let mut errors = Vec::new();
    let config = SectionConfig {
        hero: read_field(obj, "hero", defaults.hero, &mut errors),
        about: read_field(obj, "about", defaults.about, &mut errors),
        experience: read_field(obj, "experience", defaults.experience, &mut errors),
        projects: read_field(obj, "projects", defaults.projects, &mut errors),
        skills: read_field(obj, "skills", defaults.skills, &mut errors),
        skills_display: read_field(obj, "skillsDisplay", defaults.skills_display, &mut errors),
        contact: read_field(obj, "contact", defaults.contact, &mut errors),
        color_palette: read_field(obj, "colorPalette", defaults.color_palette, &mut errors),
    };

    if errors.is_empty() {
        return Ok(config);
    }

    match policy {
        ValidationPolicy::Strict => Err(ConfigurationError::InvalidFields(errors)),
        ValidationPolicy::Lenient => {
            for e in &errors {
                warn!("Substituting default for section config field: {e}");
            }
            Ok(config)
        }
    }
}

/// Parses and validates a JSON document holding a section configuration.
pub fn load_config_str(json: &str, policy: ValidationPolicy) -> Result<SectionConfig, ConfigurationError> {
    let raw: Value =
        serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
    load_config(&raw, policy)
}

pub fn load_config_file(path: &Path, policy: ValidationPolicy) -> anyhow::Result<SectionConfig> {
    use anyhow::Context;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read section config {}", path.display()))?;
    Ok(load_config_str(&json, policy)?)
}

/// Builds a configuration from a named template and a caller-chosen palette.
pub fn apply_template(template_id: &str, palette: ColorPalette) -> Result<SectionConfig, ConfigurationError> {
    Ok(find_template(template_id)?.with_palette(palette))
}

/// Turns a configuration back into the raw object form `load_config` accepts.
pub fn to_raw(config: &SectionConfig) -> Map<String, Value> {
    match serde_json::to_value(config) {
        Ok(Value::Object(map)) => map,
        // SectionConfig always serializes to an object.
        _ => Map::new(),
    }
}

/// Untyped overrides layered over a base configuration, e.g. from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub template: Option<String>,
    pub palette: Option<String>,
    pub hero: Option<String>,
    pub about: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub skills: Option<String>,
    pub skills_display: Option<String>,
    pub contact: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.template.is_none()
            && self.palette.is_none()
            && self.hero.is_none()
            && self.about.is_none()
            && self.experience.is_none()
            && self.projects.is_none()
            && self.skills.is_none()
            && self.skills_display.is_none()
            && self.contact.is_none()
    }

    /// Applies the overrides to `base` and validates the result strictly.
    ///
    /// A template replaces the base variants first (keeping the base palette);
    /// individual fields then win over both.
    pub fn apply(&self, base: &SectionConfig) -> Result<SectionConfig, ConfigurationError> {
        let mut problems = Vec::new();

        let start = match self.template.as_deref() {
            Some(id) => match find_template(id) {
                Ok(t) => t.with_palette(base.color_palette),
                Err(e) => {
                    problems.push(FieldError {
                        field: "template",
                        value: Some(id.to_string()),
                        expected: crate::models::template::TemplateId::expected(),
                    });
                    tracing::debug!("{e}");
                    *base
                }
            },
            None => *base,
        };

        let mut raw = to_raw(&start);
        let fields = [
            ("colorPalette", &self.palette),
            ("hero", &self.hero),
            ("about", &self.about),
            ("experience", &self.experience),
            ("projects", &self.projects),
            ("skills", &self.skills),
            ("skillsDisplay", &self.skills_display),
            ("contact", &self.contact),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                raw.insert(key.to_string(), Value::String(v.clone()));
            }
        }

        match load_config(&Value::Object(raw), ValidationPolicy::Strict) {
            Ok(config) if problems.is_empty() => Ok(config),
            Ok(_) => Err(ConfigurationError::InvalidFields(problems)),
            Err(ConfigurationError::InvalidFields(mut rest)) => {
                problems.append(&mut rest);
                Err(ConfigurationError::InvalidFields(problems))
            }
            Err(e) => Err(e),
        }
    }
}

/// Where the startup section configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct StartupSections<'a> {
    pub template: Option<&'a str>,
    pub palette: Option<&'a str>,
    pub path: Option<&'a Path>,
    pub policy: ValidationPolicy,
}

/// Picks the startup configuration: template + palette, else a config file,
/// else the embedded default. A template and a config file are mutually exclusive.
pub fn resolve_startup_config(source: &StartupSections<'_>) -> anyhow::Result<SectionConfig> {
    if let Some(template_id) = source.template {
        if let Some(path) = source.path {
            anyhow::bail!(
                "PORTFOLIO_TEMPLATE ('{template_id}') and PORTFOLIO_SECTIONS_PATH ({}) cannot both be set",
                path.display()
            );
        }
        if source.policy != ValidationPolicy::default() {
            warn!("Validation policy {:?} has no effect on template '{template_id}'", source.policy);
        }
        let palette = match source.palette {
            Some(name) => ColorPalette::parse(name.trim())
                .ok_or_else(|| ConfigurationError::UnknownPalette(name.to_string()))?,
            None => default_section_config().color_palette,
        };
        let config = apply_template(template_id, palette)?;
        info!("Section config from template '{template_id}' with palette {palette}");
        return Ok(config);
    }

    let mut config = match source.path {
        Some(path) => {
            let config = load_config_file(path, source.policy)?;
            info!("Section config loaded from {}", path.display());
            config
        }
        None => load_config_str(super::DEFAULT_SECTIONS_JSON, source.policy)?,
    };

    if let Some(name) = source.palette {
        config.color_palette = ColorPalette::parse(name.trim())
            .ok_or_else(|| ConfigurationError::UnknownPalette(name.to_string()))?;
    }

    Ok(config)
}
