use std::path::Path;

use serde::Serialize;

use crate::errors::ResumeLoadError;
use crate::models::resume::{present, present_opt, ResumeData};

/// Parses a resume record from JSON.
pub fn load_resume_str(json: &str) -> Result<ResumeData, ResumeLoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_resume_file(path: &Path) -> Result<ResumeData, ResumeLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| ResumeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_resume_str(&json)
}

/// The resume record bundled with the binary.
pub fn default_resume() -> Result<ResumeData, ResumeLoadError> {
    load_resume_str(super::DEFAULT_RESUME_JSON)
}

/// A blank or empty slice of the resume that renderers will omit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataGap {
    pub section: String,
    pub detail: String,
}

impl DataGap {
    fn new(section: &str, detail: impl Into<String>) -> Self {
        DataGap {
            section: section.to_string(),
            detail: detail.into(),
        }
    }
}

fn is_web_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Lists everything the page will degrade around: blank contact fields, empty
/// sequences, entries without highlights, and link fields that are not web URLs.
///
/// Advisory only; rendering never fails because of a gap.
pub fn data_gaps(data: &ResumeData) -> Vec<DataGap> {
    let mut gaps = Vec::new();
    let info = &data.personal_info;

    for (field, value) in [
        ("name", &info.name),
        ("title", &info.title),
        ("summary", &info.summary),
        ("email", &info.email),
        ("phone", &info.phone),
        ("linkedin", &info.linkedin),
        ("github", &info.github),
        ("location", &info.location),
    ] {
        if present(value).is_none() {
            gaps.push(DataGap::new("personalInfo", format!("{field} is blank")));
        }
    }
    for (field, value) in [("linkedin", &info.linkedin), ("github", &info.github)] {
        if let Some(url) = present(value) {
            if !is_web_url(url) {
                gaps.push(DataGap::new(
                    "personalInfo",
                    format!("{field} '{url}' is not an http(s) URL"),
                ));
            }
        }
    }

    if data.experience.is_empty() {
        gaps.push(DataGap::new("experience", "no entries"));
    }
    for (i, item) in data.experience.iter().enumerate() {
        if item.highlights.iter().all(|h| present(h).is_none()) {
            gaps.push(DataGap::new(
                "experience",
                format!("entry {} ({}) has no highlights", i + 1, item.company),
            ));
        }
    }

    if data.education.is_empty() {
        gaps.push(DataGap::new("education", "no entries"));
    }

    if data.skills.is_empty() {
        gaps.push(DataGap::new("skills", "no category has any skills"));
    }

    if data.projects.is_empty() {
        gaps.push(DataGap::new("projects", "no entries"));
    }
    for project in &data.projects {
        for (field, value) in [("link", present(&project.link)), ("github", present_opt(&project.github))] {
            if let Some(url) = value {
                if !is_web_url(url) {
                    gaps.push(DataGap::new(
                        "projects",
                        format!("{} {field} '{url}' is not an http(s) URL", project.name),
                    ));
                }
            }
        }
    }

    gaps
}
