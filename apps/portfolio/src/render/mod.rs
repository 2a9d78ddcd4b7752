// Section renderers: (data slice, resolved theme, variant) -> HTML.
// Each section maps its declared variants to a presentation through an explicit
// match; variants without a presentation of their own use the section default.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod html;
pub mod page;
pub mod projects;
pub mod skills;

use thiserror::Error;

pub use page::{render_page, RenderContext};

/// A section had nothing to show. Recovered by omitting the section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section} section omitted: {reason}")]
pub struct MissingData {
    pub section: &'static str,
    pub reason: &'static str,
}

pub type SectionResult = Result<String, MissingData>;
