// Startup loading: the resume record and the section configuration.
// The two loaders are independent; they only meet at render time.

pub mod resume;
pub mod sections;

pub use resume::{data_gaps, default_resume, load_resume_file, DataGap};
pub use sections::{resolve_startup_config, ConfigOverrides, StartupSections, ValidationPolicy};

pub(crate) const DEFAULT_RESUME_JSON: &str = include_str!("../../data/portfolio.json");
pub(crate) const DEFAULT_SECTIONS_JSON: &str = include_str!("../../data/sections.json");
