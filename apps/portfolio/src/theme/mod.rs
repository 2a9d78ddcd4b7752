// Theme resolution: palette tag -> style-token bundle consumed by every renderer.
// Pure and recomputed per render; nothing here holds mutable state.

pub mod palette;
pub mod resolver;

pub use palette::ColorPalette;
pub use resolver::{resolve_palette_name, resolve_theme, ResolvedTheme};
