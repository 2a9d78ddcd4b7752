//! Palette → style tokens.
//!
//! Tokens are Tailwind utility fragments (`primary`, `gradient`, `border`) plus the
//! raw colors the decorative effects need (glow accent, spotlight, snowflakes).
//! The mapping is total over [`ColorPalette`]; untyped names go through
//! [`resolve_palette_name`], which rejects anything outside the enumeration.

use serde::Serialize;

use crate::errors::ConfigurationError;
use crate::models::Tag;
use crate::theme::palette::ColorPalette;

/// An RGB triple used for the spotlight radial gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `rgba(r, g, b, alpha)` CSS function.
    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// The style-token bundle derived from a palette. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    pub name: ColorPalette,
    /// Text/accent color class.
    pub primary: &'static str,
    /// Three-stop color ramp, used with `bg-gradient-to-*`.
    pub gradient: &'static str,
    /// Accent border class.
    pub border: &'static str,
    /// Glow and sparkle color.
    pub accent_hex: &'static str,
    pub spotlight_rgb: Rgb,
    /// Snowflake colors for the falling-snow hero.
    pub particle_colors: [&'static str; 6],
}

impl ResolvedTheme {
    /// The first gradient stop rewritten as a `via-` stop, for thin accent lines.
    pub fn via_stop(&self) -> String {
        self.gradient
            .split_whitespace()
            .next()
            .and_then(|stop| stop.strip_prefix("from-"))
            .map(|color| format!("via-{color}"))
            .unwrap_or_else(|| "via-white/20".to_string())
    }
}

const BLUE_FLAKES: [&str; 6] = ["#E0F4FF", "#B8E6FF", "#C9E9FF", "#93C5FD", "#FFFFFF", "#BFDBFE"];
const PURPLE_FLAKES: [&str; 6] = ["#F3E8FF", "#E9D5FF", "#D8B4FE", "#C4B5FD", "#FFFFFF", "#DDD6FE"];
const GREEN_FLAKES: [&str; 6] = ["#D1FAE5", "#A7F3D0", "#6EE7B7", "#99F6E4", "#FFFFFF", "#CCFBF1"];
const ROSE_FLAKES: [&str; 6] = ["#FFE4E6", "#FECDD3", "#FDA4AF", "#FB7185", "#FFFFFF", "#FFF1F2"];
const WARM_FLAKES: [&str; 6] = ["#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#FFFFFF", "#FFFBEB"];
const CYAN_FLAKES: [&str; 6] = ["#CFFAFE", "#A5F3FC", "#67E8F9", "#22D3EE", "#FFFFFF", "#ECFEFF"];
const INDIGO_FLAKES: [&str; 6] = ["#E0E7FF", "#C7D2FE", "#A5B4FC", "#818CF8", "#FFFFFF", "#EEF2FF"];
const SLATE_FLAKES: [&str; 6] = ["#F1F5F9", "#E2E8F0", "#CBD5E1", "#94A3B8", "#FFFFFF", "#F8FAFC"];

/// Resolves a palette to its token bundle. Pure: same input, same output.
pub fn resolve_theme(palette: ColorPalette) -> ResolvedTheme {
    match palette {
        ColorPalette::Blue => ResolvedTheme {
            name: palette,
            primary: "text-blue-400",
            gradient: "from-blue-500 via-sky-500 to-cyan-500",
            border: "border-blue-500/30",
            accent_hex: "#3b82f6",
            spotlight_rgb: Rgb(59, 130, 246),
            particle_colors: BLUE_FLAKES,
        },
        ColorPalette::Purple => ResolvedTheme {
            name: palette,
            primary: "text-purple-400",
            gradient: "from-purple-500 via-fuchsia-500 to-pink-500",
            border: "border-purple-500/30",
            accent_hex: "#a855f7",
            spotlight_rgb: Rgb(147, 51, 234),
            particle_colors: PURPLE_FLAKES,
        },
        ColorPalette::Emerald => ResolvedTheme {
            name: palette,
            primary: "text-emerald-400",
            gradient: "from-emerald-500 via-green-500 to-teal-500",
            border: "border-emerald-500/30",
            accent_hex: "#10b981",
            spotlight_rgb: Rgb(16, 185, 129),
            particle_colors: GREEN_FLAKES,
        },
        ColorPalette::Rose => ResolvedTheme {
            name: palette,
            primary: "text-rose-400",
            gradient: "from-rose-500 via-pink-500 to-red-500",
            border: "border-rose-500/30",
            accent_hex: "#f43f5e",
            spotlight_rgb: Rgb(244, 63, 94),
            particle_colors: ROSE_FLAKES,
        },
        ColorPalette::Amber => ResolvedTheme {
            name: palette,
            primary: "text-amber-400",
            gradient: "from-amber-500 via-yellow-500 to-orange-500",
            border: "border-amber-500/30",
            accent_hex: "#f59e0b",
            spotlight_rgb: Rgb(245, 158, 11),
            particle_colors: WARM_FLAKES,
        },
        ColorPalette::Slate => ResolvedTheme {
            name: palette,
            primary: "text-slate-300",
            gradient: "from-slate-500 via-gray-500 to-zinc-500",
            border: "border-slate-500/30",
            accent_hex: "#64748b",
            spotlight_rgb: Rgb(100, 116, 139),
            particle_colors: SLATE_FLAKES,
        },
        ColorPalette::Cyan => ResolvedTheme {
            name: palette,
            primary: "text-cyan-400",
            gradient: "from-cyan-500 via-sky-500 to-blue-500",
            border: "border-cyan-500/30",
            accent_hex: "#06b6d4",
            spotlight_rgb: Rgb(6, 182, 212),
            particle_colors: CYAN_FLAKES,
        },
        ColorPalette::Indigo => ResolvedTheme {
            name: palette,
            primary: "text-indigo-400",
            gradient: "from-indigo-500 via-violet-500 to-purple-500",
            border: "border-indigo-500/30",
            accent_hex: "#6366f1",
            spotlight_rgb: Rgb(99, 102, 241),
            particle_colors: INDIGO_FLAKES,
        },
        ColorPalette::Orange => ResolvedTheme {
            name: palette,
            primary: "text-orange-400",
            gradient: "from-orange-500 via-amber-500 to-red-500",
            border: "border-orange-500/30",
            accent_hex: "#f97316",
            spotlight_rgb: Rgb(249, 115, 22),
            particle_colors: WARM_FLAKES,
        },
        ColorPalette::Teal => ResolvedTheme {
            name: palette,
            primary: "text-teal-400",
            gradient: "from-teal-500 via-emerald-500 to-cyan-500",
            border: "border-teal-500/30",
            accent_hex: "#14b8a6",
            spotlight_rgb: Rgb(20, 184, 166),
            particle_colors: GREEN_FLAKES,
        },
    }
}

/// Resolves an untyped palette name (query string, hand-edited file).
///
/// Names outside the enumeration are rejected with a `ConfigurationError`;
/// there is no silent fallback here.
pub fn resolve_palette_name(name: &str) -> Result<ResolvedTheme, ConfigurationError> {
    ColorPalette::parse(name.trim())
        .map(resolve_theme)
        .ok_or_else(|| ConfigurationError::UnknownPalette(name.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_palette_resolves_to_non_empty_tokens() {
        for palette in ColorPalette::ALL {
            let t = resolve_theme(*palette);
            assert_eq!(t.name, *palette);
            assert!(!t.primary.is_empty());
            assert!(!t.gradient.is_empty());
            assert!(!t.border.is_empty());
            assert!(t.accent_hex.starts_with('#'));
        }
    }

    #[test]
    fn test_no_two_palettes_share_primary_and_gradient() {
        let pairs: HashSet<(&str, &str)> = ColorPalette::ALL
            .iter()
            .map(|p| {
                let t = resolve_theme(*p);
                (t.primary, t.gradient)
            })
            .collect();
        assert_eq!(pairs.len(), ColorPalette::ALL.len());
    }

    #[test]
    fn test_resolution_is_pure() {
        for palette in ColorPalette::ALL {
            assert_eq!(resolve_theme(*palette), resolve_theme(*palette));
        }
    }

    #[test]
    fn test_gradient_mentions_its_palette() {
        for palette in ColorPalette::ALL {
            let t = resolve_theme(*palette);
            assert!(
                t.gradient.starts_with(&format!("from-{}-", palette.as_str())),
                "{palette}: {}",
                t.gradient
            );
        }
    }

    #[test]
    fn test_resolve_name_accepts_known_palette() {
        let t = resolve_palette_name("rose").unwrap();
        assert_eq!(t.name, ColorPalette::Rose);
        assert_eq!(t.spotlight_rgb, Rgb(244, 63, 94));
    }

    #[test]
    fn test_resolve_name_rejects_unknown_palette() {
        let err = resolve_palette_name("magenta").unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownPalette("magenta".into()));
        assert!(err.to_string().contains("magenta"));
    }

    #[test]
    fn test_via_stop() {
        assert_eq!(resolve_theme(ColorPalette::Rose).via_stop(), "via-rose-500");
    }

    #[test]
    fn test_rgba() {
        assert_eq!(Rgb(1, 2, 3).rgba(0.15), "rgba(1, 2, 3, 0.15)");
    }
}
