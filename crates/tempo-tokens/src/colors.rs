//! Color palette.
//!
//! Dark, low-glare surfaces with a single green accent. Every base color is
//! a `#RRGGBB` string; tints append a fixed alpha byte for subtle fills.

use std::fmt;
use std::str::FromStr;

use constcat::concat;

use crate::error::TokenError;

// ── Backgrounds ──────────────────────────────────────────────────

pub const BACKGROUND: &str = "#0B0D10";
pub const SURFACE: &str = "#15181D";
pub const SURFACE_RAISED: &str = "#1F232A";

// ── Text ─────────────────────────────────────────────────────────

pub const TEXT_PRIMARY: &str = "#F5F7FA";
pub const TEXT_SECONDARY: &str = "#A3ABB8";
pub const TEXT_MUTED: &str = "#6B7380";

// ── Accent ───────────────────────────────────────────────────────

pub const ACCENT: &str = "#3DDC84";
pub const ACCENT_PRESSED: &str = "#2FB86C";

// ── State ────────────────────────────────────────────────────────

// Completed sets and PRs read as the accent.
pub const SUCCESS: &str = ACCENT;
pub const WARNING: &str = "#FFB020";
pub const ERROR: &str = "#FF5A5F";

// ── Borders ──────────────────────────────────────────────────────

pub const BORDER: &str = "#262B33";
pub const BORDER_STRONG: &str = "#3A414C";

// ── Tints ────────────────────────────────────────────────────────

/// Alpha byte appended to a base color to build a tint (0x26, ~15%).
pub const TINT_ALPHA: &str = "26";

pub const ACCENT_TINT: &str = concat!(ACCENT, TINT_ALPHA);
pub const WARNING_TINT: &str = concat!(WARNING, TINT_ALPHA);

/// Tint an arbitrary `#RRGGBB` color with [`TINT_ALPHA`].
pub fn tint(hex: &str) -> String {
    format!("{hex}{TINT_ALPHA}")
}

// ── Roles ────────────────────────────────────────────────────────

/// Semantic color roles, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Background,
    Surface,
    SurfaceRaised,
    TextPrimary,
    TextSecondary,
    TextMuted,
    Accent,
    AccentPressed,
    AccentTint,
    Success,
    Warning,
    WarningTint,
    Error,
    Border,
    BorderStrong,
}

impl ColorRole {
    pub const ALL: [ColorRole; 15] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::SurfaceRaised,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::Accent,
        ColorRole::AccentPressed,
        ColorRole::AccentTint,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::WarningTint,
        ColorRole::Error,
        ColorRole::Border,
        ColorRole::BorderStrong,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceRaised => "surface_raised",
            ColorRole::TextPrimary => "text_primary",
            ColorRole::TextSecondary => "text_secondary",
            ColorRole::TextMuted => "text_muted",
            ColorRole::Accent => "accent",
            ColorRole::AccentPressed => "accent_pressed",
            ColorRole::AccentTint => "accent_tint",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::WarningTint => "warning_tint",
            ColorRole::Error => "error",
            ColorRole::Border => "border",
            ColorRole::BorderStrong => "border_strong",
        }
    }

    pub const fn default_hex(self) -> &'static str {
        match self {
            ColorRole::Background => BACKGROUND,
            ColorRole::Surface => SURFACE,
            ColorRole::SurfaceRaised => SURFACE_RAISED,
            ColorRole::TextPrimary => TEXT_PRIMARY,
            ColorRole::TextSecondary => TEXT_SECONDARY,
            ColorRole::TextMuted => TEXT_MUTED,
            ColorRole::Accent => ACCENT,
            ColorRole::AccentPressed => ACCENT_PRESSED,
            ColorRole::AccentTint => ACCENT_TINT,
            ColorRole::Success => SUCCESS,
            ColorRole::Warning => WARNING,
            ColorRole::WarningTint => WARNING_TINT,
            ColorRole::Error => ERROR,
            ColorRole::Border => BORDER,
            ColorRole::BorderStrong => BORDER_STRONG,
        }
    }

    /// The base role a tint is derived from, if this role is a tint.
    pub const fn base(self) -> Option<ColorRole> {
        match self {
            ColorRole::AccentTint => Some(ColorRole::Accent),
            ColorRole::WarningTint => Some(ColorRole::Warning),
            _ => None,
        }
    }

    pub const fn is_derived(self) -> bool {
        self.base().is_some()
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| TokenError::UnknownRole(s.to_string()))
    }
}

// ── Hex parsing ──────────────────────────────────────────────────

/// A parsed `#RRGGBB` or `#RRGGBBAA` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Alpha as a 0.0..=1.0 fraction; opaque when absent.
    pub fn alpha(&self) -> f32 {
        self.a.map_or(1.0, |a| a as f32 / 255.0)
    }
}

impl FromStr for HexColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || TokenError::InvalidColor(s.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: Some(byte(6)?),
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tints_append_alpha() {
        assert_eq!(ACCENT_TINT, format!("{ACCENT}{TINT_ALPHA}"));
        assert_eq!(WARNING_TINT, format!("{WARNING}{TINT_ALPHA}"));
        assert_eq!(tint(ACCENT), ACCENT_TINT);
        assert_eq!(TINT_ALPHA.len(), 2);
    }

    #[test]
    fn test_role_equalities() {
        assert_eq!(SUCCESS, ACCENT);
        assert_ne!(WARNING, ERROR);
        assert_ne!(BACKGROUND, SURFACE);
        assert_ne!(SURFACE, SURFACE_RAISED);
    }

    #[test]
    fn test_base_colors_are_rgb() {
        for role in ColorRole::ALL.into_iter().filter(|r| !r.is_derived()) {
            let color: HexColor = role.default_hex().parse().unwrap();
            assert_eq!(color.a, None, "{role} should be opaque");
            assert_eq!(color.to_string(), role.default_hex());
        }
    }

    #[test]
    fn test_tints_parse_with_alpha() {
        for role in ColorRole::ALL.into_iter().filter(|r| r.is_derived()) {
            let color: HexColor = role.default_hex().parse().unwrap();
            assert_eq!(color.a, Some(0x26));
            let base = role.base().unwrap().default_hex();
            assert_eq!(role.default_hex(), tint(base));
        }
    }

    #[test]
    fn test_only_accent_success_share_value() {
        for (i, a) in ColorRole::ALL.iter().enumerate() {
            for b in &ColorRole::ALL[i + 1..] {
                if a.default_hex() == b.default_hex() {
                    assert_eq!((*a, *b), (ColorRole::Accent, ColorRole::Success));
                }
            }
        }
    }

    #[test]
    fn test_role_keys_roundtrip() {
        for role in ColorRole::ALL {
            assert_eq!(role.key().parse::<ColorRole>().unwrap(), role);
        }
        assert!(matches!(
            "accent_glow".parse::<ColorRole>(),
            Err(TokenError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!("#ff0080".parse::<HexColor>().unwrap(), HexColor::rgb(255, 0, 128));
        assert_eq!("FF008080".parse::<HexColor>().unwrap().a, Some(0x80));
        assert_eq!("#ff0080".parse::<HexColor>().unwrap().to_string(), "#FF0080");
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#gg0000".parse::<HexColor>().is_err());
        assert!("#ééé".parse::<HexColor>().is_err());
        assert!("#+f+f+f".parse::<HexColor>().is_err());
        assert!(("#FFFFFF".parse::<HexColor>().unwrap().alpha() - 1.0).abs() < f32::EPSILON);
    }
}
