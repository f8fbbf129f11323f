//! Resolved token snapshot for one platform.
//!
//! The constant tables stay the source of truth. A `DesignTokens` value is
//! what gets handed to exporters and to non-Rust consumers: owned strings,
//! the mono family resolved to a concrete name, and any config color
//! overrides applied.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::animation::{Animation, AnimationPreset};
use crate::colors::{tint, ColorRole, HexColor};
use crate::error::TokenError;
use crate::layout::LayoutTokens;
use crate::opacity::OpacityLevel;
use crate::platform::Platform;
use crate::spacing::SpacingToken;
use crate::typography::{FontWeight, TextRole};

/// A text style with its font family resolved for a platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub line_height: f32,
    pub letter_spacing: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokens {
    pub platform: Platform,
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, ResolvedTextStyle>,
    pub spacing: BTreeMap<String, f32>,
    pub layout: LayoutTokens,
    pub opacity: BTreeMap<String, f32>,
    pub animation: BTreeMap<String, Animation>,
}

impl DesignTokens {
    /// Built-in tokens for `platform`, no overrides.
    pub fn resolve(platform: Platform) -> Self {
        let colors = ColorRole::ALL
            .into_iter()
            .map(|r| (r.key().to_string(), r.default_hex().to_string()))
            .collect();

        let typography = TextRole::ALL
            .into_iter()
            .map(|r| {
                let style = r.style();
                let resolved = ResolvedTextStyle {
                    size: style.size,
                    weight: style.weight,
                    line_height: style.line_height,
                    letter_spacing: style.letter_spacing,
                    font_family: style.family_name(platform).map(str::to_string),
                };
                (r.key().to_string(), resolved)
            })
            .collect();

        let spacing = SpacingToken::ALL
            .into_iter()
            .map(|t| (t.key().to_string(), t.value()))
            .collect();

        let opacity = OpacityLevel::ALL
            .into_iter()
            .map(|l| (l.key().to_string(), l.value()))
            .collect();

        let animation = AnimationPreset::ALL
            .into_iter()
            .map(|p| (p.key().to_string(), p.animation()))
            .collect();

        Self {
            platform,
            colors,
            typography,
            spacing,
            layout: LayoutTokens::DEFAULT,
            opacity,
            animation,
        }
    }

    /// Built-in tokens with color overrides (`role key -> #RRGGBB`).
    ///
    /// Tints are re-derived from the final base colors. Overriding `accent`
    /// also moves `success`. The result must keep `success == accent` and
    /// `warning != error`.
    pub fn with_overrides(
        platform: Platform,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, TokenError> {
        let mut tokens = Self::resolve(platform);

        let mut parsed = BTreeMap::new();
        for (key, value) in overrides {
            let role: ColorRole = key.parse()?;
            if role.is_derived() {
                return Err(TokenError::DerivedRole(key.clone()));
            }
            let color: HexColor = value.parse()?;
            if color.a.is_some() {
                return Err(TokenError::InvalidColor(value.clone()));
            }
            parsed.insert(role, color.to_string());
        }

        if let Some(accent) = parsed.get(&ColorRole::Accent).cloned() {
            parsed.entry(ColorRole::Success).or_insert(accent);
        }

        for (role, hex) in parsed {
            tracing::debug!(role = role.key(), %hex, "color override");
            tokens.colors.insert(role.key().to_string(), hex);
        }

        if tokens.color(ColorRole::Success) != tokens.color(ColorRole::Accent) {
            return Err(TokenError::Invariant(format!(
                "success {} must match accent {}",
                tokens.color(ColorRole::Success),
                tokens.color(ColorRole::Accent)
            )));
        }
        if tokens.color(ColorRole::Warning) == tokens.color(ColorRole::Error) {
            return Err(TokenError::Invariant(format!(
                "warning and error are both {}",
                tokens.color(ColorRole::Error)
            )));
        }

        for role in ColorRole::ALL {
            if let Some(base) = role.base() {
                let derived = tint(tokens.color(base));
                tokens.colors.insert(role.key().to_string(), derived);
            }
        }

        Ok(tokens)
    }

    /// Hex string for a role. Every role is always present.
    pub fn color(&self, role: ColorRole) -> &str {
        self.colors
            .get(role.key())
            .map(String::as_str)
            .unwrap_or_else(|| role.default_hex())
    }
}
