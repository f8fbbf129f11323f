//! Serialize a token snapshot for consumers outside Rust.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::error::TokenError;
use crate::snapshot::DesignTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
    Css,
}

impl ExportFormat {
    pub const fn key(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
            ExportFormat::Css => "css",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "toml" => Ok(ExportFormat::Toml),
            "css" => Ok(ExportFormat::Css),
            other => Err(TokenError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render `tokens` in `format`. `css_prefix` only affects CSS output.
pub fn render(
    tokens: &DesignTokens,
    format: ExportFormat,
    css_prefix: &str,
) -> Result<String, TokenError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(tokens).map_err(|e| TokenError::Serialize(e.to_string()))
        }
        ExportFormat::Toml => {
            toml::to_string_pretty(tokens).map_err(|e| TokenError::Serialize(e.to_string()))
        }
        ExportFormat::Css => Ok(css_variables(tokens, css_prefix)),
    }
}

/// Render `tokens` as a `:root` block of CSS custom properties.
pub fn css_variables(tokens: &DesignTokens, prefix: &str) -> String {
    let mut css = CssWriter::new(prefix);

    for (role, hex) in &tokens.colors {
        css.var(&["color", role.as_str()], hex);
    }
    for (token, value) in &tokens.spacing {
        css.var(&["space", token.as_str()], px(*value));
    }
    for (name, value) in tokens.layout.entries() {
        css.var(&["layout", name], px(value));
    }
    for (level, value) in &tokens.opacity {
        css.var(&["opacity", level.as_str()], value);
    }
    for (role, style) in &tokens.typography {
        css.var(&["font", role.as_str(), "size"], px(style.size));
        css.var(&["font", role.as_str(), "weight"], style.weight.value());
        css.var(&["font", role.as_str(), "line_height"], px(style.line_height));
        css.var(&["font", role.as_str(), "letter_spacing"], px(style.letter_spacing));
        if let Some(family) = &style.font_family {
            css.var(&["font", role.as_str(), "family"], family);
        }
    }
    for (preset, animation) in &tokens.animation {
        if let Animation::Timing { duration_ms } = animation {
            css.var(&["motion", preset.as_str(), "duration"], format!("{duration_ms}ms"));
        }
    }

    css.finish()
}

fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

struct CssWriter<'a> {
    prefix: &'a str,
    out: String,
}

impl<'a> CssWriter<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            out: String::from(":root {\n"),
        }
    }

    fn var(&mut self, parts: &[&str], value: impl fmt::Display) {
        self.out.push_str("  --");
        if !self.prefix.is_empty() {
            self.out.push_str(self.prefix);
            self.out.push('-');
        }
        let name = parts.join("-").replace('_', "-");
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, "{name}: {value};");
    }

    fn finish(mut self) -> String {
        self.out.push_str("}\n");
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_css_contains_expected_vars() {
        let tokens = DesignTokens::resolve(Platform::Ios);
        let css = css_variables(&tokens, "tempo");
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --tempo-color-accent: #3DDC84;\n"));
        assert!(css.contains("  --tempo-color-accent-tint: #3DDC8426;\n"));
        assert!(css.contains("  --tempo-space-md: 16px;\n"));
        assert!(css.contains("  --tempo-layout-min-tap-target: 44px;\n"));
        assert!(css.contains("  --tempo-opacity-disabled: 0.4;\n"));
        assert!(css.contains("  --tempo-font-timer-family: Menlo;\n"));
        assert!(css.contains("  --tempo-font-h3-letter-spacing: 0;\n"));
        assert!(css.contains("  --tempo-motion-fade-duration: 180ms;\n"));
        assert!(!css.contains("font-body-family"));
        assert!(!css.contains("motion-press"));
    }

    #[test]
    fn test_css_without_prefix() {
        let tokens = DesignTokens::resolve(Platform::Android);
        let css = css_variables(&tokens, "");
        assert!(css.contains("  --color-background: #0B0D10;\n"));
        assert!(css.contains("  --font-timer-small-family: monospace;\n"));
    }

    #[test]
    fn test_json_export_parses() {
        let tokens = DesignTokens::resolve(Platform::Web);
        let json = render(&tokens, ExportFormat::Json, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["platform"], "web");
        assert_eq!(value["colors"]["success"], value["colors"]["accent"]);
        assert_eq!(value["typography"]["hero"]["weight"], 800);
        assert_eq!(value["animation"]["press"]["kind"], "spring");
    }

    #[test]
    fn test_toml_export_parses() {
        let tokens = DesignTokens::resolve(Platform::Ios);
        let out = render(&tokens, ExportFormat::Toml, "").unwrap();
        let value: toml::Table = out.parse().unwrap();
        assert_eq!(value["platform"].as_str(), Some("ios"));
        assert_eq!(value["colors"]["error"].as_str(), Some("#FF5A5F"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSS".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert!(matches!(
            "yaml".parse::<ExportFormat>(),
            Err(TokenError::UnknownFormat(f)) if f == "yaml"
        ));
    }
}
