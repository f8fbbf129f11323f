use tempo_tokens::{export, DesignTokens, Platform};
use wasm_bindgen::prelude::*;

/// Resolved tokens for `platform` as JSON, or `"{}"` if the platform is unknown.
#[wasm_bindgen]
pub fn design_tokens(platform: &str) -> String {
    platform
        .parse::<Platform>()
        .ok()
        .map(DesignTokens::resolve)
        .and_then(|tokens| serde_json::to_string(&tokens).ok())
        .unwrap_or_else(|| "{}".to_string())
}

/// Resolved tokens as a `:root` CSS block, or empty if the platform is unknown.
#[wasm_bindgen]
pub fn css_variables(platform: &str, prefix: &str) -> String {
    platform
        .parse::<Platform>()
        .map(|p| export::css_variables(&DesignTokens::resolve(p), prefix))
        .unwrap_or_default()
}

/// Monospace family for `platform`, or empty if the platform is unknown.
#[wasm_bindgen]
pub fn mono_font(platform: &str) -> String {
    platform
        .parse::<Platform>()
        .map(|p| p.mono_font().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_tokens_json() {
        let json: serde_json::Value = serde_json::from_str(&design_tokens("ios")).unwrap();
        assert_eq!(json["typography"]["timer"]["font_family"], "Menlo");
        assert_eq!(design_tokens("palm"), "{}");
    }

    #[test]
    fn test_css_and_font() {
        assert!(css_variables("web", "app").contains("--app-color-accent"));
        assert!(css_variables("palm", "app").is_empty());
        assert_eq!(mono_font("android"), "monospace");
        assert_eq!(mono_font("ios"), "Menlo");
        assert_eq!(mono_font("palm"), "");
    }
}
