//! Host platform and the platform-dependent font choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Monospace family shipped with iOS.
pub const MONO_FONT_IOS: &str = "Menlo";

/// Generic monospace family understood by Android, browsers and desktop
/// text stacks.
pub const MONO_FONT_DEFAULT: &str = "monospace";

/// Operating environment the tokens are resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Ios,
        Platform::Android,
        Platform::Web,
        Platform::Desktop,
    ];

    /// Platform of the compilation target.
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Desktop
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }

    /// Monospace font family name for this platform.
    pub const fn mono_font(self) -> &'static str {
        match self {
            Platform::Ios => MONO_FONT_IOS,
            _ => MONO_FONT_DEFAULT,
        }
    }
}

/// Monospace font family for the compilation target.
pub const fn mono_font() -> &'static str {
    Platform::current().mono_font()
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| TokenError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_font_is_one_of_two() {
        for platform in Platform::ALL {
            let font = platform.mono_font();
            assert!(font == MONO_FONT_IOS || font == MONO_FONT_DEFAULT);
        }
        assert_eq!(Platform::Ios.mono_font(), "Menlo");
        assert_eq!(Platform::Android.mono_font(), "monospace");
        assert_eq!(Platform::Web.mono_font(), "monospace");
    }

    #[test]
    fn test_current_matches_target() {
        assert_eq!(mono_font(), Platform::current().mono_font());
        #[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
        assert_eq!(Platform::current(), Platform::Desktop);
    }

    #[test]
    fn test_parse() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(" Android ".parse::<Platform>().unwrap(), Platform::Android);
        assert!(matches!(
            "symbian".parse::<Platform>(),
            Err(TokenError::UnknownPlatform(s)) if s == "symbian"
        ));
    }
}
