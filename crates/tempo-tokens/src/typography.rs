//! Type scale.
//!
//! Sizes and line heights are in points. Only the timer styles name a
//! family (monospace, so digits don't jitter while counting); everything
//! else renders in the platform's system font.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TokenError;
use crate::platform::Platform;

/// Numeric font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

impl FontWeight {
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
        }
    }
}

impl Serialize for FontWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.value())
    }
}

/// Font family reference, resolved to a concrete name per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Mono,
}

impl FontFamily {
    pub const fn resolve(self, platform: Platform) -> &'static str {
        match self {
            FontFamily::Mono => platform.mono_font(),
        }
    }
}

/// One entry of the type scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub font_family: Option<FontFamily>,
}

impl TextStyle {
    const fn system(size: f32, weight: FontWeight, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            size,
            weight,
            line_height,
            letter_spacing,
            font_family: None,
        }
    }

    /// Font family name for `platform`, or `None` for the system font.
    pub fn family_name(&self, platform: Platform) -> Option<&'static str> {
        self.font_family.map(|f| f.resolve(platform))
    }
}

// ── Display ──────────────────────────────────────────────────────

pub const HERO: TextStyle = TextStyle::system(44.0, FontWeight::Heavy, 52.0, -1.0);
pub const STAT: TextStyle = TextStyle::system(32.0, FontWeight::Bold, 38.0, -0.5);

// ── Headings ─────────────────────────────────────────────────────

pub const H1: TextStyle = TextStyle::system(28.0, FontWeight::Bold, 34.0, -0.5);
pub const H2: TextStyle = TextStyle::system(22.0, FontWeight::Semibold, 28.0, -0.25);
pub const H3: TextStyle = TextStyle::system(18.0, FontWeight::Semibold, 24.0, 0.0);

// ── Body ─────────────────────────────────────────────────────────

pub const BODY: TextStyle = TextStyle::system(16.0, FontWeight::Regular, 22.0, 0.0);
pub const LABEL: TextStyle = TextStyle::system(14.0, FontWeight::Medium, 18.0, 0.1);
pub const CAPTION: TextStyle = TextStyle::system(12.0, FontWeight::Regular, 16.0, 0.2);

// ── Timers ───────────────────────────────────────────────────────

pub const TIMER: TextStyle = TextStyle {
    size: 64.0,
    weight: FontWeight::Light,
    line_height: 72.0,
    letter_spacing: -1.0,
    font_family: Some(FontFamily::Mono),
};

pub const TIMER_SMALL: TextStyle = TextStyle {
    size: 24.0,
    weight: FontWeight::Medium,
    line_height: 30.0,
    letter_spacing: 0.0,
    font_family: Some(FontFamily::Mono),
};

// ── Roles ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextRole {
    Hero,
    Stat,
    H1,
    H2,
    H3,
    Body,
    Label,
    Caption,
    Timer,
    TimerSmall,
}

impl TextRole {
    pub const ALL: [TextRole; 10] = [
        TextRole::Hero,
        TextRole::Stat,
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::Body,
        TextRole::Label,
        TextRole::Caption,
        TextRole::Timer,
        TextRole::TimerSmall,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            TextRole::Hero => "hero",
            TextRole::Stat => "stat",
            TextRole::H1 => "h1",
            TextRole::H2 => "h2",
            TextRole::H3 => "h3",
            TextRole::Body => "body",
            TextRole::Label => "label",
            TextRole::Caption => "caption",
            TextRole::Timer => "timer",
            TextRole::TimerSmall => "timer_small",
        }
    }

    pub fn style(self) -> &'static TextStyle {
        match self {
            TextRole::Hero => &HERO,
            TextRole::Stat => &STAT,
            TextRole::H1 => &H1,
            TextRole::H2 => &H2,
            TextRole::H3 => &H3,
            TextRole::Body => &BODY,
            TextRole::Label => &LABEL,
            TextRole::Caption => &CAPTION,
            TextRole::Timer => &TIMER,
            TextRole::TimerSmall => &TIMER_SMALL,
        }
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TextRole {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextRole::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| TokenError::UnknownRole(s.to_string()))
    }
}
