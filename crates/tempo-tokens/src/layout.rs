//! Layout dimensions: padding, radii, tap targets and scroll insets.

use serde::Serialize;

use crate::spacing::{SPACE_LG, SPACE_MD};

// ── Padding ──────────────────────────────────────────────────────

pub const SCREEN_PADDING: f32 = SPACE_LG; // 24
pub const CARD_PADDING: f32 = SPACE_MD; // 16

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_CARD: f32 = 16.0;
pub const RADIUS_BUTTON: f32 = 12.0;
pub const RADIUS_INPUT: f32 = 10.0;
pub const RADIUS_PILL: f32 = 999.0;

// ── Touch ────────────────────────────────────────────────────────

/// Smallest hit area for anything tappable (Apple HIG: 44pt).
pub const MIN_TAP_TARGET: f32 = 44.0;
pub const BUTTON_HEIGHT: f32 = 52.0;

// ── Chrome ───────────────────────────────────────────────────────

pub const HEADER_HEIGHT: f32 = 56.0;
pub const TAB_BAR_HEIGHT: f32 = 64.0;

/// Bottom inset for scroll views so the last row clears the tab bar and
/// the floating start button.
pub const SCROLL_BOTTOM_INSET: f32 = 120.0;

/// The layout table as one serializable value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutTokens {
    pub screen_padding: f32,
    pub card_padding: f32,
    pub radius_card: f32,
    pub radius_button: f32,
    pub radius_input: f32,
    pub radius_pill: f32,
    pub min_tap_target: f32,
    pub button_height: f32,
    pub header_height: f32,
    pub tab_bar_height: f32,
    pub scroll_bottom_inset: f32,
}

impl LayoutTokens {
    pub const DEFAULT: LayoutTokens = LayoutTokens {
        screen_padding: SCREEN_PADDING,
        card_padding: CARD_PADDING,
        radius_card: RADIUS_CARD,
        radius_button: RADIUS_BUTTON,
        radius_input: RADIUS_INPUT,
        radius_pill: RADIUS_PILL,
        min_tap_target: MIN_TAP_TARGET,
        button_height: BUTTON_HEIGHT,
        header_height: HEADER_HEIGHT,
        tab_bar_height: TAB_BAR_HEIGHT,
        scroll_bottom_inset: SCROLL_BOTTOM_INSET,
    };

    /// `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, f32); 11] {
        [
            ("screen_padding", self.screen_padding),
            ("card_padding", self.card_padding),
            ("radius_card", self.radius_card),
            ("radius_button", self.radius_button),
            ("radius_input", self.radius_input),
            ("radius_pill", self.radius_pill),
            ("min_tap_target", self.min_tap_target),
            ("button_height", self.button_height),
            ("header_height", self.header_height),
            ("tab_bar_height", self.tab_bar_height),
            ("scroll_bottom_inset", self.scroll_bottom_inset),
        ]
    }
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_meet_tap_target() {
        assert!(BUTTON_HEIGHT >= MIN_TAP_TARGET);
        assert!(HEADER_HEIGHT >= MIN_TAP_TARGET);
        assert!(TAB_BAR_HEIGHT >= MIN_TAP_TARGET);
    }

    #[test]
    fn test_scroll_inset_clears_tab_bar() {
        assert!(SCROLL_BOTTOM_INSET > TAB_BAR_HEIGHT);
    }

    #[test]
    fn test_entries_match_fields() {
        let layout = LayoutTokens::default();
        let json = serde_json::to_value(layout).unwrap();
        for (name, value) in layout.entries() {
            assert_eq!(json[name].as_f64(), Some(value as f64), "{name}");
        }
    }
}
