pub const OPACITY_DISABLED: f32 = 0.4;
pub const OPACITY_PRESSED: f32 = 0.7;
pub const OPACITY_MUTED: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpacityLevel {
    Disabled,
    Pressed,
    Muted,
}

impl OpacityLevel {
    pub const ALL: [OpacityLevel; 3] = [
        OpacityLevel::Disabled,
        OpacityLevel::Pressed,
        OpacityLevel::Muted,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            OpacityLevel::Disabled => "disabled",
            OpacityLevel::Pressed => "pressed",
            OpacityLevel::Muted => "muted",
        }
    }

    pub const fn value(self) -> f32 {
        match self {
            OpacityLevel::Disabled => OPACITY_DISABLED,
            OpacityLevel::Pressed => OPACITY_PRESSED,
            OpacityLevel::Muted => OPACITY_MUTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_in_unit_range() {
        for level in OpacityLevel::ALL {
            assert!((0.0..=1.0).contains(&level.value()), "{}", level.key());
        }
    }

    #[test]
    fn test_disabled_is_faintest() {
        assert!(OPACITY_DISABLED < OPACITY_MUTED);
        assert!(OPACITY_MUTED < OPACITY_PRESSED);
    }
}
