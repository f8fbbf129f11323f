//! Motion presets.
//!
//! Timing presets are linear-duration tweens; spring presets use the
//! damping/stiffness/mass model shared by the platform animation drivers.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    Timing { duration_ms: u64 },
    Spring(Spring),
}

impl Animation {
    /// Fixed duration of a timing preset. Springs settle on their own.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Animation::Timing { duration_ms } => Some(Duration::from_millis(*duration_ms)),
            Animation::Spring(_) => None,
        }
    }
}

pub const PRESS: Animation = Animation::Spring(Spring {
    damping: 18.0,
    stiffness: 400.0,
    mass: 1.0,
});

pub const FADE: Animation = Animation::Timing { duration_ms: 180 };
pub const SLIDE: Animation = Animation::Timing { duration_ms: 280 };

pub const MODAL: Animation = Animation::Spring(Spring {
    damping: 24.0,
    stiffness: 260.0,
    mass: 1.0,
});

pub const PROGRESS: Animation = Animation::Timing { duration_ms: 600 };

// Underdamped on purpose: the PR badge overshoots.
pub const CELEBRATE: Animation = Animation::Spring(Spring {
    damping: 8.0,
    stiffness: 180.0,
    mass: 0.8,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationPreset {
    Press,
    Fade,
    Slide,
    Modal,
    Progress,
    Celebrate,
}

impl AnimationPreset {
    pub const ALL: [AnimationPreset; 6] = [
        AnimationPreset::Press,
        AnimationPreset::Fade,
        AnimationPreset::Slide,
        AnimationPreset::Modal,
        AnimationPreset::Progress,
        AnimationPreset::Celebrate,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            AnimationPreset::Press => "press",
            AnimationPreset::Fade => "fade",
            AnimationPreset::Slide => "slide",
            AnimationPreset::Modal => "modal",
            AnimationPreset::Progress => "progress",
            AnimationPreset::Celebrate => "celebrate",
        }
    }

    pub const fn animation(self) -> Animation {
        match self {
            AnimationPreset::Press => PRESS,
            AnimationPreset::Fade => FADE,
            AnimationPreset::Slide => SLIDE,
            AnimationPreset::Modal => MODAL,
            AnimationPreset::Progress => PROGRESS,
            AnimationPreset::Celebrate => CELEBRATE,
        }
    }
}
