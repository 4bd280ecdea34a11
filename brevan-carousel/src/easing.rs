//! Easing curves for slide animations.

use serde::{Deserialize, Serialize};

/// Easing function types for transitions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// CSS timing function with the same shape, for hosts that animate with
    /// transitions rather than per-frame writes.
    pub const fn css(&self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            EasingFunction::EaseInOutCubic => {
                "cubic-bezier(0.65, 0, 0.35, 1)"
            }
            EasingFunction::EaseOutQuart => "cubic-bezier(0.25, 1, 0.5, 1)",
        }
    }
}
