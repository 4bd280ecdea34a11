//! Environment probe
//!
//! Decides whether a carousel should hand paging to the browser's native
//! scroll-snap or animate slides itself. Native mode is only used on touch
//! devices with narrow viewports; everything else, including hosts that
//! cannot report their capabilities, gets the custom animated mode.

use tracing::debug;

use crate::store::CarouselMode;

/// Precision of the primary pointing device as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPrecision {
    /// Touch screens and similar imprecise inputs.
    Coarse,
    /// Mice, trackpads, styluses.
    Fine,
    /// No pointing device at all.
    None,
}

/// Point-in-time view of the host capabilities relevant to mode selection.
///
/// Every field is optional: `None` means the corresponding detection API is
/// unavailable, not that the answer is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Environment {
    /// Result of the `(pointer: coarse)` media query.
    pub pointer: Option<PointerPrecision>,
    /// Number of simultaneous touch points the device supports.
    pub max_touch_points: Option<u32>,
    /// Current viewport width in CSS pixels.
    pub viewport_width: Option<f32>,
}

impl Environment {
    pub fn touch(viewport_width: f32) -> Self {
        Self {
            pointer: Some(PointerPrecision::Coarse),
            max_touch_points: Some(5),
            viewport_width: Some(viewport_width),
        }
    }

    pub fn desktop(viewport_width: f32) -> Self {
        Self {
            pointer: Some(PointerPrecision::Fine),
            max_touch_points: Some(0),
            viewport_width: Some(viewport_width),
        }
    }

    /// Whether the primary pointer is coarse. Falls back to the touch-point
    /// count when the pointer media query is unavailable, and to `false`
    /// when neither is known.
    pub fn is_coarse_pointer(&self) -> bool {
        match self.pointer {
            Some(precision) => precision == PointerPrecision::Coarse,
            None => self.max_touch_points.is_some_and(|n| n > 0),
        }
    }

    /// True iff the pointer is coarse and the viewport fits within
    /// `max_width` (inclusive, matching a `max-width` media query).
    pub fn should_use_native(&self, max_width: f32) -> bool {
        let Some(width) = self.viewport_width else {
            return false;
        };
        if !width.is_finite() || width <= 0.0 {
            return false;
        }
        self.is_coarse_pointer() && width <= max_width
    }

    pub fn mode(&self, max_width: f32) -> CarouselMode {
        let mode = if self.should_use_native(max_width) {
            CarouselMode::Native
        } else {
            CarouselMode::Custom
        };
        debug!(?mode, env = ?self, "carousel mode selected");
        mode
    }
}

/// Source of fresh [`Environment`] snapshots.
///
/// Implementations must not cache across viewport changes: callers query
/// once per carousel init or overlay open and expect the current answer.
pub trait EnvironmentProbe {
    fn snapshot(&self) -> Environment;

    fn should_use_native(&self, max_width: f32) -> bool {
        self.snapshot().should_use_native(max_width)
    }
}

impl EnvironmentProbe for Environment {
    fn snapshot(&self) -> Environment {
        *self
    }
}

/// Adapts a closure that reads the live environment into a probe.
#[derive(Debug, Clone, Copy)]
pub struct ProbeFn<F>(pub F);

impl<F> EnvironmentProbe for ProbeFn<F>
where
    F: Fn() -> Environment,
{
    fn snapshot(&self) -> Environment {
        (self.0)()
    }
}
