//! Carousel constants
//!
//! Shared tunables for gesture classification, animation timing, autoplay
//! and mode selection. Tuning should happen here (or through
//! [`RuntimeConfig`](crate::runtime_config::RuntimeConfig) overrides) so
//! hero, room and overlay carousels stay consistent.

/// Swipe classification thresholds.
pub mod gesture {
    /// Movement (px) on either axis before the axis lock is decided.
    pub const AXIS_LOCK_PX: f32 = 10.0;
    /// Fraction of the container width a drag must exceed to commit.
    pub const COMMIT_DISTANCE_FRACTION: f32 = 0.2;
    /// Release velocity (px/ms) above which a short flick still commits.
    pub const COMMIT_VELOCITY_PX_PER_MS: f32 = 0.5;
    /// Floor for elapsed time so a zero-length gesture cannot divide by zero.
    pub const MIN_ELAPSED_MS: f64 = 1.0;
    /// After a drag, clicks landing within this window (ms) are treated as
    /// the tail of the swipe and do not toggle full-photo mode.
    pub const CLICK_SUPPRESS_MS: f64 = 350.0;
}

/// Animation durations.
pub mod animation {
    /// Commit animation after a swipe (ms).
    pub const COMMIT_MS: u64 = 320;
    /// Snap-back animation after a rejected swipe (ms).
    pub const REVERT_MS: u64 = 200;
    /// Class-driven slide for dots, arrows and autoplay (ms).
    pub const SLIDE_MS: u64 = 500;
    /// Grace period past the nominal duration before the completion is
    /// forced even if no transition-end event arrived (ms).
    pub const FALLBACK_SLACK_MS: u64 = 120;
    /// Frame budget used by hosts without a native frame clock (ns, ~60 FPS).
    pub const FRAME_NS: u64 = 16_666_667;
}

/// Autoplay cadence.
pub mod autoplay {
    /// Interval between automatic advances (ms).
    pub const INTERVAL_MS: u64 = 5_000;
}

/// Native scroll-snap mode selection.
pub mod environment {
    /// Widest viewport (px) that still uses native scroll-snap on touch devices.
    pub const NATIVE_MAX_WIDTH_PX: f32 = 900.0;
}

/// Wraparound detection for native mode.
pub mod edge {
    /// Absolute minimum swipe distance (px).
    pub const MIN_DISTANCE_PX: f32 = 36.0;
    /// Width-relative minimum swipe distance.
    pub const DISTANCE_FRACTION: f32 = 0.16;
    /// Release velocity (px/ms) that counts regardless of distance.
    pub const VELOCITY_PX_PER_MS: f32 = 0.45;
}
