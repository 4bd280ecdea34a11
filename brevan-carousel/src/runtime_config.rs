//! Runtime configuration for user-adjustable constants
//!
//! This module provides a RuntimeConfig struct with Option<T> fields that override
//! the default constants. Accessor methods fall back to constants when None.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{animation, autoplay, edge, environment, gesture};
use crate::easing::EasingFunction;
use crate::edge::EdgeConfig;
use crate::gesture::GestureConfig;

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    // ========== GESTURES ==========
    /// Axis-lock threshold (px)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_lock_px: Option<f32>,
    /// Commit distance as a fraction of container width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_distance_fraction: Option<f32>,
    /// Commit velocity (px/ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_velocity: Option<f32>,
    /// Click suppression window after a drag (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_suppress_ms: Option<f64>,

    // ========== ANIMATION ==========
    /// Swipe commit duration (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_duration_ms: Option<u64>,
    /// Swipe revert duration (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_duration_ms: Option<u64>,
    /// Dot/arrow/autoplay slide duration (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_duration_ms: Option<u64>,
    /// Extra wait before a missing transition-end is forced (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_slack_ms: Option<u64>,
    /// Easing for swipe commits and reverts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingFunction>,

    // ========== AUTOPLAY ==========
    /// Autoplay interval (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,

    // ========== MODE SELECTION ==========
    /// Widest viewport using native scroll-snap (px)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_max_width_px: Option<f32>,

    // ========== EDGE LOOP ==========
    /// Minimum wraparound swipe distance (px)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_min_distance_px: Option<f32>,
    /// Width-relative wraparound swipe distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_distance_fraction: Option<f32>,
    /// Wraparound release velocity (px/ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_velocity: Option<f32>,
}

impl RuntimeConfig {
    pub fn axis_lock_px(&self) -> f32 {
        self.axis_lock_px.unwrap_or(gesture::AXIS_LOCK_PX)
    }

    pub fn commit_distance_fraction(&self) -> f32 {
        self.commit_distance_fraction
            .unwrap_or(gesture::COMMIT_DISTANCE_FRACTION)
    }

    pub fn commit_velocity(&self) -> f32 {
        self.commit_velocity
            .unwrap_or(gesture::COMMIT_VELOCITY_PX_PER_MS)
    }

    pub fn click_suppress_ms(&self) -> f64 {
        self.click_suppress_ms.unwrap_or(gesture::CLICK_SUPPRESS_MS)
    }

    pub fn commit_duration(&self) -> Duration {
        Duration::from_millis(
            self.commit_duration_ms.unwrap_or(animation::COMMIT_MS),
        )
    }

    pub fn revert_duration(&self) -> Duration {
        Duration::from_millis(
            self.revert_duration_ms.unwrap_or(animation::REVERT_MS),
        )
    }

    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(
            self.slide_duration_ms.unwrap_or(animation::SLIDE_MS),
        )
    }

    pub fn fallback_slack(&self) -> Duration {
        Duration::from_millis(
            self.fallback_slack_ms
                .unwrap_or(animation::FALLBACK_SLACK_MS),
        )
    }

    pub fn easing(&self) -> EasingFunction {
        self.easing.unwrap_or_default()
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(
            self.autoplay_interval_ms
                .unwrap_or(autoplay::INTERVAL_MS)
                .max(1),
        )
    }

    pub fn native_max_width_px(&self) -> f32 {
        self.native_max_width_px
            .unwrap_or(environment::NATIVE_MAX_WIDTH_PX)
    }

    pub fn edge_min_distance_px(&self) -> f32 {
        self.edge_min_distance_px.unwrap_or(edge::MIN_DISTANCE_PX)
    }

    pub fn edge_distance_fraction(&self) -> f32 {
        self.edge_distance_fraction
            .unwrap_or(edge::DISTANCE_FRACTION)
    }

    pub fn edge_velocity(&self) -> f32 {
        self.edge_velocity.unwrap_or(edge::VELOCITY_PX_PER_MS)
    }

    /// Whether any field differs from the compiled defaults.
    pub fn has_overrides(&self) -> bool {
        self != &Self::default()
    }
}

/// Resolved, copyable tuning handed to each carousel at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTuning {
    pub gesture: GestureConfig,
    pub edge: EdgeConfig,
    pub click_suppress_ms: f64,
    pub commit_duration: Duration,
    pub revert_duration: Duration,
    pub slide_duration: Duration,
    pub fallback_slack: Duration,
    pub easing: EasingFunction,
    pub autoplay_interval: Duration,
    pub native_max_width_px: f32,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self::from_runtime_config(&RuntimeConfig::default())
    }
}

impl CarouselTuning {
    pub fn from_runtime_config(rc: &RuntimeConfig) -> Self {
        Self {
            gesture: GestureConfig {
                axis_lock_px: rc.axis_lock_px(),
                commit_distance_fraction: rc.commit_distance_fraction(),
                commit_velocity: rc.commit_velocity(),
            },
            edge: EdgeConfig {
                min_distance_px: rc.edge_min_distance_px(),
                distance_fraction: rc.edge_distance_fraction(),
                velocity: rc.edge_velocity(),
            },
            click_suppress_ms: rc.click_suppress_ms(),
            commit_duration: rc.commit_duration(),
            revert_duration: rc.revert_duration(),
            slide_duration: rc.slide_duration(),
            fallback_slack: rc.fallback_slack(),
            easing: rc.easing(),
            autoplay_interval: rc.autoplay_interval(),
            native_max_width_px: rc.native_max_width_px(),
        }
    }
}
