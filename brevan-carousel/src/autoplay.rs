//! Autoplay timer bookkeeping.
//!
//! The timer itself lives in the host (or the async driver); this type only
//! tracks whether it should be running and stamps each arming with a fresh
//! generation so ticks from a cancelled timer can be recognised and dropped.

use std::time::Duration;

use tracing::debug;

use crate::messages::Effect;

/// Why autoplay is currently held back. Both can be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseReason {
    /// A finger is down, or the swipe it started is still animating.
    Gesture,
    /// The pointer hovers the carousel.
    Hover,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    enabled: bool,
    interval: Duration,
    generation: u64,
    armed: bool,
    gesture_hold: bool,
    hover_hold: bool,
}

impl Autoplay {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval,
            generation: 0,
            armed: false,
            gesture_hold: false,
            hover_hold: false,
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_paused(&self) -> bool {
        self.gesture_hold || self.hover_hold
    }

    pub fn is_paused_by(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Gesture => self.gesture_hold,
            PauseReason::Hover => self.hover_hold,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick stamped with `generation` belongs to the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.armed && generation == self.generation
    }

    /// Arm the timer if nothing holds it back. Re-arming restarts the
    /// interval from zero.
    pub fn start(&mut self) -> Option<Effect> {
        if !self.enabled || self.is_paused() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        debug!(generation = self.generation, "autoplay armed");
        Some(Effect::ArmAutoplay {
            generation: self.generation,
            every: self.interval,
        })
    }

    pub fn pause(&mut self, reason: PauseReason) -> Option<Effect> {
        match reason {
            PauseReason::Gesture => self.gesture_hold = true,
            PauseReason::Hover => self.hover_hold = true,
        }
        self.disarm()
    }

    /// Lift one hold without arming, for carousels with nothing to page.
    pub fn lift(&mut self, reason: PauseReason) {
        match reason {
            PauseReason::Gesture => self.gesture_hold = false,
            PauseReason::Hover => self.hover_hold = false,
        }
    }

    /// Lift one hold. The timer re-arms only once no hold remains.
    pub fn resume(&mut self, reason: PauseReason) -> Option<Effect> {
        self.lift(reason);
        if self.armed {
            return None;
        }
        self.start()
    }

    /// Stop without recording a hold, e.g. when the slide set is replaced.
    pub fn stop(&mut self) -> Option<Effect> {
        self.gesture_hold = false;
        self.hover_hold = false;
        self.disarm()
    }

    fn disarm(&mut self) -> Option<Effect> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        // Invalidate ticks already in flight.
        self.generation = self.generation.wrapping_add(1);
        debug!("autoplay cancelled");
        Some(Effect::CancelAutoplay)
    }
}
