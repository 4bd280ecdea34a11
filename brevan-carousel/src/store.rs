//! Slide index store: the single source of truth for which slide is current.
//!
//! Index arithmetic is always modulo the slide count, so stepping past either
//! end wraps around. A store with zero slides is inert: every query still
//! answers, but nothing can be selected.

use crate::error::{CarouselError, Result};

/// How index changes reach the screen. Chosen once per carousel at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselMode {
    /// The host's scroll-snap container pages; index changes are scroll
    /// position assignments.
    Native,
    /// The carousel animates transforms and toggles the active slide itself.
    Custom,
}

/// Whether a scroll assignment animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    Smooth,
    /// Jump without animation (`behavior: "auto"`).
    Instant,
}

/// Direction of travel between two slides. Forward means the incoming slide
/// enters from the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Forward,
    Backward,
}

impl SlideDirection {
    pub const fn signum(self) -> i32 {
        match self {
            SlideDirection::Forward => 1,
            SlideDirection::Backward => -1,
        }
    }

    /// Direction implied by a horizontal finger displacement: dragging left
    /// (negative) advances.
    pub fn from_drag(dx: f32) -> Self {
        if dx < 0.0 {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideIndexStore {
    index: usize,
    count: usize,
    mode: CarouselMode,
}

impl SlideIndexStore {
    pub fn new(count: usize, mode: CarouselMode) -> Self {
        Self {
            index: 0,
            count,
            mode,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    /// No slides: no gestures, no autoplay, no active marker.
    pub fn is_inert(&self) -> bool {
        self.count == 0
    }

    /// At least two slides, so there is something to swipe between.
    pub fn can_page(&self) -> bool {
        self.count >= 2
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.count > 0 && i == self.index
    }

    /// Reduce any signed position into `[0, count)`.
    pub fn wrap(&self, i: isize) -> usize {
        if self.count == 0 {
            return 0;
        }
        i.rem_euclid(self.count as isize) as usize
    }

    /// Index one step away from the current one, wrapping at both ends.
    pub fn step(&self, direction: SlideDirection) -> usize {
        self.wrap(self.index as isize + direction.signum() as isize)
    }

    /// Visual direction for a jump to `target`. Only used to pick which side
    /// the slides animate from, never for wraparound math.
    pub fn direction_to(&self, target: usize) -> SlideDirection {
        if target > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }

    pub fn set_index(&mut self, target: usize) -> Result<bool> {
        if target >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                count: self.count,
            });
        }
        let changed = target != self.index;
        self.index = target;
        Ok(changed)
    }

    /// Replace the slide set. The index restarts at `start`, clamped into
    /// range.
    pub fn reset(&mut self, count: usize, start: usize) {
        self.count = count;
        self.index = if count == 0 { 0 } else { start.min(count - 1) };
    }

    /// Native mode: scroll offset that shows `index` flush left.
    pub fn scroll_offset_for(&self, index: usize, container_width: f32) -> f32 {
        index as f32 * container_width.max(0.0)
    }

    /// Native mode: nearest slide for a reported scroll offset, clamped into
    /// range. A zero-width container is treated as 1 px wide.
    pub fn index_from_scroll(
        &self,
        scroll_left: f32,
        container_width: f32,
    ) -> usize {
        if self.count == 0 {
            return 0;
        }
        let width = if container_width > 0.0 {
            container_width
        } else {
            1.0
        };
        let raw = (scroll_left.max(0.0) / width).round();
        (raw as usize).min(self.count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_both_ways() {
        let mut store = SlideIndexStore::new(4, CarouselMode::Custom);
        assert_eq!(store.step(SlideDirection::Backward), 3);
        store.set_index(3).unwrap();
        assert_eq!(store.step(SlideDirection::Forward), 0);
    }

    #[test]
    fn out_of_range_index_is_rejected_and_state_kept() {
        let mut store = SlideIndexStore::new(3, CarouselMode::Custom);
        store.set_index(2).unwrap();
        let err = store.set_index(3).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::IndexOutOfRange { index: 3, count: 3 }
        ));
        assert_eq!(store.index(), 2);
    }

    #[test]
    fn empty_store_is_inert() {
        let store = SlideIndexStore::new(0, CarouselMode::Native);
        assert!(store.is_inert());
        assert!(!store.can_page());
        assert!(!store.is_active(0));
        assert_eq!(store.wrap(-1), 0);
        assert_eq!(store.index_from_scroll(500.0, 100.0), 0);
    }

    #[test]
    fn direction_is_forward_only_for_higher_targets() {
        let mut store = SlideIndexStore::new(5, CarouselMode::Custom);
        store.set_index(2).unwrap();
        assert_eq!(store.direction_to(4), SlideDirection::Forward);
        assert_eq!(store.direction_to(0), SlideDirection::Backward);
        assert_eq!(store.direction_to(2), SlideDirection::Backward);
    }

    #[test]
    fn scroll_position_rounds_to_nearest_slide() {
        let store = SlideIndexStore::new(5, CarouselMode::Native);
        assert_eq!(store.index_from_scroll(149.0, 100.0), 1);
        assert_eq!(store.index_from_scroll(151.0, 100.0), 2);
        assert_eq!(store.index_from_scroll(10_000.0, 100.0), 4);
        assert_eq!(store.index_from_scroll(-30.0, 100.0), 0);
        assert_eq!(store.index_from_scroll(3.0, 0.0), 3);
        assert_eq!(store.scroll_offset_for(3, 320.0), 960.0);
    }

    #[test]
    fn reset_clamps_start_index() {
        let mut store = SlideIndexStore::new(5, CarouselMode::Custom);
        store.set_index(4).unwrap();
        store.reset(3, 7);
        assert_eq!(store.index(), 2);
        store.reset(0, 1);
        assert_eq!(store.index(), 0);
    }
}
