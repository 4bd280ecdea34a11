//! Infinite-loop edge handler for native scroll-snap carousels.
//!
//! Scroll-snap stops at the first and last slide. This observer watches the
//! same touches as the scroll container and, when a swipe starting on an
//! edge slide points past that edge hard enough, asks for an instant jump to
//! the opposite end.

use tracing::debug;

use crate::gesture::TouchPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeConfig {
    pub min_distance_px: f32,
    pub distance_fraction: f32,
    pub velocity: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        use crate::constants::edge::*;
        Self {
            min_distance_px: MIN_DISTANCE_PX,
            distance_fraction: DISTANCE_FRACTION,
            velocity: VELOCITY_PX_PER_MS,
        }
    }
}

impl EdgeConfig {
    /// Distance a wraparound swipe must cover for a container of `width`.
    pub fn distance_threshold(&self, width: f32) -> f32 {
        self.min_distance_px
            .max(self.distance_fraction * width.max(0.0))
    }
}

/// Requested wraparound landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeJump {
    pub from_index: usize,
    pub to_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct EdgeStart {
    point: TouchPoint,
    index: usize,
    count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EdgeLoopHandler {
    config: EdgeConfig,
    start: Option<EdgeStart>,
}

impl EdgeLoopHandler {
    pub fn new(config: EdgeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    pub fn touch_start(&mut self, point: TouchPoint, index: usize, count: usize) {
        self.start = (count >= 2).then_some(EdgeStart {
            point,
            index,
            count,
        });
    }

    pub fn touch_cancel(&mut self) {
        self.start = None;
    }

    pub fn touch_end(&mut self, point: TouchPoint, width: f32) -> Option<EdgeJump> {
        let start = self.start.take()?;
        let last = start.count - 1;
        let dx = point.x - start.point.x;
        let dy = point.y - start.point.y;

        // Mostly vertical: a page scroll, not a swipe.
        if dx.abs() < dy.abs() {
            return None;
        }

        // Swiping left on the last slide or right on the first.
        let to_index = if start.index == last && dx < 0.0 {
            0
        } else if start.index == 0 && dx > 0.0 {
            last
        } else {
            return None;
        };

        let elapsed = (point.time_ms - start.point.time_ms)
            .max(crate::constants::gesture::MIN_ELAPSED_MS);
        let velocity = (f64::from(dx.abs()) / elapsed) as f32;
        let distance_ok = dx.abs() >= self.config.distance_threshold(width);
        let velocity_ok = velocity >= self.config.velocity;
        if !(distance_ok || velocity_ok) {
            return None;
        }

        debug!(from = start.index, to = to_index, dx, velocity, "edge wraparound");
        Some(EdgeJump {
            from_index: start.index,
            to_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> EdgeLoopHandler {
        EdgeLoopHandler::new(EdgeConfig::default())
    }

    #[test]
    fn threshold_uses_larger_of_floor_and_fraction() {
        let config = EdgeConfig::default();
        assert_eq!(config.distance_threshold(100.0), 36.0);
        assert_eq!(config.distance_threshold(1000.0), 160.0);
    }

    #[test]
    fn last_slide_swiped_left_wraps_to_first() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(300.0, 0.0, 0.0), 4, 5);
        let jump = h.touch_end(TouchPoint::new(200.0, 0.0, 800.0), 400.0);
        assert_eq!(
            jump,
            Some(EdgeJump {
                from_index: 4,
                to_index: 0
            })
        );
    }

    #[test]
    fn first_slide_flicked_right_wraps_to_last() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(100.0, 0.0, 0.0), 0, 5);
        // 20 px is short, but 20 px in 40 ms is 0.5 px/ms.
        let jump = h.touch_end(TouchPoint::new(120.0, 0.0, 40.0), 400.0);
        assert_eq!(jump.map(|j| j.to_index), Some(4));
    }

    #[test]
    fn interior_slides_and_inward_swipes_do_not_wrap() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(300.0, 0.0, 0.0), 2, 5);
        assert_eq!(h.touch_end(TouchPoint::new(0.0, 0.0, 100.0), 400.0), None);

        h.touch_start(TouchPoint::new(300.0, 0.0, 0.0), 0, 5);
        assert_eq!(h.touch_end(TouchPoint::new(0.0, 0.0, 100.0), 400.0), None);
    }

    #[test]
    fn weak_swipes_do_not_wrap() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(300.0, 0.0, 0.0), 4, 5);
        assert_eq!(h.touch_end(TouchPoint::new(280.0, 0.0, 500.0), 400.0), None);
    }

    #[test]
    fn vertical_scroll_on_edge_slide_does_not_wrap() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(500.0, 600.0, 0.0), 2, 3);
        // Fast enough to pass the velocity test on x alone.
        assert_eq!(h.touch_end(TouchPoint::new(480.0, 200.0, 40.0), 1000.0), None);

        h.touch_start(TouchPoint::new(100.0, 300.0, 0.0), 0, 3);
        assert_eq!(h.touch_end(TouchPoint::new(150.0, 360.0, 40.0), 1000.0), None);
    }

    #[test]
    fn diagonal_swipe_dominated_by_x_still_wraps() {
        let mut h = handler();
        h.touch_start(TouchPoint::new(500.0, 300.0, 0.0), 2, 3);
        let jump = h.touch_end(TouchPoint::new(300.0, 360.0, 200.0), 1000.0);
        assert_eq!(jump.map(|j| j.to_index), Some(0));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut h = handler();
        assert_eq!(h.touch_end(TouchPoint::new(0.0, 0.0, 0.0), 400.0), None);
        h.touch_start(TouchPoint::new(300.0, 0.0, 0.0), 4, 5);
        h.touch_cancel();
        assert_eq!(h.touch_end(TouchPoint::new(0.0, 0.0, 50.0), 400.0), None);
    }
}
