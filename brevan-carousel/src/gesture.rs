//! Swipe gesture tracker
//!
//! Classifies a single-finger touch sequence into a tap, a vertical page
//! scroll (which the carousel must leave alone) or a horizontal swipe that
//! drags the current slide and its neighbour, then decides on release
//! whether the swipe commits to the neighbour or snaps back.
//!
//! The tracker is pure bookkeeping. It never touches the slide index; the
//! owning carousel turns [`GestureOutcome`]s into effects.

use tracing::debug;

use crate::constants::gesture::MIN_ELAPSED_MS;
use crate::store::SlideDirection;

/// A touch sample in container coordinates. `time_ms` is a monotonic host
/// timestamp (event `timeStamp`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub time_ms: f64,
}

impl TouchPoint {
    pub const fn new(x: f32, y: f32, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    #[default]
    Unlocked,
    Horizontal,
    Vertical,
}

/// Thresholds that classify a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub axis_lock_px: f32,
    pub commit_distance_fraction: f32,
    pub commit_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        use crate::constants::gesture::*;
        Self {
            axis_lock_px: AXIS_LOCK_PX,
            commit_distance_fraction: COMMIT_DISTANCE_FRACTION,
            commit_velocity: COMMIT_VELOCITY_PX_PER_MS,
        }
    }
}

/// State for one finger-down to finger-up sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub start: TouchPoint,
    pub start_index: usize,
    pub last: TouchPoint,
    pub lock: AxisLock,
}

impl GestureSession {
    fn new(start: TouchPoint, start_index: usize) -> Self {
        Self {
            start,
            start_index,
            last: start,
            lock: AxisLock::Unlocked,
        }
    }

    pub fn dx(&self) -> f32 {
        self.last.x - self.start.x
    }

    pub fn dy(&self) -> f32 {
        self.last.y - self.start.y
    }

    pub fn elapsed_ms(&self) -> f64 {
        (self.last.time_ms - self.start.time_ms).max(MIN_ELAPSED_MS)
    }
}

/// What a release resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    Commit(SlideDirection),
    Revert,
}

/// Live drag placement of the current slide and the one being revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    /// Horizontal offset of the current slide (px).
    pub offset: f32,
    /// Index of the revealed neighbour.
    pub neighbor: usize,
    /// Horizontal offset of the neighbour (px).
    pub neighbor_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do: no session, or fewer than two slides.
    Ignored,
    /// A new session began (any dangling one was discarded).
    Started { start_index: usize },
    /// Movement still under the axis-lock threshold.
    Undecided,
    /// Horizontal drag in progress; the host must suppress page scroll.
    Drag(DragFrame),
    /// Vertical movement won; the session is gone and the page scrolls.
    ScrollAbort,
    /// Finger lifted without ever locking an axis.
    Tap,
    Released {
        decision: ReleaseDecision,
        start_index: usize,
        dx: f32,
    },
    Cancelled,
}

/// Whether a horizontal release of `dx` px after `elapsed_ms` commits.
///
/// Commits iff the distance exceeds `commit_distance_fraction * width` or
/// the average speed exceeds `commit_velocity`. Dragging left advances.
pub fn decide_release(
    dx: f32,
    elapsed_ms: f64,
    width: f32,
    config: &GestureConfig,
) -> ReleaseDecision {
    if dx == 0.0 || !dx.is_finite() {
        return ReleaseDecision::Revert;
    }
    let distance = dx.abs();
    let velocity = (f64::from(distance) / elapsed_ms.max(MIN_ELAPSED_MS)) as f32;
    let far_enough = distance > config.commit_distance_fraction * width.max(0.0);
    let fast_enough = velocity > config.commit_velocity;
    if far_enough || fast_enough {
        ReleaseDecision::Commit(SlideDirection::from_drag(dx))
    } else {
        ReleaseDecision::Revert
    }
}

/// Placement for a live drag of `dx` px starting from `index`.
///
/// Dragging left reveals the next slide entering from the right; dragging
/// right reveals the previous one entering from the left.
pub fn drag_frame(dx: f32, index: usize, count: usize, width: f32) -> DragFrame {
    let count = count.max(1) as isize;
    let direction = SlideDirection::from_drag(dx);
    let neighbor =
        (index as isize + direction.signum() as isize).rem_euclid(count) as usize;
    let neighbor_offset = match direction {
        SlideDirection::Forward => width + dx,
        SlideDirection::Backward => -width + dx,
    };
    DragFrame {
        offset: dx,
        neighbor,
        neighbor_offset,
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl SwipeTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session
            .is_some_and(|s| s.lock == AxisLock::Horizontal)
    }

    pub fn touch_start(
        &mut self,
        point: TouchPoint,
        index: usize,
        count: usize,
    ) -> GestureOutcome {
        if count < 2 {
            self.session = None;
            return GestureOutcome::Ignored;
        }
        if self.session.is_some() {
            debug!("replacing dangling gesture session");
        }
        self.session = Some(GestureSession::new(point, index));
        GestureOutcome::Started { start_index: index }
    }

    pub fn touch_move(
        &mut self,
        point: TouchPoint,
        count: usize,
        width: f32,
    ) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        session.last = point;
        let (dx, dy) = (session.dx(), session.dy());

        if session.lock == AxisLock::Unlocked {
            let threshold = self.config.axis_lock_px;
            if dx.abs() < threshold && dy.abs() < threshold {
                return GestureOutcome::Undecided;
            }
            if dx.abs() >= dy.abs() {
                session.lock = AxisLock::Horizontal;
                debug!(dx, dy, "gesture locked horizontal");
            } else {
                debug!(dx, dy, "gesture locked vertical, yielding to scroll");
                self.session = None;
                return GestureOutcome::ScrollAbort;
            }
        }

        GestureOutcome::Drag(drag_frame(dx, session.start_index, count, width))
    }

    pub fn touch_end(&mut self, point: TouchPoint, width: f32) -> GestureOutcome {
        let Some(mut session) = self.session.take() else {
            return GestureOutcome::Ignored;
        };
        session.last = point;
        match session.lock {
            AxisLock::Unlocked | AxisLock::Vertical => GestureOutcome::Tap,
            AxisLock::Horizontal => {
                let dx = session.dx();
                let decision =
                    decide_release(dx, session.elapsed_ms(), width, &self.config);
                debug!(dx, elapsed_ms = session.elapsed_ms(), ?decision, "swipe released");
                GestureOutcome::Released {
                    decision,
                    start_index: session.start_index,
                    dx,
                }
            }
        }
    }

    pub fn touch_cancel(&mut self) -> GestureOutcome {
        match self.session.take() {
            Some(_) => GestureOutcome::Cancelled,
            None => GestureOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 1000.0;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(GestureConfig::default())
    }

    #[test]
    fn slow_short_swipe_reverts() {
        let decision =
            decide_release(-0.1 * WIDTH, 1000.0, WIDTH, &GestureConfig::default());
        assert_eq!(decision, ReleaseDecision::Revert);
    }

    #[test]
    fn quick_flick_commits() {
        let decision =
            decide_release(-0.05 * WIDTH, 10.0, WIDTH, &GestureConfig::default());
        assert_eq!(decision, ReleaseDecision::Commit(SlideDirection::Forward));
    }

    #[test]
    fn long_slow_drag_right_commits_backward() {
        let decision =
            decide_release(0.25 * WIDTH, 2000.0, WIDTH, &GestureConfig::default());
        assert_eq!(decision, ReleaseDecision::Commit(SlideDirection::Backward));
    }

    #[test]
    fn fewer_than_two_slides_are_ignored() {
        let mut t = tracker();
        assert_eq!(
            t.touch_start(TouchPoint::new(0.0, 0.0, 0.0), 0, 1),
            GestureOutcome::Ignored
        );
        assert!(!t.is_tracking());
    }

    #[test]
    fn small_movement_stays_unlocked_and_ends_as_tap() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(100.0, 100.0, 0.0), 0, 3);
        assert_eq!(
            t.touch_move(TouchPoint::new(105.0, 97.0, 16.0), 3, WIDTH),
            GestureOutcome::Undecided
        );
        assert_eq!(
            t.touch_end(TouchPoint::new(105.0, 97.0, 40.0), WIDTH),
            GestureOutcome::Tap
        );
    }

    #[test]
    fn vertical_movement_aborts_the_session() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(100.0, 100.0, 0.0), 1, 3);
        assert_eq!(
            t.touch_move(TouchPoint::new(104.0, 140.0, 16.0), 3, WIDTH),
            GestureOutcome::ScrollAbort
        );
        assert!(!t.is_tracking());
        assert_eq!(
            t.touch_end(TouchPoint::new(104.0, 200.0, 50.0), WIDTH),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn horizontal_drag_reveals_neighbours() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(500.0, 100.0, 0.0), 0, 4);
        let GestureOutcome::Drag(frame) =
            t.touch_move(TouchPoint::new(470.0, 104.0, 16.0), 4, WIDTH)
        else {
            panic!("expected drag");
        };
        assert_eq!(frame.neighbor, 1);
        assert_eq!(frame.neighbor_offset, WIDTH - 30.0);

        let GestureOutcome::Drag(frame) =
            t.touch_move(TouchPoint::new(540.0, 104.0, 32.0), 4, WIDTH)
        else {
            panic!("expected drag");
        };
        assert_eq!(frame.neighbor, 3);
        assert_eq!(frame.neighbor_offset, -WIDTH + 40.0);
        assert!(t.is_dragging());
    }

    #[test]
    fn new_touch_replaces_dangling_session() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(0.0, 0.0, 0.0), 0, 3);
        t.touch_move(TouchPoint::new(50.0, 0.0, 10.0), 3, WIDTH);
        t.touch_start(TouchPoint::new(300.0, 0.0, 500.0), 2, 3);
        let session = t.session().expect("session");
        assert_eq!(session.start_index, 2);
        assert_eq!(session.lock, AxisLock::Unlocked);
    }

    #[test]
    fn cancel_discards_without_decision() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(0.0, 0.0, 0.0), 0, 3);
        t.touch_move(TouchPoint::new(-300.0, 0.0, 10.0), 3, WIDTH);
        assert_eq!(t.touch_cancel(), GestureOutcome::Cancelled);
        assert_eq!(t.touch_cancel(), GestureOutcome::Ignored);
    }

    #[test]
    fn release_reports_start_index() {
        let mut t = tracker();
        t.touch_start(TouchPoint::new(500.0, 0.0, 0.0), 2, 3);
        t.touch_move(TouchPoint::new(300.0, 0.0, 100.0), 3, WIDTH);
        let outcome = t.touch_end(TouchPoint::new(250.0, 0.0, 120.0), WIDTH);
        assert_eq!(
            outcome,
            GestureOutcome::Released {
                decision: ReleaseDecision::Commit(SlideDirection::Forward),
                start_index: 2,
                dx: -250.0,
            }
        );
    }
}
