//! The carousel state machine.
//!
//! One type serves the hero banner, the room cards and both overlays. It is
//! parametrised by its slide source, whether it autoplays and how it pages
//! ([`CarouselMode`]). All state lives here; hosts feed it
//! [`CarouselMessage`]s and carry out the returned [`Effect`]s, then project
//! [`Carousel::view`] whenever an [`Effect::Render`] is requested.
//!
//! In custom mode at most one animation runs at a time. Touches, arrows,
//! dots and autoplay ticks that arrive while one is in flight are dropped.

use brevan_model::{Slide, SlideSource};
use tracing::{debug, trace, warn};

use crate::autoplay::{Autoplay, PauseReason};
use crate::edge::EdgeLoopHandler;
use crate::environment::EnvironmentProbe;
use crate::error::{CarouselError, Result};
use crate::gesture::{
    DragFrame, GestureOutcome, ReleaseDecision, SwipeTracker, TouchPoint,
    drag_frame,
};
use crate::messages::{CarouselMessage, Effect};
use crate::registry::CarouselKey;
use crate::render::{
    CarouselView, DotVisual, FrameBatcher, Motion, SlideClass, SlideVisual,
};
use crate::runtime_config::CarouselTuning;
use crate::store::{
    CarouselMode, ScrollBehavior, SlideDirection, SlideIndexStore,
};
use crate::transition::{PendingTransition, TransitionEnd, TransitionToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Finger down, axis not decided yet.
    Tracking,
    /// Horizontal drag following the finger.
    Dragging,
    /// Swipe accepted, finishing the move to `to`.
    Committing {
        from: usize,
        to: usize,
        direction: SlideDirection,
        token: TransitionToken,
    },
    /// Swipe rejected, sliding back onto `from`.
    Reverting {
        from: usize,
        neighbor: usize,
        direction: SlideDirection,
        token: TransitionToken,
    },
    /// Dot, arrow or autoplay navigation.
    Sliding {
        from: usize,
        to: usize,
        direction: SlideDirection,
        token: TransitionToken,
    },
}

impl Phase {
    pub fn is_animating(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_touching(&self) -> bool {
        matches!(self, Phase::Tracking | Phase::Dragging)
    }

    pub fn token(&self) -> Option<TransitionToken> {
        match *self {
            Phase::Committing { token, .. }
            | Phase::Reverting { token, .. }
            | Phase::Sliding { token, .. } => Some(token),
            Phase::Idle | Phase::Tracking | Phase::Dragging => None,
        }
    }
}

/// Construction parameters for a [`Carousel`].
#[derive(Debug, Clone, Copy)]
pub struct CarouselOptions {
    pub mode: CarouselMode,
    pub autoplay: bool,
    pub start_index: usize,
    /// Container width (px) at construction; hosts report changes with
    /// [`CarouselMessage::Resized`].
    pub width: f32,
    pub tuning: CarouselTuning,
}

impl CarouselOptions {
    pub fn new(mode: CarouselMode) -> Self {
        Self {
            mode,
            autoplay: false,
            start_index: 0,
            width: 0.0,
            tuning: CarouselTuning::default(),
        }
    }

    /// Pick the mode by asking `probe` now.
    pub fn probed<P>(probe: &P, tuning: CarouselTuning) -> Self
    where
        P: EnvironmentProbe + ?Sized,
    {
        let mode = probe.snapshot().mode(tuning.native_max_width_px);
        Self {
            tuning,
            ..Self::new(mode)
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_tuning(mut self, tuning: CarouselTuning) -> Self {
        self.tuning = tuning;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    key: CarouselKey,
    slides: Vec<Slide>,
    title: Option<String>,
    store: SlideIndexStore,
    phase: Phase,
    tracker: SwipeTracker,
    edge: EdgeLoopHandler,
    autoplay: Autoplay,
    tuning: CarouselTuning,
    width: f32,
    last_token: TransitionToken,
    drag: Option<DragFrame>,
    drag_batch: FrameBatcher<DragFrame>,
    scroll_batch: FrameBatcher<f32>,
    last_swipe_release_ms: Option<f64>,
    native_origin: Option<TouchPoint>,
}

impl Carousel {
    pub fn new(
        key: CarouselKey,
        source: SlideSource,
        options: CarouselOptions,
    ) -> Self {
        let SlideSource { title, slides } = source;
        let mut store = SlideIndexStore::new(slides.len(), options.mode);
        store.reset(slides.len(), options.start_index);
        let tuning = options.tuning;
        Self {
            key,
            slides,
            title,
            store,
            phase: Phase::Idle,
            tracker: SwipeTracker::new(tuning.gesture),
            edge: EdgeLoopHandler::new(tuning.edge),
            autoplay: Autoplay::new(options.autoplay, tuning.autoplay_interval),
            tuning,
            width: options.width.max(0.0),
            last_token: TransitionToken::default(),
            drag: None,
            drag_batch: FrameBatcher::new(),
            scroll_batch: FrameBatcher::new(),
            last_swipe_release_ms: None,
            native_origin: None,
        }
    }

    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn index(&self) -> usize {
        self.store.index()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn mode(&self) -> CarouselMode {
        self.store.mode()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    /// Effects for bringing a freshly built carousel on screen.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut fx = vec![Effect::WarmUp { force: false }, Effect::Render];
        if self.store.mode() == CarouselMode::Native && self.store.index() > 0
        {
            fx.push(self.scroll_to(self.store.index(), ScrollBehavior::Instant));
        }
        if self.store.can_page() {
            fx.extend(self.autoplay.start());
        }
        debug!(key = %self.key, count = self.count(), mode = ?self.mode(), "carousel started");
        fx
    }

    /// Replace the slide set, discarding any gesture or animation in flight.
    pub fn reset(
        &mut self,
        source: SlideSource,
        start_index: usize,
        mode: CarouselMode,
    ) -> Vec<Effect> {
        let SlideSource { title, slides } = source;
        let mut fx = Vec::new();
        fx.extend(self.autoplay.stop());

        self.store = SlideIndexStore::new(slides.len(), mode);
        self.store.reset(slides.len(), start_index);
        self.slides = slides;
        self.title = title;
        self.clear_interaction();

        fx.push(Effect::Render);
        fx.push(Effect::WarmUp { force: true });
        if mode == CarouselMode::Native {
            fx.push(self.scroll_to(self.store.index(), ScrollBehavior::Instant));
        }
        if self.store.can_page() {
            fx.extend(self.autoplay.start());
        }
        debug!(key = %self.key, count = self.count(), start = self.index(), ?mode, "carousel rebuilt");
        fx
    }

    /// Drop every slide, stop timers and abandon interaction state.
    pub fn clear(&mut self) -> Vec<Effect> {
        let mut fx: Vec<Effect> = self.autoplay.stop().into_iter().collect();
        self.clear_interaction();
        self.slides.clear();
        self.title = None;
        self.store.reset(0, 0);
        fx.push(Effect::Render);
        fx
    }

    /// Record the container width without emitting effects, for callers
    /// that are about to rebuild anyway.
    pub fn set_width(&mut self, width: f32) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    pub fn update(&mut self, message: CarouselMessage) -> Vec<Effect> {
        let mut fx = Vec::new();
        match message {
            CarouselMessage::TouchStart(point) => {
                self.on_touch_start(point, &mut fx)
            }
            CarouselMessage::TouchMove(point) => {
                self.on_touch_move(point, &mut fx)
            }
            CarouselMessage::TouchEnd(point) => {
                self.on_touch_end(point, &mut fx)
            }
            CarouselMessage::TouchCancel => self.on_touch_cancel(&mut fx),
            CarouselMessage::PointerEnter => {
                fx.extend(self.autoplay.pause(PauseReason::Hover))
            }
            CarouselMessage::PointerLeave => {
                self.resume_autoplay(PauseReason::Hover, &mut fx)
            }
            CarouselMessage::Next => {
                let target = self.store.step(SlideDirection::Forward);
                self.navigate(target, SlideDirection::Forward, &mut fx);
            }
            CarouselMessage::Prev => {
                let target = self.store.step(SlideDirection::Backward);
                self.navigate(target, SlideDirection::Backward, &mut fx);
            }
            CarouselMessage::GoTo(target) => match self.go_to(target) {
                Ok(effects) => fx = effects,
                Err(err) => {
                    warn!(key = %self.key, %err, "navigation request ignored")
                }
            },
            CarouselMessage::AutoplayTick { generation } => {
                self.on_autoplay_tick(generation, &mut fx)
            }
            CarouselMessage::AnimationFrame => self.on_animation_frame(&mut fx),
            CarouselMessage::TransitionSettled { token, how } => {
                self.on_transition_settled(token, how, &mut fx)
            }
            CarouselMessage::Resized(width) => self.on_resized(width, &mut fx),
            CarouselMessage::Scrolled { scroll_left } => {
                if self.store.mode() == CarouselMode::Native
                    && self.scroll_batch.push(scroll_left)
                {
                    fx.push(Effect::RequestAnimationFrame);
                }
            }
        }
        fx
    }

    /// Dot navigation. The animation direction is forward iff `target` is
    /// above the current index; the move itself never wraps.
    pub fn go_to(&mut self, target: usize) -> Result<Vec<Effect>> {
        if self.store.is_inert() {
            return Err(CarouselError::EmptyCarousel);
        }
        if target >= self.store.count() {
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                count: self.store.count(),
            });
        }
        let mut fx = Vec::new();
        let direction = self.store.direction_to(target);
        self.navigate(target, direction, &mut fx);
        Ok(fx)
    }

    /// Whether a click at `time_ms` is the tail end of a swipe and should not
    /// count as a click on the slide.
    pub fn click_is_swipe_tail(&self, time_ms: f64) -> bool {
        if self.phase == Phase::Dragging {
            return true;
        }
        self.last_swipe_release_ms.is_some_and(|released| {
            time_ms - released < self.tuning.click_suppress_ms
        })
    }

    pub fn view(&self) -> CarouselView {
        let slides = self
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| self.slide_visual(i, slide))
            .collect();
        let dots = (0..self.slides.len())
            .map(|i| DotVisual {
                index: i,
                active: self.store.is_active(i),
            })
            .collect();
        CarouselView {
            mode: self.store.mode(),
            index: self.store.index(),
            title: self.title.clone(),
            slides,
            dots,
            single_image: self.slides.len() <= 1,
            animating: self.phase.is_animating(),
        }
    }

    // ---- touch -------------------------------------------------------

    fn on_touch_start(&mut self, point: TouchPoint, fx: &mut Vec<Effect>) {
        if !self.store.can_page() {
            return;
        }
        if self.phase.is_animating() {
            debug!(key = %self.key, "touch ignored during animation");
            return;
        }
        fx.extend(self.autoplay.pause(PauseReason::Gesture));
        let (index, count) = (self.store.index(), self.store.count());

        match self.store.mode() {
            CarouselMode::Native => {
                self.native_origin = Some(point);
                self.edge.touch_start(point, index, count);
            }
            CarouselMode::Custom => {
                self.drag_batch.clear();
                if self.drag.take().is_some() {
                    fx.push(Effect::Render);
                }
                self.tracker.touch_start(point, index, count);
            }
        }
        self.phase = Phase::Tracking;
    }

    fn on_touch_move(&mut self, point: TouchPoint, fx: &mut Vec<Effect>) {
        if self.store.mode() == CarouselMode::Native
            || !self.phase.is_touching()
        {
            return;
        }
        match self
            .tracker
            .touch_move(point, self.store.count(), self.width)
        {
            GestureOutcome::Drag(frame) => {
                self.phase = Phase::Dragging;
                fx.push(Effect::PreventDefault);
                if self.drag_batch.push(frame) {
                    fx.push(Effect::RequestAnimationFrame);
                }
            }
            GestureOutcome::ScrollAbort => {
                self.phase = Phase::Idle;
                self.drag_batch.clear();
                if self.drag.take().is_some() {
                    fx.push(Effect::Render);
                }
                self.resume_autoplay(PauseReason::Gesture, fx);
            }
            _ => {}
        }
    }

    fn on_touch_end(&mut self, point: TouchPoint, fx: &mut Vec<Effect>) {
        if !self.phase.is_touching() {
            return;
        }
        match self.store.mode() {
            CarouselMode::Native => {
                self.phase = Phase::Idle;
                if let Some(origin) = self.native_origin.take()
                    && is_horizontal_drag(origin, point, self.tuning.gesture.axis_lock_px)
                {
                    self.last_swipe_release_ms = Some(point.time_ms);
                }
                if let Some(jump) = self.edge.touch_end(point, self.width) {
                    self.land_on(jump.to_index);
                    fx.push(
                        self.scroll_to(jump.to_index, ScrollBehavior::Instant),
                    );
                    fx.push(Effect::Render);
                }
                self.resume_autoplay(PauseReason::Gesture, fx);
            }
            CarouselMode::Custom => {
                match self.tracker.touch_end(point, self.width) {
                    GestureOutcome::Released {
                        decision,
                        start_index,
                        dx,
                    } => {
                        self.last_swipe_release_ms = Some(point.time_ms);
                        self.release(decision, start_index, dx, fx);
                    }
                    _ => {
                        self.phase = Phase::Idle;
                        self.drag_batch.clear();
                        if self.drag.take().is_some() {
                            fx.push(Effect::Render);
                        }
                        self.resume_autoplay(PauseReason::Gesture, fx);
                    }
                }
            }
        }
    }

    fn on_touch_cancel(&mut self, fx: &mut Vec<Effect>) {
        if !self.phase.is_touching() {
            return;
        }
        self.edge.touch_cancel();
        self.tracker.touch_cancel();
        self.native_origin = None;
        self.phase = Phase::Idle;
        self.drag_batch.clear();
        if self.drag.take().is_some() {
            fx.push(Effect::Render);
        }
        self.resume_autoplay(PauseReason::Gesture, fx);
    }

    fn release(
        &mut self,
        decision: ReleaseDecision,
        from: usize,
        dx: f32,
        fx: &mut Vec<Effect>,
    ) {
        self.drag_batch.clear();
        let frame = drag_frame(dx, from, self.store.count(), self.width);
        self.drag = Some(frame);

        let transition = match decision {
            ReleaseDecision::Commit(direction) => {
                let to = self.store.step(direction);
                let pending =
                    self.begin_transition(self.tuning.commit_duration);
                self.phase = Phase::Committing {
                    from,
                    to,
                    direction,
                    token: pending.token,
                };
                pending
            }
            ReleaseDecision::Revert => {
                let pending =
                    self.begin_transition(self.tuning.revert_duration);
                self.phase = Phase::Reverting {
                    from,
                    neighbor: frame.neighbor,
                    direction: SlideDirection::from_drag(dx),
                    token: pending.token,
                };
                pending
            }
        };
        debug!(key = %self.key, phase = ?self.phase, "swipe released");
        fx.push(Effect::Render);
        fx.push(await_effect(transition));
    }

    // ---- navigation --------------------------------------------------

    fn navigate(
        &mut self,
        target: usize,
        direction: SlideDirection,
        fx: &mut Vec<Effect>,
    ) {
        if self.store.is_inert() || target == self.store.index() {
            return;
        }
        match self.store.mode() {
            CarouselMode::Native => {
                self.land_on(target);
                fx.push(self.scroll_to(target, ScrollBehavior::Smooth));
                fx.push(Effect::Render);
            }
            CarouselMode::Custom => {
                if self.phase != Phase::Idle {
                    debug!(key = %self.key, phase = ?self.phase, "navigation dropped while busy");
                    return;
                }
                let pending = self.begin_transition(self.tuning.slide_duration);
                self.phase = Phase::Sliding {
                    from: self.store.index(),
                    to: target,
                    direction,
                    token: pending.token,
                };
                fx.push(Effect::Render);
                fx.push(await_effect(pending));
            }
        }
    }

    fn on_autoplay_tick(&mut self, generation: u64, fx: &mut Vec<Effect>) {
        if !self.autoplay.accepts(generation) {
            trace!(key = %self.key, generation, "stale autoplay tick");
            return;
        }
        if self.phase != Phase::Idle {
            debug!(key = %self.key, "autoplay tick skipped while busy");
            return;
        }
        let target = self.store.step(SlideDirection::Forward);
        self.navigate(target, SlideDirection::Forward, fx);
    }

    // ---- host reports ------------------------------------------------

    fn on_animation_frame(&mut self, fx: &mut Vec<Effect>) {
        let mut dirty = false;
        if let Some(frame) = self.drag_batch.take()
            && self.phase == Phase::Dragging
        {
            self.drag = Some(frame);
            dirty = true;
        }
        if let Some(scroll_left) = self.scroll_batch.take() {
            let index = self.store.index_from_scroll(scroll_left, self.width);
            if index != self.store.index() {
                trace!(key = %self.key, index, scroll_left, "index synced from scroll");
                self.land_on(index);
                dirty = true;
            }
        }
        if dirty {
            fx.push(Effect::Render);
        }
    }

    fn on_transition_settled(
        &mut self,
        token: TransitionToken,
        how: TransitionEnd,
        fx: &mut Vec<Effect>,
    ) {
        if self.phase.token() != Some(token) {
            trace!(key = %self.key, %token, "stale transition report");
            return;
        }
        let swipe = match self.phase {
            Phase::Committing { to, .. } => {
                self.land_on(to);
                true
            }
            Phase::Sliding { to, .. } => {
                self.land_on(to);
                false
            }
            Phase::Reverting { .. } => true,
            Phase::Idle | Phase::Tracking | Phase::Dragging => false,
        };
        debug!(key = %self.key, %token, ?how, index = self.index(), "animation settled");
        self.phase = Phase::Idle;
        self.drag = None;
        fx.push(Effect::Render);
        if swipe {
            self.resume_autoplay(PauseReason::Gesture, fx);
        }
    }

    fn on_resized(&mut self, width: f32, fx: &mut Vec<Effect>) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if (width - self.width).abs() < 0.5 {
            return;
        }
        self.width = width;
        if self.store.mode() == CarouselMode::Native && !self.store.is_inert() {
            fx.push(self.scroll_to(self.store.index(), ScrollBehavior::Instant));
        }
        fx.push(Effect::Render);
    }

    // ---- helpers -----------------------------------------------------

    /// Fewer than two slides never autoplay, whatever holds are lifted.
    fn resume_autoplay(&mut self, reason: PauseReason, fx: &mut Vec<Effect>) {
        if self.store.can_page() {
            fx.extend(self.autoplay.resume(reason));
        } else {
            self.autoplay.lift(reason);
        }
    }

    fn land_on(&mut self, index: usize) {
        if let Err(err) = self.store.set_index(index) {
            warn!(key = %self.key, %err, "landing index rejected");
        }
    }

    fn scroll_to(&self, index: usize, behavior: ScrollBehavior) -> Effect {
        Effect::ScrollTo {
            left: self.store.scroll_offset_for(index, self.width),
            behavior,
        }
    }

    fn begin_transition(
        &mut self,
        duration: std::time::Duration,
    ) -> PendingTransition {
        self.last_token = self.last_token.next();
        PendingTransition::new(
            self.last_token,
            duration,
            self.tuning.fallback_slack,
        )
    }

    fn clear_interaction(&mut self) {
        self.tracker.touch_cancel();
        self.edge.touch_cancel();
        self.phase = Phase::Idle;
        self.drag = None;
        self.drag_batch.clear();
        self.scroll_batch.clear();
        self.last_swipe_release_ms = None;
        self.native_origin = None;
    }

    fn slide_visual(&self, i: usize, slide: &Slide) -> SlideVisual {
        let mut visual = SlideVisual {
            index: i,
            src: slide.src.clone(),
            alt: slide.alt.clone(),
            active: self.store.is_active(i),
            offset_px: None,
            motion: None,
            class: None,
            z_index: None,
        };
        let width = self.width;
        let easing = self.tuning.easing;

        match self.phase {
            Phase::Dragging => {
                if let Some(frame) = self.drag {
                    if i == self.store.index() {
                        visual.offset_px = Some(frame.offset);
                    } else if i == frame.neighbor {
                        visual.offset_px = Some(frame.neighbor_offset);
                    }
                }
            }
            Phase::Committing { from, to, direction, .. } => {
                let motion = Some(Motion {
                    duration: self.tuning.commit_duration,
                    easing,
                });
                if i == from {
                    visual.offset_px = Some(-(direction.signum() as f32) * width);
                    visual.motion = motion;
                    visual.z_index = Some(1);
                } else if i == to {
                    visual.offset_px = Some(0.0);
                    visual.motion = motion;
                    visual.z_index = Some(2);
                }
            }
            Phase::Reverting { from, neighbor, direction, .. } => {
                let motion = Some(Motion {
                    duration: self.tuning.revert_duration,
                    easing,
                });
                if i == from {
                    visual.offset_px = Some(0.0);
                    visual.motion = motion;
                } else if i == neighbor {
                    visual.offset_px = Some(direction.signum() as f32 * width);
                    visual.motion = motion;
                }
            }
            Phase::Sliding { from, to, direction, .. } => {
                let forward = direction == SlideDirection::Forward;
                if i == from {
                    visual.class = Some(if forward {
                        SlideClass::SlideOutLeft
                    } else {
                        SlideClass::SlideOutRight
                    });
                    visual.z_index = Some(1);
                } else if i == to {
                    visual.class = Some(if forward {
                        SlideClass::SlideInRight
                    } else {
                        SlideClass::SlideInLeft
                    });
                    visual.z_index = Some(2);
                }
            }
            Phase::Idle | Phase::Tracking => {}
        }
        visual
    }
}

/// Moved past the axis threshold with x dominating.
fn is_horizontal_drag(from: TouchPoint, to: TouchPoint, threshold: f32) -> bool {
    let (dx, dy) = ((to.x - from.x).abs(), (to.y - from.y).abs());
    dx >= threshold && dx >= dy
}

fn await_effect(pending: PendingTransition) -> Effect {
    Effect::AwaitTransition {
        token: pending.token,
        duration: pending.duration,
        fallback: pending.fallback,
    }
}
