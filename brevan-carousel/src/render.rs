//! Render projection and the host surface seam.
//!
//! [`CarouselView`] is a pure function of carousel state. Hosts diff it
//! against the previous projection however they like; the carousel never
//! reads anything back from the surface except the container width and
//! transition-end notifications.

use std::time::Duration;

use futures::future::BoxFuture;

use crate::easing::EasingFunction;
use crate::store::{CarouselMode, ScrollBehavior};
use crate::transition::TransitionToken;

/// Class-driven slide animation applied to the outgoing and incoming slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideClass {
    SlideInRight,
    SlideOutLeft,
    SlideInLeft,
    SlideOutRight,
}

impl SlideClass {
    pub const fn css_class(self) -> &'static str {
        match self {
            SlideClass::SlideInRight => "slide-in-right",
            SlideClass::SlideOutLeft => "slide-out-left",
            SlideClass::SlideInLeft => "slide-in-left",
            SlideClass::SlideOutRight => "slide-out-right",
        }
    }
}

/// Transition attached to a transform write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl Motion {
    /// CSS `transition` value for this motion.
    pub fn css(&self) -> String {
        format!(
            "transform {}ms {}",
            self.duration.as_millis(),
            self.easing.css()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideVisual {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
    /// Horizontal translation (px). `None` clears any inline transform.
    pub offset_px: Option<f32>,
    /// `None` disables transitions (live drag) or leaves the stylesheet
    /// default in place when `offset_px` is also `None`.
    pub motion: Option<Motion>,
    pub class: Option<SlideClass>,
    /// Stacking hint while two slides overlap.
    pub z_index: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotVisual {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub mode: CarouselMode,
    pub index: usize,
    pub title: Option<String>,
    pub slides: Vec<SlideVisual>,
    pub dots: Vec<DotVisual>,
    pub single_image: bool,
    pub animating: bool,
}

impl CarouselView {
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().find(|d| d.active).map(|d| d.index)
    }

    pub fn slide(&self, index: usize) -> Option<&SlideVisual> {
        self.slides.get(index)
    }
}

/// Coalesces writes so at most one lands per animation frame.
///
/// `push` keeps only the latest value and reports whether a frame still has
/// to be requested; `take` drains it when the frame arrives.
#[derive(Debug, Clone)]
pub struct FrameBatcher<T> {
    pending: Option<T>,
}

impl<T> Default for FrameBatcher<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameBatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) -> bool {
        self.pending.replace(value).is_none()
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Host-side projection target for one carousel.
pub trait CarouselSurface: Send + 'static {
    fn container_width(&self) -> f32;

    fn render(&mut self, view: &CarouselView);

    fn scroll_to(&mut self, left: f32, behavior: ScrollBehavior);

    /// Called for gestures the carousel owns. Hosts that handle events
    /// synchronously act on [`Effect::PreventDefault`](crate::messages::Effect)
    /// directly and can ignore this.
    fn prevent_default(&mut self) {}

    /// Resolves when the animation identified by `token` has ended.
    fn transition_end(&mut self, token: TransitionToken) -> BoxFuture<'static, ()>;
}
