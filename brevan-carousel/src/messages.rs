//! Input messages and output effects for a carousel.

use std::time::Duration;

use crate::gesture::TouchPoint;
use crate::store::ScrollBehavior;
use crate::transition::{TransitionEnd, TransitionToken};

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    // Touch
    TouchStart(TouchPoint),
    TouchMove(TouchPoint),
    TouchEnd(TouchPoint),
    TouchCancel,

    // Desktop hover
    PointerEnter,
    PointerLeave,

    // Navigation (dots, arrows)
    Next,
    Prev,
    GoTo(usize),

    // Timers
    AutoplayTick { generation: u64 },
    AnimationFrame,
    TransitionSettled {
        token: TransitionToken,
        how: TransitionEnd,
    },

    // Host reports
    Resized(f32),
    Scrolled { scroll_left: f32 },
}

/// Side effects the host must carry out after an update, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-project [`Carousel::view`](crate::carousel::Carousel::view).
    Render,
    /// Deliver [`CarouselMessage::AnimationFrame`] on the next frame.
    RequestAnimationFrame,
    /// Suppress the browser default for the touch event being handled.
    PreventDefault,
    ScrollTo {
        left: f32,
        behavior: ScrollBehavior,
    },
    /// Report [`CarouselMessage::TransitionSettled`] once the animation
    /// ends, or after `fallback` at the latest.
    AwaitTransition {
        token: TransitionToken,
        duration: Duration,
        fallback: Duration,
    },
    /// (Re)start the repeating autoplay timer; every tick carries
    /// `generation`.
    ArmAutoplay { generation: u64, every: Duration },
    CancelAutoplay,
    /// Prefetch and decode the slide images.
    WarmUp { force: bool },
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Effect::Render)
    }
}
