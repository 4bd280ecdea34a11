//! Touch-driven carousel and overlay interaction engine.
//!
//! The engine is DOM-free. A [`Carousel`] consumes [`CarouselMessage`]s and
//! returns [`Effect`]s for the host to perform; [`Carousel::view`] is the pure
//! projection to render. [`driver::CarouselDriver`] hosts a carousel on tokio
//! for embedders that prefer an actor to a callback loop.
#![allow(missing_docs)]

pub mod autoplay;
pub mod carousel;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod edge;
pub mod environment;
pub mod error;
pub mod gesture;
pub mod messages;
pub mod overlay;
pub mod registry;
pub mod render;
pub mod runtime_config;
pub mod store;
pub mod transition;
pub mod warmup;

pub use carousel::{Carousel, CarouselOptions, Phase};
pub use driver::{CarouselDriver, CarouselHandle, SharedWarmup};
pub use easing::EasingFunction;
pub use environment::{Environment, EnvironmentProbe, PointerPrecision, ProbeFn};
pub use error::{CarouselError, Result};
pub use gesture::TouchPoint;
pub use messages::{CarouselMessage, Effect};
pub use overlay::{OverlayController, OverlayMessage, OverlayView};
pub use registry::{CarouselKey, CarouselRegistry};
pub use render::{CarouselSurface, CarouselView};
pub use runtime_config::{CarouselTuning, RuntimeConfig};
pub use store::{CarouselMode, ScrollBehavior, SlideDirection};
pub use transition::{TransitionEnd, TransitionToken};
pub use warmup::{ImageLoader, WarmupOptions, WarmupOutcome, WarmupService};
