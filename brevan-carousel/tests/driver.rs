mod common;

use std::sync::Arc;
use std::time::Duration;

use brevan_carousel::{
    CarouselDriver, CarouselMessage, CarouselMode, CarouselSurface,
    CarouselView, ImageLoader, ScrollBehavior, TransitionToken, WarmupService,
};
use brevan_model::{ImageHints, Slide};
use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;

use common::*;

#[derive(Debug, Default)]
struct NoopLoader;

impl ImageLoader for NoopLoader {
    fn prefetch(&mut self, _: &Slide, _: ImageHints) {}
}

/// Reports every transition end after a fixed delay.
#[derive(Debug, Clone)]
struct TimedSurface {
    end_after: Duration,
    views: Arc<Mutex<Vec<CarouselView>>>,
    scrolls: Arc<Mutex<Vec<(f32, ScrollBehavior)>>>,
}

impl TimedSurface {
    fn new(end_after: Duration) -> Self {
        Self {
            end_after,
            views: Arc::default(),
            scrolls: Arc::default(),
        }
    }
}

impl CarouselSurface for TimedSurface {
    fn container_width(&self) -> f32 {
        WIDTH
    }

    fn render(&mut self, view: &CarouselView) {
        self.views.lock().push(view.clone());
    }

    fn scroll_to(&mut self, left: f32, behavior: ScrollBehavior) {
        self.scrolls.lock().push((left, behavior));
    }

    fn transition_end(&mut self, _: TransitionToken) -> BoxFuture<'static, ()> {
        tokio::time::sleep(self.end_after).boxed()
    }
}

fn warmup() -> brevan_carousel::SharedWarmup<NoopLoader> {
    Arc::new(Mutex::new(WarmupService::new(NoopLoader)))
}

#[tokio::test(start_paused = true)]
async fn swipe_settles_when_surface_reports_end() {
    let surface = TimedSurface::new(Duration::from_millis(320));
    let (handle, task) = CarouselDriver::new(
        carousel(3, CarouselMode::Custom, false),
        surface.clone(),
        warmup(),
    )
    .spawn();

    handle
        .send(CarouselMessage::TouchStart(touch(800.0, 300.0, 0.0)))
        .unwrap();
    handle
        .send(CarouselMessage::TouchMove(touch(600.0, 300.0, 50.0)))
        .unwrap();
    handle
        .send(CarouselMessage::TouchEnd(touch(500.0, 300.0, 80.0)))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let view = handle.snapshot().await.unwrap();
    assert!(view.animating);
    assert_eq!(view.index, 0);

    tokio::time::sleep(Duration::from_millis(300)).await;
    let view = handle.snapshot().await.unwrap();
    assert!(!view.animating);
    assert_eq!(view.index, 1);

    handle.shutdown();
    task.await.unwrap();
    assert_eq!(surface.views.lock().last().map(|v| v.index), Some(1));
}

#[tokio::test(start_paused = true)]
async fn drag_frames_are_delivered_by_the_driver() {
    let surface = TimedSurface::new(Duration::from_millis(200));
    let (handle, task) = CarouselDriver::new(
        carousel(3, CarouselMode::Custom, false),
        surface.clone(),
        warmup(),
    )
    .spawn();

    handle
        .send(CarouselMessage::TouchStart(touch(500.0, 300.0, 0.0)))
        .unwrap();
    handle
        .send(CarouselMessage::TouchMove(touch(440.0, 300.0, 16.0)))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(40)).await;

    let dragged = surface
        .views
        .lock()
        .iter()
        .any(|v| v.slides[0].offset_px == Some(-60.0));
    assert!(dragged);

    handle.shutdown();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn native_driver_scrolls_surface() {
    let surface = TimedSurface::new(Duration::ZERO);
    let (handle, task) = CarouselDriver::new(
        carousel(4, CarouselMode::Native, false),
        surface.clone(),
        warmup(),
    )
    .spawn();

    handle.send(CarouselMessage::GoTo(3)).unwrap();
    handle.snapshot().await.unwrap();
    assert_eq!(
        surface.scrolls.lock().last(),
        Some(&(3.0 * WIDTH, ScrollBehavior::Smooth))
    );

    handle.shutdown();
    task.await.unwrap();
}
