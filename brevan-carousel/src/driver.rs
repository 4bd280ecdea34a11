//! Async host for a single carousel.
//!
//! The driver owns a [`Carousel`] inside a tokio task and carries out its
//! effects against a [`CarouselSurface`]: it schedules animation frames,
//! races transition-end reports against the fallback timer, runs the
//! autoplay interval and performs image warm-up. Everything reaches the
//! carousel as a message through one mailbox, so state is only ever touched
//! from the driver task.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::carousel::Carousel;
use crate::constants::animation::FRAME_NS;
use crate::error::{CarouselError, Result};
use crate::messages::{CarouselMessage, Effect};
use crate::registry::CarouselKey;
use crate::render::{CarouselSurface, CarouselView};
use crate::transition::{TransitionToken, await_transition};
use crate::warmup::{ImageLoader, WarmupOptions, WarmupService};

/// Warm-up service shared by every driver on a page.
pub type SharedWarmup<L> = Arc<Mutex<WarmupService<L>>>;

#[derive(Debug)]
pub enum DriverCommand {
    Message(CarouselMessage),
    Snapshot(oneshot::Sender<CarouselView>),
    Shutdown,
}

/// Cloneable front door to a running driver.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    key: CarouselKey,
    tx: mpsc::UnboundedSender<DriverCommand>,
    shutdown: CancellationToken,
}

impl CarouselHandle {
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn send(&self, message: CarouselMessage) -> Result<()> {
        self.tx
            .send(DriverCommand::Message(message))
            .map_err(|_| CarouselError::DriverClosed(self.key.clone()))
    }

    /// Current render projection.
    pub async fn snapshot(&self) -> Result<CarouselView> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(DriverCommand::Snapshot(reply))
            .map_err(|_| CarouselError::DriverClosed(self.key.clone()))?;
        rx.await
            .map_err(|_| CarouselError::DriverClosed(self.key.clone()))
    }

    /// Stop the driver and every timer it spawned.
    pub fn shutdown(&self) {
        let _ = self.tx.send(DriverCommand::Shutdown);
        self.shutdown.cancel();
    }
}

pub struct CarouselDriver<S, L> {
    carousel: Carousel,
    surface: S,
    warmup: SharedWarmup<L>,
    tx: mpsc::UnboundedSender<DriverCommand>,
    rx: mpsc::UnboundedReceiver<DriverCommand>,
    shutdown: CancellationToken,
    transition: Option<(TransitionToken, CancellationToken)>,
    autoplay: Option<CancellationToken>,
    frame_pending: bool,
    frame: Duration,
}

impl<S, L> fmt::Debug for CarouselDriver<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselDriver")
            .field("key", self.carousel.key())
            .field("surface_type", &type_name::<S>())
            .field("loader_type", &type_name::<L>())
            .field("transition", &self.transition.as_ref().map(|(t, _)| *t))
            .field("autoplay_running", &self.autoplay.is_some())
            .field("frame_pending", &self.frame_pending)
            .field("shutdown_cancelled", &self.shutdown.is_cancelled())
            .finish()
    }
}

impl<S, L> CarouselDriver<S, L>
where
    S: CarouselSurface,
    L: ImageLoader + 'static,
{
    pub fn new(carousel: Carousel, surface: S, warmup: SharedWarmup<L>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            carousel,
            surface,
            warmup,
            tx,
            rx,
            shutdown: CancellationToken::new(),
            transition: None,
            autoplay: None,
            frame_pending: false,
            frame: Duration::from_nanos(FRAME_NS),
        }
    }

    pub fn handle(&self) -> CarouselHandle {
        CarouselHandle {
            key: self.carousel.key().clone(),
            tx: self.tx.clone(),
            shutdown: self.shutdown.clone(),
        }
    }

    /// Spawn onto the current runtime. The join handle yields the carousel
    /// back once the driver shuts down.
    pub fn spawn(self) -> (CarouselHandle, JoinHandle<Carousel>) {
        let handle = self.handle();
        (handle, tokio::spawn(self.run()))
    }

    pub async fn run(mut self) -> Carousel {
        info!(key = %self.carousel.key(), "carousel driver started");
        let width = self.surface.container_width();
        self.carousel.set_width(width);
        let effects = self.carousel.start();
        self.apply(effects);

        loop {
            let command = tokio::select! {
                _ = self.shutdown.cancelled() => None,
                command = self.rx.recv() => command,
            };
            match command {
                None | Some(DriverCommand::Shutdown) => break,
                Some(DriverCommand::Snapshot(reply)) => {
                    let _ = reply.send(self.carousel.view());
                }
                Some(DriverCommand::Message(message)) => {
                    if matches!(message, CarouselMessage::AnimationFrame) {
                        self.frame_pending = false;
                    }
                    if let CarouselMessage::TransitionSettled { token, .. } =
                        &message
                        && self.transition.as_ref().is_some_and(|(t, _)| t == token)
                    {
                        self.transition = None;
                    }
                    let effects = self.carousel.update(message);
                    self.apply(effects);
                }
            }
        }

        self.shutdown.cancel();
        info!(key = %self.carousel.key(), "carousel driver stopped");
        self.carousel
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            trace!(key = %self.carousel.key(), ?effect, "applying effect");
            match effect {
                Effect::Render => self.surface.render(&self.carousel.view()),
                Effect::RequestAnimationFrame => self.request_frame(),
                Effect::PreventDefault => self.surface.prevent_default(),
                Effect::ScrollTo { left, behavior } => {
                    self.surface.scroll_to(left, behavior)
                }
                Effect::AwaitTransition {
                    token, fallback, ..
                } => self.await_transition(token, fallback),
                Effect::ArmAutoplay { generation, every } => {
                    self.arm_autoplay(generation, every)
                }
                Effect::CancelAutoplay => {
                    if let Some(token) = self.autoplay.take() {
                        token.cancel();
                    }
                }
                Effect::WarmUp { force } => {
                    let key = self.carousel.key().to_string();
                    self.warmup.lock().warm_up(
                        &key,
                        self.carousel.slides(),
                        WarmupOptions { force },
                    );
                }
            }
        }
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;
        let tx = self.tx.clone();
        let frame = self.frame;
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                _ = tokio::time::sleep(frame) => {
                    let _ = tx.send(DriverCommand::Message(CarouselMessage::AnimationFrame));
                }
            }
        });
    }

    fn await_transition(&mut self, token: TransitionToken, fallback: Duration) {
        if let Some((previous, cancel)) = self.transition.take() {
            debug!(%previous, "superseding transition wait");
            cancel.cancel();
        }
        let cancel = self.shutdown.child_token();
        self.transition = Some((token, cancel.clone()));
        let end = self.surface.transition_end(token);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let how = await_transition(token, end, fallback, cancel).await;
            let _ = tx.send(DriverCommand::Message(
                CarouselMessage::TransitionSettled { token, how },
            ));
        });
    }

    fn arm_autoplay(&mut self, generation: u64, every: Duration) {
        if let Some(previous) = self.autoplay.take() {
            previous.cancel();
        }
        let cancel = self.shutdown.child_token();
        self.autoplay = Some(cancel.clone());
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + every, every);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticks.tick() => {
                        let tick = CarouselMessage::AutoplayTick { generation };
                        if tx.send(DriverCommand::Message(tick)).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
}
