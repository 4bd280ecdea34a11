//! Image warm-up
//!
//! Tells the host to fetch and decode every image of a slide set ahead of
//! time so swiping never reveals a blank slide. The first image gets high
//! fetch priority; the rest are eager but unprioritised. Each key is warmed
//! at most once unless the caller forces it (overlays are rebuilt on every
//! open and always force).

use std::collections::HashSet;

use brevan_model::{ImageHints, Slide};
use tracing::{debug, trace};

/// Host hook that starts loading one image. Fire-and-forget: decode
/// failures are the host's concern and never reach the carousel.
#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader: Send {
    fn prefetch(&mut self, slide: &Slide, hints: ImageHints);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarmupOptions {
    pub force: bool,
}

impl WarmupOptions {
    pub const FORCE: Self = Self { force: true };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupOutcome {
    /// Already warmed under this key.
    Skipped,
    Warmed { images: usize },
}

/// Hints for each slide of a set, in order.
pub fn plan(slides: &[Slide]) -> Vec<ImageHints> {
    (0..slides.len()).map(|i| ImageHints::warm(i == 0)).collect()
}

#[derive(Debug)]
pub struct WarmupService<L> {
    loader: L,
    warmed: HashSet<String>,
}

impl<L: ImageLoader> WarmupService<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            warmed: HashSet::new(),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn is_warm(&self, key: &str) -> bool {
        self.warmed.contains(key)
    }

    pub fn warm_up(
        &mut self,
        key: &str,
        slides: &[Slide],
        options: WarmupOptions,
    ) -> WarmupOutcome {
        if !options.force && self.warmed.contains(key) {
            trace!(key, "warm-up skipped");
            return WarmupOutcome::Skipped;
        }
        for (slide, hints) in slides.iter().zip(plan(slides)) {
            self.loader.prefetch(slide, hints);
        }
        self.warmed.insert(key.to_owned());
        debug!(key, images = slides.len(), force = options.force, "warmed images");
        WarmupOutcome::Warmed {
            images: slides.len(),
        }
    }

    /// Allow `key` to be warmed again without forcing.
    pub fn forget(&mut self, key: &str) -> bool {
        self.warmed.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use brevan_model::{DecodingHint, FetchPriority, LoadingHint};
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (1..=n)
            .map(|i| Slide::new(format!("img-{i}.jpg"), format!("Photo {i}")))
            .collect()
    }

    #[test]
    fn first_image_is_prioritised() {
        let hints = plan(&slides(3));
        assert_eq!(hints[0].fetch_priority, FetchPriority::High);
        assert_eq!(hints[1].fetch_priority, FetchPriority::Auto);
        assert!(hints.iter().all(|h| h.loading == LoadingHint::Eager));
        assert!(hints.iter().all(|h| h.decoding == DecodingHint::Async));
    }

    #[test]
    fn warms_each_key_once() {
        let mut loader = MockImageLoader::new();
        loader.expect_prefetch().times(3).return_const(());
        let mut service = WarmupService::new(loader);
        let set = slides(3);

        assert_eq!(
            service.warm_up("hero", &set, WarmupOptions::default()),
            WarmupOutcome::Warmed { images: 3 }
        );
        assert_eq!(
            service.warm_up("hero", &set, WarmupOptions::default()),
            WarmupOutcome::Skipped
        );
    }

    #[test]
    fn force_warms_again() {
        let mut loader = MockImageLoader::new();
        loader
            .expect_prefetch()
            .withf(|_: &Slide, hints: &ImageHints| hints.loading == LoadingHint::Eager)
            .times(4)
            .return_const(());
        let mut service = WarmupService::new(loader);
        let set = slides(2);

        service.warm_up("overlay", &set, WarmupOptions::FORCE);
        assert!(service.is_warm("overlay"));
        assert_eq!(
            service.warm_up("overlay", &set, WarmupOptions::FORCE),
            WarmupOutcome::Warmed { images: 2 }
        );
    }

    #[test]
    fn forgotten_keys_warm_again() {
        let mut loader = MockImageLoader::new();
        loader.expect_prefetch().times(2).return_const(());
        let mut service = WarmupService::new(loader);
        let set = slides(1);
        service.warm_up("room:heol", &set, WarmupOptions::default());
        assert!(service.forget("room:heol"));
        service.warm_up("room:heol", &set, WarmupOptions::default());
    }
}
