//! In-page section navigation.
//!
//! The header is fixed and a title badge floats over the hero, so plain
//! anchor jumps land under them. Each target gets a small scroll plan: a
//! list of actions with the delay after which the host should perform
//! them. Positions are resolved against live [`PageMetrics`] at the moment
//! each step runs, because images keep shifting the layout while the page
//! settles.

use std::time::Duration;

use tracing::debug;

/// Gap kept between the rooms heading and the floating badge.
pub const ROOMS_HEADING_MARGIN_PX: f32 = 20.0;

/// Delay before acting on a hash present at page load.
pub const ARRIVAL_DELAY: Duration = Duration::from_millis(10);

/// Where the title badge sends visitors from other pages.
pub const HOME_HREF: &str = "index.html#home";

const NON_HOME_PAGES: [&str; 7] = [
    "reserve",
    "gallery",
    "autour",
    "mentions",
    "confidentialite",
    "cookies",
    "cgv",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Home,
    Rooms,
    Contact,
    Other(String),
}

impl Section {
    /// Parse a location hash, with or without the leading `#`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        match id {
            "" => None,
            "home" => Some(Section::Home),
            "chambres" => Some(Section::Rooms),
            "contact" => Some(Section::Contact),
            other => Some(Section::Other(other.to_string())),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Section::Home => "home",
            Section::Rooms => "chambres",
            Section::Contact => "contact",
            Section::Other(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    Top,
    /// Put the rooms heading just below the header and badge.
    AlignRoomsHeading,
    IntoView(String),
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollStep {
    /// Delay from the start of the plan.
    pub at: Duration,
    pub action: ScrollAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollPlan {
    steps: Vec<ScrollStep>,
}

impl ScrollPlan {
    fn step(mut self, at_ms: u64, action: ScrollAction) -> Self {
        self.steps.push(ScrollStep {
            at: Duration::from_millis(at_ms),
            action,
        });
        self
    }

    pub fn steps(&self) -> &[ScrollStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Plan for a page loaded with `section` in its hash.
pub fn arrival_plan(section: &Section) -> ScrollPlan {
    let base = ARRIVAL_DELAY.as_millis() as u64;
    let plan = ScrollPlan::default();
    let plan = match section {
        Section::Home => plan.step(base, ScrollAction::Top),
        Section::Rooms => plan
            .step(base + 50, ScrollAction::AlignRoomsHeading)
            .step(base + 250, ScrollAction::AlignRoomsHeading),
        Section::Contact | Section::Other(_) => plan
            .step(base, ScrollAction::IntoView(section.id().to_string()))
            .step(base + 400, ScrollAction::Bottom),
    };
    debug!(section = section.id(), steps = plan.steps.len(), "arrival scroll plan");
    plan
}

/// Plan for an in-page link click. `None` means the default anchor jump
/// is fine.
pub fn link_click_plan(section: &Section) -> Option<ScrollPlan> {
    let plan = ScrollPlan::default();
    match section {
        Section::Rooms => Some(plan.step(0, ScrollAction::AlignRoomsHeading)),
        Section::Contact => Some(
            plan.step(0, ScrollAction::IntoView(section.id().to_string()))
                .step(500, ScrollAction::Bottom)
                .step(1000, ScrollAction::Bottom),
        ),
        Section::Home | Section::Other(_) => None,
    }
}

/// Layout readings taken when a step runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageMetrics {
    /// Viewport-relative top of the rooms heading, if it exists.
    pub rooms_heading_top: Option<f32>,
    pub page_y_offset: f32,
    pub header_height: Option<f32>,
    pub badge_height: Option<f32>,
    pub scroll_height: f32,
}

impl PageMetrics {
    pub fn rooms_heading_offset(&self) -> Option<f32> {
        let top = self.rooms_heading_top?;
        Some(
            top + self.page_y_offset
                - self.header_height.unwrap_or(0.0)
                - self.badge_height.unwrap_or(0.0)
                - ROOMS_HEADING_MARGIN_PX,
        )
    }
}

/// Concrete smooth scroll the host performs.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollCommand {
    To { top: f32 },
    IntoView(String),
}

impl ScrollAction {
    /// `None` when the page lacks what the action aims at.
    pub fn resolve(&self, metrics: &PageMetrics) -> Option<ScrollCommand> {
        match self {
            ScrollAction::Top => Some(ScrollCommand::To { top: 0.0 }),
            ScrollAction::AlignRoomsHeading => metrics
                .rooms_heading_offset()
                .map(|top| ScrollCommand::To { top }),
            ScrollAction::IntoView(id) => Some(ScrollCommand::IntoView(id.clone())),
            ScrollAction::Bottom => Some(ScrollCommand::To {
                top: metrics.scroll_height,
            }),
        }
    }
}

/// Whether `path` is the homepage.
pub fn is_home_path(path: &str) -> bool {
    !NON_HOME_PAGES.iter().any(|page| path.contains(page))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleBadgeAction {
    ScrollToTop,
    Navigate(&'static str),
}

/// Title badge click on the page at `path`.
pub fn title_badge_action(path: &str) -> TitleBadgeAction {
    if is_home_path(path) {
        TitleBadgeAction::ScrollToTop
    } else {
        TitleBadgeAction::Navigate(HOME_HREF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_parse_to_sections() {
        assert_eq!(Section::from_hash("#chambres"), Some(Section::Rooms));
        assert_eq!(Section::from_hash("home"), Some(Section::Home));
        assert_eq!(Section::from_hash("#"), None);
        assert_eq!(
            Section::from_hash("#faq"),
            Some(Section::Other("faq".into()))
        );
    }

    #[test]
    fn heading_offset_subtracts_header_badge_and_margin() {
        let metrics = PageMetrics {
            rooms_heading_top: Some(600.0),
            page_y_offset: 100.0,
            header_height: Some(80.0),
            badge_height: Some(50.0),
            scroll_height: 4_000.0,
        };
        assert_eq!(metrics.rooms_heading_offset(), Some(550.0));

        let bare = PageMetrics {
            header_height: None,
            badge_height: None,
            ..metrics
        };
        assert_eq!(bare.rooms_heading_offset(), Some(680.0));
    }

    #[test]
    fn missing_heading_resolves_to_nothing() {
        let metrics = PageMetrics::default();
        assert_eq!(ScrollAction::AlignRoomsHeading.resolve(&metrics), None);
        assert_eq!(
            ScrollAction::Top.resolve(&metrics),
            Some(ScrollCommand::To { top: 0.0 })
        );
    }

    #[test]
    fn home_detection_excludes_secondary_pages() {
        assert!(is_home_path("/"));
        assert!(is_home_path("/index.html"));
        assert!(!is_home_path("/gallery.html"));
        assert!(!is_home_path("/en/autour.html"));
        assert_eq!(title_badge_action("/"), TitleBadgeAction::ScrollToTop);
        assert_eq!(
            title_badge_action("/cgv.html"),
            TitleBadgeAction::Navigate("index.html#home")
        );
    }
}
