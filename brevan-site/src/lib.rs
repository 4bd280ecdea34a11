//! Page plumbing around the carousels: translations and the locale
//! preference, nav-letter labels, the mobile menu, in-page section scrolling
//! and social links.

pub mod error;
pub mod i18n;
pub mod mobile_nav;
pub mod nav_letters;
pub mod sections;
pub mod social;

pub use error::{Result, SiteError};
pub use i18n::{
    Dictionary, FileLocaleStore, I18nSlot, LanguageMenu, LanguageSwitcher,
    LocaleChange, LocalePreferenceStore, MemoryLocaleStore, PageText,
    SelectorButton, Translator,
};
pub use mobile_nav::{MobileNav, NavClick};
pub use nav_letters::{LabelPiece, NavLabel, NavLabels, wrap_label};
pub use sections::{
    PageMetrics, ScrollAction, ScrollCommand, ScrollPlan, ScrollStep, Section,
    TitleBadgeAction, arrival_plan, is_home_path, link_click_plan,
    title_badge_action,
};
pub use social::{SocialAnchor, SocialLinks, SocialNetwork};
