//! Hamburger-driven mobile navigation panel.

use tracing::trace;

/// Where a document click landed, relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// The hamburger button itself.
    Hamburger,
    /// A link inside the panel.
    MenuLink,
    /// Inside the panel but not on a link.
    InsideMenu,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// CSS class for the panel.
    pub fn class(&self) -> Option<&'static str> {
        self.open.then_some("open")
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        trace!(open = self.open, "mobile nav toggled");
        self.open
    }

    /// Returns whether the panel state changed.
    pub fn click(&mut self, target: NavClick) -> bool {
        match target {
            NavClick::Hamburger => {
                self.toggle();
                true
            }
            NavClick::InsideMenu => false,
            NavClick::MenuLink | NavClick::Elsewhere => {
                let was_open = self.open;
                self.open = false;
                was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_click_closes_but_inside_does_not() {
        let mut nav = MobileNav::default();
        assert!(nav.click(NavClick::Hamburger));
        assert_eq!(nav.class(), Some("open"));
        assert!(!nav.click(NavClick::InsideMenu));
        assert!(nav.is_open());
        assert!(nav.click(NavClick::Elsewhere));
        assert!(!nav.is_open());
        assert!(!nav.click(NavClick::Elsewhere));
    }

    #[test]
    fn link_click_closes() {
        let mut nav = MobileNav::default();
        nav.toggle();
        assert!(nav.click(NavClick::MenuLink));
        assert_eq!(nav.class(), None);
    }

    #[test]
    fn hamburger_toggles_closed_again() {
        let mut nav = MobileNav::default();
        nav.click(NavClick::Hamburger);
        nav.click(NavClick::Hamburger);
        assert!(!nav.is_open());
    }
}
