//! Render-surface output of the header state machine

use crate::nav::NavItem;
use serde::{Deserialize, Serialize};

/// What the header should show right now.
///
/// Desktop (nav bar + subnav panel) and mobile (slide-down panel) render
/// paths both read this one value; neither reaches into the other's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityDecision {
    pub subnav_open_slug: Option<String>,
    pub subnav_items: Vec<NavItem>,
    pub mobile_menu_open: bool,
    pub is_mobile: bool,
}

impl VisibilityDecision {
    /// Desktop flyout shown. A stale slug from before a flip to mobile
    /// never leaks into the mobile layout.
    pub fn subnav_panel_visible(&self) -> bool {
        !self.is_mobile && self.subnav_open_slug.is_some()
    }

    /// Mobile panel shown. An open menu left over from a flip to desktop is
    /// hidden until explicitly closed.
    pub fn mobile_panel_visible(&self) -> bool {
        self.is_mobile && self.mobile_menu_open
    }

    pub fn is_subnav_open_for(&self, slug: &str) -> bool {
        self.subnav_open_slug.as_deref() == Some(slug)
    }
}

/// Behavioral regime of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Nothing open
    Idle,
    /// Desktop flyout open and engaged
    DesktopSubnavOpen,
    /// Desktop flyout open, hover lost, dismiss timer armed
    DesktopSubnavDismissing,
    /// Mobile panel open on a mobile viewport
    MobileMenuOpen,
}

impl Regime {
    pub fn name(&self) -> &'static str {
        match self {
            Regime::Idle => "idle",
            Regime::DesktopSubnavOpen => "subnav-open",
            Regime::DesktopSubnavDismissing => "subnav-dismissing",
            Regime::MobileMenuOpen => "mobile-menu-open",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
