//! Secondary navigation (flyout) state

use crate::nav::{NavItem, NavigationSet};
use std::sync::Arc;
use tracing::trace;

/// Owns which top-level item's flyout is open and the children shown in it.
///
/// Invariant: `items` is non-empty only while `open_slug` is set and that
/// node has children.
#[derive(Debug, Clone)]
pub struct SubnavController {
    navigation: Arc<NavigationSet>,
    open_slug: Option<String>,
    items: Vec<NavItem>,
}

impl SubnavController {
    pub fn new(navigation: Arc<NavigationSet>) -> Self {
        Self {
            navigation,
            open_slug: None,
            items: Vec::new(),
        }
    }

    pub fn open_slug(&self) -> Option<&str> {
        self.open_slug.as_deref()
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open_slug.is_some()
    }

    pub fn navigation(&self) -> &NavigationSet {
        &self.navigation
    }

    /// Mark `slug` as open. Applicability is the caller's decision, so this
    /// never checks the slug against the navigation set. Returns true when
    /// the open slug changed.
    pub fn request_open(&mut self, slug: &str) -> bool {
        if self.open_slug.as_deref() == Some(slug) {
            return false;
        }
        trace!(slug, previous = ?self.open_slug, "Subnav open requested");
        self.open_slug = Some(slug.to_string());
        true
    }

    /// Refresh `items` from the navigation set for the current slug.
    ///
    /// A stale or unknown slug resolves to an empty list.
    pub fn resolve_items(&mut self) -> &[NavItem] {
        self.items = match self.open_slug.as_deref() {
            Some(slug) => self.navigation.children_of(slug).to_vec(),
            None => Vec::new(),
        };
        &self.items
    }

    pub fn close(&mut self) {
        if self.open_slug.is_some() {
            trace!(slug = ?self.open_slug, "Subnav closed");
        }
        self.open_slug = None;
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SubnavController {
        let nav = NavigationSet::new(vec![
            NavItem::new("learn", "Learn").with_children(vec![
                NavItem::new("learn/a", "A"),
                NavItem::new("learn/b", "B"),
            ]),
            NavItem::new("build", "Build"),
        ])
        .unwrap();
        SubnavController::new(Arc::new(nav))
    }

    #[test]
    fn test_resolve_after_open() {
        let mut subnav = controller();
        assert!(subnav.request_open("learn"));
        assert_eq!(subnav.resolve_items().len(), 2);
        assert!(!subnav.request_open("learn"));
    }

    #[test]
    fn test_unknown_slug_resolves_empty() {
        let mut subnav = controller();
        subnav.request_open("removed-section");
        assert!(subnav.resolve_items().is_empty());
        assert_eq!(subnav.open_slug(), Some("removed-section"));
    }

    #[test]
    fn test_close_clears_items() {
        let mut subnav = controller();
        subnav.request_open("learn");
        subnav.resolve_items();
        subnav.close();
        assert!(!subnav.is_open());
        assert!(subnav.items().is_empty());
    }

    #[test]
    fn test_switching_slug_replaces_items() {
        let mut subnav = controller();
        subnav.request_open("learn");
        subnav.resolve_items();
        subnav.request_open("build");
        assert!(subnav.resolve_items().is_empty());
    }
}
