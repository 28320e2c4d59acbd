//! Header visibility state machine
//!
//! Composes viewport, hover, subnav and mobile menu state into one
//! [`VisibilityDecision`]. Every event handler is infallible and leaves the
//! scroll lock reconciled with `is_mobile && mobile_menu_open` before it
//! returns.

use crate::config::{HeaderConfig, HeaderContext};
use crate::decision::{Regime, VisibilityDecision};
use crate::dismiss::{DismissScheduler, DismissToken, PendingDismiss};
use crate::hover::HoverTracker;
use crate::mobile_menu::MobileMenuController;
use crate::nav::NavigationSet;
use crate::scroll_lock::ScrollLock;
use crate::subnav::SubnavController;
use crate::viewport::{Viewport, ViewportClass};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// One mounted header
pub struct HeaderMachine<S: DismissScheduler> {
    id: u64,
    config: HeaderConfig,
    viewport: Viewport,
    hover: HoverTracker,
    subnav: SubnavController,
    mobile_menu: MobileMenuController,
    scheduler: S,
    pending: Option<PendingDismiss<S::Handle>>,
    next_token: u64,
    torn_down: bool,
}

impl<S: DismissScheduler> std::fmt::Debug for HeaderMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderMachine")
            .field("id", &self.id)
            .field("viewport", &self.viewport.class())
            .field("hovered", &self.hover.hovered())
            .field("subnav", &self.subnav.open_slug())
            .field("mobile_menu_open", &self.mobile_menu.is_open())
            .field("pending", &self.pending.as_ref().map(|p| p.token()))
            .finish()
    }
}

impl<S: DismissScheduler> HeaderMachine<S> {
    /// Mount a header. The viewport starts as not-mobile until the first
    /// `resize` or `set_viewport`.
    pub fn new(
        navigation: Arc<NavigationSet>,
        config: HeaderConfig,
        scroll_lock: Arc<ScrollLock>,
        scheduler: S,
    ) -> Self {
        let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(
            id,
            breakpoint = config.breakpoint_px,
            delay_ms = config.dismiss_delay_ms,
            "Header mounted"
        );

        Self {
            id,
            viewport: Viewport::new(config.breakpoint_px),
            hover: HoverTracker::default(),
            subnav: SubnavController::new(navigation),
            mobile_menu: MobileMenuController::new(id, scroll_lock),
            scheduler,
            pending: None,
            next_token: 0,
            torn_down: false,
            config,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Read-only theme and layout context for descendants
    pub fn context(&self) -> &HeaderContext {
        &self.config.context
    }

    pub fn navigation(&self) -> &NavigationSet {
        self.subnav.navigation()
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.class().is_mobile()
    }

    pub fn hovered(&self) -> bool {
        self.hover.hovered()
    }

    pub fn subnav(&self) -> &SubnavController {
        &self.subnav
    }

    pub fn mobile_menu(&self) -> &MobileMenuController {
        &self.mobile_menu
    }

    pub fn pending_dismiss(&self) -> Option<DismissToken> {
        self.pending.as_ref().map(|p| p.token())
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn regime(&self) -> Regime {
        if self.is_mobile() {
            if self.mobile_menu.is_open() {
                return Regime::MobileMenuOpen;
            }
            return Regime::Idle;
        }
        match (self.subnav.is_open(), self.pending.is_some()) {
            (true, true) => Regime::DesktopSubnavDismissing,
            (true, false) => Regime::DesktopSubnavOpen,
            (false, _) => Regime::Idle,
        }
    }

    pub fn decision(&self) -> VisibilityDecision {
        VisibilityDecision {
            subnav_open_slug: self.subnav.open_slug().map(str::to_string),
            subnav_items: self.subnav.items().to_vec(),
            mobile_menu_open: self.mobile_menu.is_open(),
            is_mobile: self.is_mobile(),
        }
    }

    // ------------------------------------------------------------------
    // Hover / focus
    // ------------------------------------------------------------------

    pub fn pointer_enter(&mut self) {
        if self.torn_down {
            return;
        }
        if self.hover.set_pointer(true) {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    pub fn pointer_leave(&mut self) {
        if self.torn_down {
            return;
        }
        if self.hover.set_pointer(false) {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    pub fn focus_in(&mut self) {
        if self.torn_down {
            return;
        }
        if self.hover.set_focus(true) {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    pub fn focus_out(&mut self) {
        if self.torn_down {
            return;
        }
        if self.hover.set_focus(false) {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    /// Pointer entered a top-level item. Inert on mobile, where the panel
    /// lists every item inline.
    pub fn enter_item(&mut self, slug: &str) {
        if self.torn_down || self.is_mobile() {
            return;
        }
        let hover_changed = self.hover.set_pointer(true);
        let slug_changed = self.subnav.request_open(slug);
        if hover_changed || slug_changed {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    /// Keyboard focus landed on a top-level item
    pub fn focus_item(&mut self, slug: &str) {
        if self.torn_down || self.is_mobile() {
            return;
        }
        let focus_changed = self.hover.set_focus(true);
        let slug_changed = self.subnav.request_open(slug);
        if focus_changed || slug_changed {
            self.evaluate_subnav();
        }
        self.reconcile();
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    pub fn resize(&mut self, width: u32) {
        if self.torn_down {
            return;
        }
        if self.viewport.update(width) {
            self.on_viewport_changed();
        }
        self.reconcile();
    }

    pub fn set_viewport(&mut self, class: ViewportClass) {
        if self.torn_down {
            return;
        }
        if self.viewport.set(class) {
            self.on_viewport_changed();
        }
        self.reconcile();
    }

    fn on_viewport_changed(&mut self) {
        let class = self.viewport.class();
        debug!(id = self.id, ?class, "Viewport class changed");

        if class.is_mobile() {
            if self.config.clear_subnav_on_mobile && self.subnav.is_open() {
                self.cancel_dismiss();
                self.subnav.close();
            }
        } else {
            self.evaluate_subnav();
        }
    }

    // ------------------------------------------------------------------
    // Mobile menu
    // ------------------------------------------------------------------

    pub fn toggle_mobile_menu(&mut self) {
        if self.torn_down {
            return;
        }
        self.mobile_menu.toggle();
        self.reconcile();
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        if self.torn_down {
            return;
        }
        self.mobile_menu.set_open(open);
        self.reconcile();
    }

    // ------------------------------------------------------------------
    // Explicit closes
    // ------------------------------------------------------------------

    /// A link inside the header was followed: close every panel
    pub fn navigate(&mut self) {
        if self.torn_down {
            return;
        }
        trace!(id = self.id, "Navigation followed, closing panels");
        self.cancel_dismiss();
        self.subnav.close();
        self.mobile_menu.set_open(false);
        self.reconcile();
    }

    pub fn close_subnav(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_dismiss();
        self.subnav.close();
        self.reconcile();
    }

    /// A dismiss timer fired. Returns true when it closed the subnav.
    pub fn dismiss_elapsed(&mut self, token: DismissToken) -> bool {
        if self.torn_down {
            return false;
        }
        match self.pending.as_ref().map(|p| p.token()) {
            Some(live) if live == token => {}
            live => {
                trace!(id = self.id, ?token, ?live, "Ignoring stale dismiss");
                return false;
            }
        }

        self.pending = None;
        if self.hover.hovered() {
            return false;
        }

        debug!(id = self.id, slug = ?self.subnav.open_slug(), "Subnav dismissed");
        self.subnav.close();
        self.reconcile();
        true
    }

    /// Unmount: cancel the timer and give back the scroll lock. Later
    /// events are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_dismiss();
        self.mobile_menu.release();
        self.torn_down = true;
        debug!(id = self.id, "Header torn down");
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Runs after a change of `hovered` or the open slug. Desktop only.
    fn evaluate_subnav(&mut self) {
        if self.is_mobile() {
            return;
        }
        if !self.subnav.is_open() {
            self.cancel_dismiss();
            return;
        }

        self.subnav.resolve_items();
        if self.hover.hovered() {
            self.cancel_dismiss();
        } else {
            self.arm_dismiss();
        }
    }

    fn arm_dismiss(&mut self) {
        self.next_token += 1;
        let token = DismissToken(self.next_token);
        let handle = self.scheduler.schedule(self.config.dismiss_delay(), token);

        // Replacing the previous pending entry cancels its timer.
        self.pending = Some(PendingDismiss::new(token, handle));
        debug!(id = self.id, token = token.value(), "Dismiss timer armed");
    }

    fn cancel_dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(id = self.id, token = pending.token().value(), "Dismiss timer cancelled");
        }
    }

    fn reconcile(&mut self) {
        self.mobile_menu.sync_scroll_lock(self.viewport.class());
    }
}

impl<S: DismissScheduler> Drop for HeaderMachine<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
