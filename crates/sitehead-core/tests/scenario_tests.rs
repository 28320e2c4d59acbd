//! Integration tests for header visibility scenarios

use sitehead_core::{
    HeaderConfig, HeaderMachine, ManualScheduler, NavItem, NavigationSet, Regime, ScrollLock,
    ScrollSurface,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn learn_build() -> Arc<NavigationSet> {
    Arc::new(
        NavigationSet::new(vec![
            NavItem::new("learn", "Learn").with_children(vec![
                NavItem::new("learn/a", "A"),
                NavItem::new("learn/b", "B"),
            ]),
            NavItem::new("build", "Build"),
        ])
        .unwrap(),
    )
}

struct Header {
    machine: HeaderMachine<ManualScheduler>,
    clock: ManualScheduler,
    lock: Arc<ScrollLock>,
}

impl Header {
    fn mount(width: u32) -> Self {
        let clock = ManualScheduler::new();
        let lock = ScrollLock::detached();
        let mut machine = HeaderMachine::new(
            learn_build(),
            HeaderConfig::default(),
            Arc::clone(&lock),
            clock.clone(),
        );
        machine.resize(width);
        Self {
            machine,
            clock,
            lock,
        }
    }

    fn wait(&mut self, ms: u64) {
        for token in self.clock.advance(Duration::from_millis(ms)) {
            self.machine.dismiss_elapsed(token);
        }
    }

    fn items(&self) -> Vec<String> {
        self.machine
            .decision()
            .subnav_items
            .into_iter()
            .map(|i| i.slug)
            .collect()
    }
}

#[test]
fn test_scenario_a_hover_then_leave_closes() {
    let mut header = Header::mount(1280);

    header.machine.enter_item("learn");
    assert_eq!(header.items(), vec!["learn/a", "learn/b"]);

    header.machine.pointer_leave();
    header.wait(100);

    let decision = header.machine.decision();
    assert_eq!(decision.subnav_open_slug, None);
    assert!(decision.subnav_items.is_empty());
    assert_eq!(header.machine.regime(), Regime::Idle);
}

#[test]
fn test_scenario_b_quick_reentry_keeps_open() {
    let mut header = Header::mount(1280);

    header.machine.enter_item("learn");
    header.machine.pointer_leave();
    header.wait(50);
    header.machine.enter_item("learn");
    header.wait(200);

    assert_eq!(header.machine.regime(), Regime::DesktopSubnavOpen);
    assert_eq!(header.items(), vec!["learn/a", "learn/b"]);
}

#[test]
fn test_scenario_c_mobile_toggle_locks_scroll() {
    let mut header = Header::mount(375);

    header.machine.toggle_mobile_menu();
    assert!(header.machine.decision().mobile_menu_open);
    assert_eq!(header.lock.holder(), Some(header.machine.id()));
    assert_eq!(header.machine.regime(), Regime::MobileMenuOpen);

    header.machine.toggle_mobile_menu();
    assert!(!header.machine.decision().mobile_menu_open);
    assert!(!header.lock.is_locked());
}

#[test]
fn test_scenario_d_childless_item_opens_empty() {
    let mut header = Header::mount(1280);

    header.machine.enter_item("build");

    let decision = header.machine.decision();
    assert_eq!(decision.subnav_open_slug.as_deref(), Some("build"));
    assert!(decision.subnav_items.is_empty());
}

#[test]
fn test_at_most_one_pending_timer() {
    let mut header = Header::mount(1280);
    header.machine.enter_item("learn");

    for _ in 0..25 {
        header.machine.pointer_leave();
        assert!(header.clock.pending() <= 1);
        header.machine.pointer_enter();
        assert!(header.clock.pending() <= 1);
    }
    header.machine.pointer_leave();
    header.machine.enter_item("build");
    header.machine.pointer_leave();
    assert_eq!(header.clock.pending(), 1);
}

#[test]
fn test_reentry_on_other_item_restarts_delay() {
    let mut header = Header::mount(1280);
    header.machine.focus_item("learn");
    header.machine.focus_out();
    let first = header.machine.pending_dismiss().unwrap();

    header.wait(60);
    header.machine.enter_item("build");
    header.machine.pointer_leave();
    let second = header.machine.pending_dismiss().unwrap();
    assert_ne!(first, second);

    // Original deadline passes without closing
    header.wait(60);
    assert!(header.machine.subnav().is_open());

    header.wait(40);
    assert!(!header.machine.subnav().is_open());
}

#[test]
fn test_unknown_slug_degrades_to_empty() {
    let mut header = Header::mount(1280);
    header.machine.enter_item("retired-section");

    let decision = header.machine.decision();
    assert_eq!(decision.subnav_open_slug.as_deref(), Some("retired-section"));
    assert!(decision.subnav_items.is_empty());
}

#[test]
fn test_scroll_lock_tracks_viewport_and_menu() {
    let mut header = Header::mount(1280);

    header.machine.toggle_mobile_menu();
    assert!(!header.lock.is_locked());

    header.machine.resize(600);
    assert!(header.lock.is_locked());

    header.machine.resize(1024);
    assert!(!header.lock.is_locked());
    let decision = header.machine.decision();
    assert!(decision.mobile_menu_open, "menu stays open until closed");
    assert!(!decision.mobile_panel_visible());

    header.machine.resize(600);
    assert!(header.lock.is_locked());

    header.machine.set_mobile_menu_open(false);
    assert!(!header.lock.is_locked());
}

#[test]
fn test_drop_mid_dismiss_cancels_timer() {
    let header = Header::mount(1280);
    let Header {
        mut machine,
        clock,
        lock,
    } = header;

    machine.enter_item("learn");
    machine.pointer_leave();
    assert_eq!(clock.pending(), 1);

    drop(machine);
    assert_eq!(clock.pending(), 0);
    assert!(!lock.is_locked());
}

#[derive(Clone, Default)]
struct Body {
    overflow_hidden: Arc<AtomicBool>,
}

impl ScrollSurface for Body {
    fn set_scroll_locked(&self, locked: bool) {
        self.overflow_hidden.store(locked, Ordering::SeqCst);
    }
}

#[test]
fn test_two_headers_share_one_lock() {
    let body = Body::default();
    let lock = ScrollLock::new(body.clone());

    let mut first = HeaderMachine::new(
        learn_build(),
        HeaderConfig::default(),
        Arc::clone(&lock),
        ManualScheduler::new(),
    );
    let mut second = HeaderMachine::new(
        learn_build(),
        HeaderConfig::default(),
        Arc::clone(&lock),
        ManualScheduler::new(),
    );
    first.resize(320);
    second.resize(320);

    first.toggle_mobile_menu();
    second.toggle_mobile_menu();
    assert_eq!(lock.holder(), Some(first.id()));
    assert!(!second.mobile_menu().holds_scroll_lock());

    drop(first);
    assert!(!body.overflow_hidden.load(Ordering::SeqCst));

    // Next evaluation picks the lock up
    second.resize(321);
    assert_eq!(lock.holder(), Some(second.id()));
    assert!(body.overflow_hidden.load(Ordering::SeqCst));
}
