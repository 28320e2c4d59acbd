//! Integration tests for the tokio header runtime (paused clock)

use sitehead_core::runtime::{self, HeaderEvent};
use sitehead_core::{CoreError, HeaderConfig, NavItem, NavigationSet, Regime, ScrollLock};
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

fn slugs(items: &[NavItem]) -> Vec<&str> {
    items.iter().map(|i| i.slug.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_after_delay() {
    let (header, _task) = runtime::spawn(learn_build(), HeaderConfig::default(), ScrollLock::detached());
    header.send(HeaderEvent::Resize(1440)).unwrap();
    header.send(HeaderEvent::EnterItem("learn".to_string())).unwrap();

    let decision = header.decision().await.unwrap();
    assert_eq!(slugs(&decision.subnav_items), vec!["learn/a", "learn/b"]);

    header.send(HeaderEvent::PointerLeave).unwrap();
    let snapshot = header.snapshot().await.unwrap();
    assert_eq!(snapshot.regime, Regime::DesktopSubnavDismissing);

    tokio::time::sleep(Duration::from_millis(150)).await;

    let snapshot = header.snapshot().await.unwrap();
    assert_eq!(snapshot.regime, Regime::Idle);
    assert!(snapshot.decision.subnav_items.is_empty());
    assert!(snapshot.pending_dismiss.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_reentry_within_delay_keeps_open() {
    let (header, _task) = runtime::spawn(learn_build(), HeaderConfig::default(), ScrollLock::detached());
    header.send(HeaderEvent::EnterItem("learn".to_string())).unwrap();
    header.send(HeaderEvent::PointerLeave).unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    header.send(HeaderEvent::PointerEnter).unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;

    let snapshot = header.snapshot().await.unwrap();
    assert_eq!(snapshot.regime, Regime::DesktopSubnavOpen);
    assert_eq!(slugs(&snapshot.decision.subnav_items), vec!["learn/a", "learn/b"]);
}

#[tokio::test(start_paused = true)]
async fn test_mobile_menu_scroll_lock() {
    let lock = ScrollLock::detached();
    let (header, _task) = runtime::spawn(learn_build(), HeaderConfig::default(), Arc::clone(&lock));
    header.send(HeaderEvent::Resize(375)).unwrap();
    header.send(HeaderEvent::ToggleMobileMenu).unwrap();

    let snapshot = header.snapshot().await.unwrap();
    assert!(snapshot.decision.mobile_menu_open);
    assert!(snapshot.holds_scroll_lock);
    assert!(lock.is_locked());

    header.send(HeaderEvent::ToggleMobileMenu).unwrap();
    let snapshot = header.snapshot().await.unwrap();
    assert!(!snapshot.decision.mobile_menu_open);
    assert!(!lock.is_locked());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_tears_down() {
    let lock = ScrollLock::detached();
    let (header, task) = runtime::spawn(learn_build(), HeaderConfig::default(), Arc::clone(&lock));
    header.send(HeaderEvent::Resize(375)).unwrap();
    header.send(HeaderEvent::ToggleMobileMenu).unwrap();
    header.snapshot().await.unwrap();
    assert!(lock.is_locked());

    drop(header);
    task.await.unwrap();
    assert!(!lock.is_locked());
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_changes() {
    let (header, _task) = runtime::spawn(learn_build(), HeaderConfig::default(), ScrollLock::detached());
    let mut decisions = header.subscribe();

    header.send(HeaderEvent::EnterItem("build".to_string())).unwrap();
    decisions.changed().await.unwrap();
    assert_eq!(
        decisions.borrow_and_update().subnav_open_slug.as_deref(),
        Some("build")
    );
}

#[tokio::test(start_paused = true)]
async fn test_closed_runtime_reports_error() {
    let (header, task) = runtime::spawn(learn_build(), HeaderConfig::default(), ScrollLock::detached());
    task.abort();
    let _ = task.await;

    let err = header.send(HeaderEvent::Navigate).unwrap_err();
    assert!(matches!(err, CoreError::RuntimeClosed));
}
