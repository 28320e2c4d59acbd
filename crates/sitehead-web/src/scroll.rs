//! Page body scroll lock for the browser

use leptos::web_sys::window;
use once_cell::sync::Lazy;
use sitehead_core::{ScrollLock, ScrollSurface};
use std::sync::Arc;

/// `<body>` of the current document. Locking sets `overflow: hidden`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn set_scroll_locked(&self, locked: bool) {
        let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => body,
            None => {
                leptos::logging::warn!("No document body, scroll lock not applied");
                return;
            }
        };

        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };

        if let Err(e) = result {
            leptos::logging::error!("Failed to update body overflow: {:?}", e);
        }
    }
}

/// The document has one body, so every header shares one lock
static BODY_SCROLL_LOCK: Lazy<Arc<ScrollLock>> = Lazy::new(|| ScrollLock::new(BodyScroll));

pub fn body_scroll_lock() -> Arc<ScrollLock> {
    Arc::clone(&BODY_SCROLL_LOCK)
}
