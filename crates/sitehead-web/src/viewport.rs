//! Viewport width signal

use crate::control::HeaderControl;
use leptos::prelude::*;
use leptos::web_sys::window;

fn viewport_width() -> Option<u32> {
    let width = window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Feed the current width to the header on mount and on every resize
pub fn use_viewport(control: HeaderControl) {
    Effect::new(move |_| {
        if let Some(width) = viewport_width() {
            control.apply(|m| m.resize(width));
        }
    });

    let listener = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            control.apply(|m| m.resize(width));
        }
    });

    on_cleanup(move || listener.remove());
}
