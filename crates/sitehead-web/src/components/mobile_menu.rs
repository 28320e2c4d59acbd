//! Mobile slide-down menu and its toggle button

use crate::components::header::use_header_theme;
use crate::control::use_header_control;
use leptos::prelude::*;
use sitehead_core::{HeaderContext, NavItem, NavigationSet};
use std::sync::Arc;

/// Position and size of the panel below a header of `header_height` px
pub fn mobile_panel_geometry(header_height: u32) -> (String, String) {
    let top = format!("{}px", header_height.saturating_sub(1));
    let height = format!("calc(100vh - {}px)", header_height + 1);
    (top, height)
}

/// Hamburger / close button, shown on mobile only
#[component]
pub fn MobileMenuButton() -> impl IntoView {
    let control = use_header_control();
    let decision = control.decision();
    let open = move || decision.with(|d| d.mobile_menu_open);

    view! {
        <Show when=move || decision.with(|d| d.is_mobile)>
            <button
                class="mobile-menu-button"
                on:click=move |_| control.toggle_mobile_menu()
                aria-label="Toggle navigation menu"
                aria-expanded=move || open().to_string()
            >
                <span class="mobile-menu-icon">{move || if open() { "✕" } else { "☰" }}</span>
            </button>
        </Show>
    }
}

/// Full-height panel listing every top-level item with its children inline
#[component]
pub fn MobileMenu(navigation: Arc<NavigationSet>) -> impl IntoView {
    let control = use_header_control();
    let decision = control.decision();
    let theme = use_header_theme();
    let header_height = expect_context::<HeaderContext>().header_height_px;
    let (top, height) = mobile_panel_geometry(header_height);

    let visible = move || decision.with(|d| d.mobile_panel_visible());

    view! {
        <div
            class="mobile-menu"
            class:mobile-menu-open=visible
            style:top=top
            style:height=height.clone()
            style:max-height=height
            style:background-color=theme.bg
            style:pointer-events=move || if visible() { "unset" } else { "none" }
            aria-hidden=move || (!visible()).to_string()
        >
            <nav class="mobile-nav" aria-label="Mobile">
                {navigation
                    .items()
                    .iter()
                    .cloned()
                    .map(|item| view! { <MobileSection item=item /> })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[component]
fn MobileSection(item: NavItem) -> impl IntoView {
    let control = use_header_control();
    let href = item.href.clone().unwrap_or_else(|| format!("/{}", item.slug));

    view! {
        <div class="mobile-section">
            <a class="mobile-section-link" href=href on:click=move |_| control.navigate()>
                {item.label.clone()}
            </a>
            <ul class="mobile-section-children">
                {item
                    .children
                    .into_iter()
                    .map(|child| {
                        let href = child.href.clone().unwrap_or_else(|| format!("/{}", child.slug));
                        view! {
                            <li>
                                <a class="mobile-child-link" href=href on:click=move |_| control.navigate()>
                                    {child.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
