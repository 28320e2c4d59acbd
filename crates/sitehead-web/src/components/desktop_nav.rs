//! Top-level navigation links for desktop widths

use crate::components::header::use_header_theme;
use crate::control::use_header_control;
use leptos::prelude::*;
use sitehead_core::{NavItem, NavigationSet};
use std::sync::Arc;

/// Row of top-level items; hovering or focusing one opens its flyout
#[component]
pub fn DesktopNav(navigation: Arc<NavigationSet>) -> impl IntoView {
    let control = use_header_control();
    let decision = control.decision();

    let items = navigation.items().to_vec();

    view! {
        <Show when=move || decision.with(|d| !d.is_mobile)>
            <nav class="desktop-nav" aria-label="Primary">
                {items
                    .clone()
                    .into_iter()
                    .map(|item| view! { <TopLevelLink item=item /> })
                    .collect_view()}
            </nav>
        </Show>
    }
}

#[component]
fn TopLevelLink(item: NavItem) -> impl IntoView {
    let control = use_header_control();
    let decision = control.decision();
    let theme = use_header_theme();

    let has_children = item.has_children();
    let href = item.href.clone().unwrap_or_else(|| format!("/{}", item.slug));
    let label = item.label.clone();
    let enter_slug = item.slug.clone();
    let focus_slug = item.slug.clone();
    let active_slug = item.slug;

    let color = move || {
        if decision.with(|d| d.is_subnav_open_for(&active_slug)) {
            theme.hover.clone()
        } else {
            theme.color.clone()
        }
    };

    view! {
        <a
            class="nav-item"
            href=href
            style:color=color
            aria-haspopup=has_children.to_string()
            on:mouseenter=move |_| control.enter_item(&enter_slug)
            on:focus=move |_| control.focus_item(&focus_slug)
            on:click=move |_| control.navigate()
        >
            {label}
        </a>
    }
}
