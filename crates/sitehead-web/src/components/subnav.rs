//! Subnav flyout listing the open item's children

use crate::components::header::use_header_theme;
use crate::control::use_header_control;
use leptos::prelude::*;

#[component]
pub fn SubNav() -> impl IntoView {
    let control = use_header_control();
    let decision = control.decision();
    let theme = use_header_theme();

    view! {
        <Show when=move || decision.with(|d| d.subnav_panel_visible())>
            <div
                class="subnav"
                style:background-color=theme.bg.clone()
                style:border-color=theme.border_color.clone()
            >
                <ul class="subnav-list">
                    <For
                        each=move || decision.with(|d| d.subnav_items.clone())
                        key=|item| item.slug.clone()
                        children=move |item| {
                            let href = item.href.clone().unwrap_or_else(|| format!("/{}", item.slug));
                            view! {
                                <li class="subnav-item">
                                    <a class="subnav-link" href=href on:click=move |_| control.navigate()>
                                        {item.label}
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
