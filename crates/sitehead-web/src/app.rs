//! Demo app mounting the header with bundled navigation

use crate::components::Header;
use leptos::prelude::*;
use sitehead_core::{CoreError, HeaderConfig, NavigationSet};
use std::sync::Arc;

const BUNDLED_NAVIGATION: &str = include_str!("../static/navigation.json");

/// Navigation shipped with the demo page
pub fn bundled_navigation() -> Result<NavigationSet, CoreError> {
    NavigationSet::from_json_str(BUNDLED_NAVIGATION)
}

#[component]
pub fn App() -> impl IntoView {
    let navigation = bundled_navigation().unwrap_or_else(|e| {
        leptos::logging::error!("Invalid bundled navigation: {}", e);
        NavigationSet::default()
    });

    view! {
        <Header
            navigation=Arc::new(navigation)
            config=HeaderConfig::default()
            logo=|| view! { <span class="logo-text">"sitehead"</span> }
        />
        <main class="content">
            <p>"Hover a section to open its menu; narrow the window for the mobile layout."</p>
        </main>
    }
}
