//! Site header: nav bar, subnav flyout, and mobile slide-down menu

use crate::components::{DesktopNav, MobileMenu, MobileMenuButton, SubNav};
use crate::control::HeaderControl;
use crate::viewport::use_viewport;
use leptos::prelude::*;
use sitehead_core::{HeaderConfig, HeaderContext, HeaderTheme, NavigationSet};
use std::sync::Arc;

/// Inline style for the header bar from the theme colors
pub fn header_bar_style(theme: &HeaderTheme) -> String {
    format!(
        "background-color: {}; border-bottom: 1px solid {}; color: {};",
        theme.bg, theme.border_color, theme.color
    )
}

/// Responsive site header
///
/// Hover over the whole composite element (bar, flyout and mobile panel)
/// counts as hovering the header.
#[component]
pub fn Header(
    navigation: Arc<NavigationSet>,
    #[prop(optional)] config: Option<HeaderConfig>,
    #[prop(optional, into)] logo: Option<ViewFn>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let context = config.context.clone();
    let bar_style = header_bar_style(&context.theme);
    provide_context(context);

    let control = HeaderControl::mount(Arc::clone(&navigation), config);
    provide_context(control);
    use_viewport(control);

    view! {
        <div
            class="site-header"
            on:mouseenter=move |_| control.apply(|m| m.pointer_enter())
            on:mouseleave=move |_| control.apply(|m| m.pointer_leave())
            on:focusin=move |_| control.apply(|m| m.focus_in())
            on:focusout=move |_| control.apply(|m| m.focus_out())
        >
            <header class="header-bar" style=bar_style>
                <div class="header-wrapper">
                    <a
                        href="/"
                        class="header-logo"
                        aria-label="Link to homepage"
                        on:click=move |_| control.navigate()
                    >
                        {logo.map(|logo| logo.run())}
                    </a>
                    <DesktopNav navigation=Arc::clone(&navigation) />
                    <MobileMenuButton />
                </div>
            </header>

            <MobileMenu navigation=navigation />
            <SubNav />
        </div>
    }
}

/// Hook to access the header theme from any descendant
pub fn use_header_theme() -> HeaderTheme {
    expect_context::<HeaderContext>().theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bar_style_uses_theme() {
        let style = header_bar_style(&HeaderTheme::ink());
        assert!(style.contains("background-color: #0f1117"));
        assert!(style.contains("border-bottom: 1px solid #22232b"));
    }
}
