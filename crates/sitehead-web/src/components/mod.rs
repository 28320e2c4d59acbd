//! Leptos UI components

mod desktop_nav;
pub(crate) mod header;
mod mobile_menu;
mod subnav;

pub use desktop_nav::DesktopNav;
pub use header::{header_bar_style, use_header_theme, Header};
pub use mobile_menu::{mobile_panel_geometry, MobileMenu, MobileMenuButton};
pub use subnav::SubNav;
