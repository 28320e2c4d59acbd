//! sitehead-web - Leptos components for the sitehead responsive header

pub mod app;
pub mod components;
pub mod control;
pub mod scroll;
pub mod viewport;

pub use app::App;
pub use components::Header;
pub use control::{use_header_control, HeaderControl};
