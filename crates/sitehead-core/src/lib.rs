//! sitehead-core - Core library for sitehead
//!
//! Navigation model, viewport/hover tracking, subnav and mobile menu
//! controllers, and the header visibility state machine that ties them
//! together. With the `runtime` feature (default) it also ships a tokio
//! driver for hosting a header outside the browser.

pub mod config;
pub mod decision;
pub mod dismiss;
pub mod error;
pub mod hover;
pub mod machine;
pub mod mobile_menu;
pub mod nav;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod scroll_lock;
pub mod subnav;
pub mod viewport;

pub use config::{ColorScheme, HeaderConfig, HeaderContext, HeaderTheme};
pub use decision::{Regime, VisibilityDecision};
pub use dismiss::{DismissHandle, DismissScheduler, DismissToken, ManualScheduler};
pub use error::CoreError;
pub use machine::HeaderMachine;
pub use nav::{NavItem, NavigationSet};
pub use scroll_lock::{ScrollLock, ScrollLockGuard, ScrollSurface};
pub use viewport::{classify, ViewportClass};
