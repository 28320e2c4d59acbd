//! Header configuration and the read-only context handed to descendants

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default mobile breakpoint: 52em at a 16px root font size
pub const DEFAULT_BREAKPOINT_PX: u32 = 832;

/// Delay between losing hover and closing the subnav
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 100;

/// Header color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light background (default)
    #[default]
    Light,
    /// Dark "ink" background
    Ink,
}

/// Colors consumed by header descendants. Values are opaque CSS colors; the
/// header never computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderTheme {
    pub scheme: ColorScheme,
    pub bg: String,
    pub border_color: String,
    pub color: String,
    pub hover: String,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl HeaderTheme {
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            bg: "#ffffff".to_string(),
            border_color: "#e5e5ec".to_string(),
            color: "#0f1117".to_string(),
            hover: "#3700ff".to_string(),
        }
    }

    pub fn ink() -> Self {
        Self {
            scheme: ColorScheme::Ink,
            bg: "#0f1117".to_string(),
            border_color: "#22232b".to_string(),
            color: "#ffffff".to_string(),
            hover: "#c7c9d6".to_string(),
        }
    }
}

/// Read-only context exposed to everything rendered inside the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderContext {
    pub theme: HeaderTheme,
    /// Rendered header height; the mobile panel is positioned below it
    pub header_height_px: u32,
}

impl Default for HeaderContext {
    fn default() -> Self {
        Self {
            theme: HeaderTheme::default(),
            header_height_px: 72,
        }
    }
}

/// Header behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Widths below this are classified as mobile
    pub breakpoint_px: u32,

    /// Hover-loss debounce before the subnav closes
    pub dismiss_delay_ms: u64,

    /// Close an open desktop subnav when the viewport becomes mobile.
    /// `false` leaves clearing to whoever renders the mobile layout.
    pub clear_subnav_on_mobile: bool,

    pub context: HeaderContext,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MS,
            clear_subnav_on_mobile: true,
            context: HeaderContext::default(),
        }
    }
}

impl HeaderConfig {
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.breakpoint_px == 0 {
            return Err(CoreError::InvalidConfig {
                message: "breakpoint_px must be greater than zero".to_string(),
            });
        }
        if self.dismiss_delay_ms == 0 {
            return Err(CoreError::InvalidConfig {
                message: "dismiss_delay_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(content).map_err(|source| CoreError::TomlParse {
            path: "<inline>".into(),
            message: source.message().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
