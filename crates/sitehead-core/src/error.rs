//! Error types for sitehead-core
//!
//! State transitions never fail. Errors only come from the edges: loading and
//! validating navigation data, reading configuration, and contention on the
//! shared scroll lock.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sitehead operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format for {path} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Navigation Errors
    // ===================
    #[error("Duplicate navigation slug: {slug}")]
    DuplicateSlug { slug: String },

    #[error("Navigation item '{slug}' is nested too deep (max depth is 2)")]
    NavTooDeep { slug: String },

    #[error("Navigation item at position {position} has an empty slug")]
    EmptySlug { position: usize },

    #[error("Navigation item '{slug}' has an empty label")]
    EmptyLabel { slug: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Runtime Errors
    // ===================
    #[error("Scroll lock already held by header instance {holder}")]
    ScrollLockHeld { holder: u64 },

    #[error("Header runtime has shut down")]
    RuntimeClosed,
}

impl CoreError {
    /// True for errors raised while validating navigation content
    pub fn is_navigation_error(&self) -> bool {
        matches!(
            self,
            CoreError::DuplicateSlug { .. }
                | CoreError::NavTooDeep { .. }
                | CoreError::EmptySlug { .. }
                | CoreError::EmptyLabel { .. }
        )
    }
}
