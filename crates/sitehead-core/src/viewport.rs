//! Viewport classification against a single breakpoint

use serde::{Deserialize, Serialize};

/// Layout class of the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Mobile,
    #[default]
    NotMobile,
}

impl ViewportClass {
    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

/// Classify a viewport width. Widths strictly below `threshold` are mobile.
pub fn classify(width: u32, threshold: u32) -> ViewportClass {
    if width < threshold {
        ViewportClass::Mobile
    } else {
        ViewportClass::NotMobile
    }
}

/// Breakpoint plus the last classification seen
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    threshold: u32,
    class: ViewportClass,
}

impl Viewport {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            class: ViewportClass::default(),
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Re-classify for a new width. Returns true when the class changed.
    pub fn update(&mut self, width: u32) -> bool {
        self.set(classify(width, self.threshold))
    }

    /// Accept a class computed elsewhere (e.g. a CSS media query)
    pub fn set(&mut self, class: ViewportClass) -> bool {
        let changed = self.class != class;
        self.class = class;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify(831, 832), ViewportClass::Mobile);
        assert_eq!(classify(832, 832), ViewportClass::NotMobile);
        assert_eq!(classify(0, 832), ViewportClass::Mobile);
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut viewport = Viewport::new(800);
        assert!(!viewport.update(1200));
        assert!(viewport.update(400));
        assert!(!viewport.update(500));
        assert!(viewport.class().is_mobile());
    }
}
