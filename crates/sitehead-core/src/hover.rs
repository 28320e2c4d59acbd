//! Pointer hover and focus-within tracking for the header region

/// Whether the header is currently engaged by pointer or keyboard.
///
/// No debouncing happens here; the state machine debounces the consequence
/// of losing hover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    pointer_inside: bool,
    focus_within: bool,
}

impl HoverTracker {
    pub fn hovered(&self) -> bool {
        self.pointer_inside || self.focus_within
    }

    /// Returns true when `hovered()` changed
    pub fn set_pointer(&mut self, inside: bool) -> bool {
        let before = self.hovered();
        self.pointer_inside = inside;
        before != self.hovered()
    }

    /// Returns true when `hovered()` changed
    pub fn set_focus(&mut self, within: bool) -> bool {
        let before = self.hovered();
        self.focus_within = within;
        before != self.hovered()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_keeps_header_engaged() {
        let mut hover = HoverTracker::default();
        assert!(hover.set_pointer(true));
        assert!(!hover.set_focus(true));
        assert!(!hover.set_pointer(false));
        assert!(hover.hovered());
        assert!(hover.set_focus(false));
        assert!(!hover.hovered());
    }
}
