#![forbid(unsafe_code)]

//! Canonical pointer event type.
//!
//! A disclosure label doubles as a link or button, so activating it has a
//! default action the coordinator must suppress (a label click toggles the
//! group, it never navigates or submits). [`PointerEvent`] carries that
//! single bit across the dispatch boundary: the rendering layer constructs
//! one per activation, passes it to the coordinator, and skips its default
//! action afterwards when the flag is set.

/// A pointer activation delivered to a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    default_prevented: bool,
}

impl PointerEvent {
    /// Create a fresh activation with the default action still pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the default action of this activation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action has been suppressed.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl Default for PointerEvent {
    fn default() -> Self {
        Self::new()
    }
}
