#![forbid(unsafe_code)]

//! Stable references to focusable controls and rendered content regions.
//!
//! The coordinator never owns UI elements. The rendering layer allocates one
//! id per focusable element (and one per disclosure content region) and keeps
//! the mapping onto its real widget tree on its own side of the boundary.
//! Ids are plain integers so bindings stay `Copy` and can be re-issued every
//! render pass without lifetime coupling.

use core::fmt;

/// Identifies a single focusable control.
///
/// Ids are opaque to the coordinator; two controls are the same element
/// exactly when their ids compare equal. How ids map onto concrete widgets
/// is the rendering layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    /// Create a control id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

/// Identifies the rendered content region of a disclosure group.
///
/// Containment ("does this control currently sit inside that region?") is
/// answered by the host at query time, because only the host knows the
/// current element tree. The region id itself carries no structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    /// Create a region id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}
