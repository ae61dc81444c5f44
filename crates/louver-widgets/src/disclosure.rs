#![forbid(unsafe_code)]

//! Per-group disclosure state.
//!
//! A disclosure group is one label control plus the child controls rendered
//! inside its content region. The group's visibility state is two bits:
//! whether the group is forced visible, and whether it was pinned open by an
//! explicit label click. Everything else the coordinator needs (current
//! focus ownership, containment) is queried from the host at decision time,
//! never stored here.

use core::fmt;

use bitflags::bitflags;
use louver_core::control::{ControlId, RegionId};

bitflags! {
    /// Packed visibility state of one disclosure group.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisclosureFlags: u8 {
        /// The group's content renders visible regardless of hover
        /// presentation.
        const FORCED_OPEN = 0b01;
        /// The group was opened by an explicit label click and stays open
        /// until a second click or until the label loses focus.
        const PINNED = 0b10;
    }
}

impl Default for DisclosureFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Three-state summary of a group's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not forced visible; hover presentation alone decides.
    Closed,
    /// Forced visible because a control inside the group holds focus.
    OpenByFocus,
    /// Forced visible and pinned by an explicit label click.
    OpenPinned,
}

impl DisclosureFlags {
    /// Collapse the flag pair into the three observable states.
    ///
    /// `PINNED` without `FORCED_OPEN` does not arise from coordinator
    /// dispatch (a pin requires a focused label, which forces the group
    /// open); if present it still reads as closed.
    #[must_use]
    pub const fn visibility(self) -> Visibility {
        if !self.contains(Self::FORCED_OPEN) {
            Visibility::Closed
        } else if self.contains(Self::PINNED) {
            Visibility::OpenPinned
        } else {
            Visibility::OpenByFocus
        }
    }
}

/// State record for one mounted disclosure group.
#[derive(Debug, Clone)]
pub struct DisclosureState {
    id: String,
    label: ControlId,
    content: RegionId,
    flags: DisclosureFlags,
}

impl DisclosureState {
    pub(crate) fn new(id: String, label: ControlId, content: RegionId) -> Self {
        Self {
            id,
            label,
            content,
            flags: DisclosureFlags::empty(),
        }
    }

    /// Diagnostic name supplied at mount.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The group's label control.
    #[must_use]
    pub fn label(&self) -> ControlId {
        self.label
    }

    /// The group's content region.
    #[must_use]
    pub fn content(&self) -> RegionId {
        self.content
    }

    /// Current packed flags.
    #[must_use]
    pub fn flags(&self) -> DisclosureFlags {
        self.flags
    }

    /// Current visibility summary.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.flags.visibility()
    }

    pub(crate) fn force_open(&mut self) {
        self.flags.insert(DisclosureFlags::FORCED_OPEN);
    }

    pub(crate) fn close(&mut self) {
        self.flags.remove(DisclosureFlags::FORCED_OPEN);
    }

    pub(crate) fn set_pin(&mut self, pinned: bool) {
        self.flags.set(DisclosureFlags::PINNED, pinned);
    }

    pub(crate) fn clear_pin(&mut self) {
        self.flags.remove(DisclosureFlags::PINNED);
    }
}

impl fmt::Display for DisclosureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.id, self.visibility())
    }
}
