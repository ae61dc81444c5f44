#![forbid(unsafe_code)]

//! Host capability boundary.
//!
//! The coordinator is a pure behavioral unit: it never walks an element tree
//! and never owns input focus. Everything it needs from the surrounding UI
//! runtime is expressed through [`FocusHost`], so the same logic runs
//! unchanged under a real renderer or a test double.

use crate::control::{ControlId, RegionId};

/// Capabilities the rendering layer supplies to the coordinator.
///
/// # Contract
///
/// - [`focus_target`](FocusHost::focus_target) reports focus ownership *at
///   call time*. Deferred visibility checks depend on being invoked only
///   after every focus transition of the current turn has dispatched; the
///   host must not cache a value from earlier in the turn.
/// - [`contains`](FocusHost::contains) answers containment against the
///   current element tree. A control that was unmounted after the query was
///   scheduled simply reports `false`.
/// - [`release_focus`](FocusHost::release_focus) removes focus from a
///   control if it currently holds it. This is fire-and-forget: the host
///   must not re-dispatch a blur event for a programmatic release. The
///   coordinator performs the corresponding bookkeeping itself before the
///   next turn runs.
pub trait FocusHost {
    /// The control that currently owns input focus, if any.
    fn focus_target(&self) -> Option<ControlId>;

    /// Whether `control` currently lies inside `region`.
    fn contains(&self, region: RegionId, control: ControlId) -> bool;

    /// Programmatically remove focus from `control`.
    ///
    /// No-op when the control does not hold focus or no longer exists.
    fn release_focus(&mut self, control: ControlId);
}
