#![forbid(unsafe_code)]

//! Focus-driven visibility coordination for disclosure groups.
//!
//! [`FocusCoordinator`] decides, from a stream of focus, blur, and click
//! events on a label and an arbitrary set of child controls, whether each
//! group must render forced-visible, and implements click-to-toggle
//! semantics on the label that interact correctly with focus-driven
//! visibility.
//!
//! # The timing race
//!
//! Blur and focus events for one interaction arrive as separate,
//! same-turn-adjacent tasks: tabbing from one child to the next fires blur
//! on the old child before focus on the new one. Reading focus ownership
//! inside the blur handler would therefore close the group during an
//! intra-group transfer. Blur handlers only *enqueue* a check; the host
//! calls [`run_deferred`](FocusCoordinator::run_deferred) once the current
//! turn's tasks have all dispatched, and the check re-reads focus ownership
//! at that point.
//!
//! # Invariants
//!
//! 1. A group is forced open whenever its label or any control inside its
//!    content region holds focus; it closes only after a deferred check
//!    confirms focus has left both.
//! 2. A pin can only be held while the label is focused: any label blur
//!    clears it unconditionally.
//! 3. Dispatch order is event-queue order; nothing here reorders events.
//!
//! # Failure modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Dispatch through a stale binding | No-op, counted |
//! | Deferred check for an unmounted group | Dropped |
//! | Click routed through an item binding | No-op, counted |
//! | Group with zero children | Valid single-control disclosure |

use core::fmt;
use std::collections::{HashMap, VecDeque};

use louver_core::control::{ControlId, RegionId};
use louver_core::event::PointerEvent;
use louver_core::host::FocusHost;

use crate::disclosure::{DisclosureFlags, DisclosureState, Visibility};

/// Opaque handle to a mounted disclosure group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Which control of a group a binding is installed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// The disclosure label.
    Label,
    /// A child control inside the content region.
    Item,
}

/// A dispatch target bound to one group's state.
///
/// Bindings are plain copyable values: the rendering layer attaches them to
/// however many controls exist this render pass and forwards focus, blur,
/// and click events through them. The coordinator holds no list of children,
/// so the child collection may change freely between passes. Bindings from
/// earlier passes, or bindings that outlive their group, are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    group: GroupId,
    role: ControlRole,
}

impl Binding {
    /// The group this binding dispatches into.
    #[must_use]
    pub const fn group(self) -> GroupId {
        self.group
    }

    /// The role of the control this binding is installed on.
    #[must_use]
    pub const fn role(self) -> ControlRole {
        self.role
    }
}

/// The two bindings to install for one group each render pass.
#[derive(Debug, Clone, Copy)]
pub struct GroupBindings {
    /// Install on the label control (focus, blur, click).
    pub label: Binding,
    /// Install on every child control in the content region (focus, blur).
    pub item: Binding,
}

/// Everything needed to mount a group.
#[derive(Debug, Clone)]
pub struct GroupSpec {
    /// Diagnostic name, unique per mounted instance.
    pub id: String,
    /// The label control.
    pub label: ControlId,
    /// The region the child controls render into.
    pub content: RegionId,
}

impl GroupSpec {
    /// Convenience constructor.
    #[must_use]
    pub fn new(id: impl Into<String>, label: ControlId, content: RegionId) -> Self {
        Self {
            id: id.into(),
            label,
            content,
        }
    }
}

/// Coordinates forced visibility for any number of disclosure groups.
///
/// Single-threaded by design: all dispatch runs to completion before the
/// next queued task, and ordering is entirely the host event queue's.
#[derive(Debug, Default)]
pub struct FocusCoordinator {
    groups: HashMap<GroupId, DisclosureState>,
    /// Visibility checks scheduled by blur dispatch, drained by the host
    /// after the current turn.
    pending: VecDeque<GroupId>,
    next_group: u64,
    /// Diagnostic: dispatches dropped by the stale/mis-wire guards.
    dropped_dispatches: u64,
}

impl FocusCoordinator {
    /// Create a coordinator with no groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Mount a group. Both flags start false (the group is closed).
    pub fn mount(&mut self, spec: GroupSpec) -> GroupId {
        let group = GroupId(self.next_group);
        self.next_group += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(group = %group, id = %spec.id, "mount disclosure group");
        self.groups
            .insert(group, DisclosureState::new(spec.id, spec.label, spec.content));
        group
    }

    /// Unmount a group.
    ///
    /// Pending visibility checks against it become no-ops, and bindings that
    /// reference it go inert.
    pub fn unmount(&mut self, group: GroupId) {
        #[cfg(feature = "tracing")]
        tracing::debug!(group = %group, "unmount disclosure group");
        self.groups.remove(&group);
    }

    /// The bindings to install for `group` this render pass.
    ///
    /// Callable afresh every pass; bindings are values, so nothing leaks
    /// from prior passes. Requesting bindings for an unmounted group is
    /// allowed — dispatching through them is simply a no-op.
    #[must_use]
    pub fn bindings(&self, group: GroupId) -> GroupBindings {
        GroupBindings {
            label: Binding {
                group,
                role: ControlRole::Label,
            },
            item: Binding {
                group,
                role: ControlRole::Item,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// A bound control gained focus.
    ///
    /// Forces the group open. Side effect only; idempotent.
    pub fn focus_gained(&mut self, binding: Binding) {
        let Some(state) = self.groups.get_mut(&binding.group) else {
            self.dropped_dispatches += 1;
            return;
        };
        state.force_open();
        #[cfg(feature = "tracing")]
        tracing::trace!(group = %binding.group, role = ?binding.role, "focus gained, forced open");
    }

    /// A bound control lost focus.
    ///
    /// Schedules a deferred visibility check rather than reading focus
    /// ownership now: when this fires during an intra-group transfer, the
    /// next control's focus task has not yet dispatched. For the label, the
    /// pin is additionally cleared — clicking elsewhere always unpins.
    pub fn focus_lost(&mut self, binding: Binding) {
        let Some(state) = self.groups.get_mut(&binding.group) else {
            self.dropped_dispatches += 1;
            return;
        };
        if binding.role == ControlRole::Label {
            state.clear_pin();
        }
        self.pending.push_back(binding.group);
        #[cfg(feature = "tracing")]
        tracing::trace!(group = %binding.group, role = ?binding.role, "focus lost, check scheduled");
    }

    /// The label was activated by a pointer click.
    ///
    /// The default activation is always suppressed — a label click toggles
    /// the group, it never navigates or submits. If the group is currently
    /// pinned, focus is released from the label and the label-blur
    /// bookkeeping runs here (the release is programmatic; the host does not
    /// re-dispatch it). The pin always ends up negated: the first click on
    /// an unfocused label pins the group open, a click while pinned unpins
    /// it.
    pub fn label_clicked<H: FocusHost>(
        &mut self,
        binding: Binding,
        event: &mut PointerEvent,
        host: &mut H,
    ) {
        if binding.role != ControlRole::Label {
            // Mis-wired item click; leave the event's default action alone.
            self.dropped_dispatches += 1;
            return;
        }
        event.prevent_default();
        let Some(state) = self.groups.get_mut(&binding.group) else {
            self.dropped_dispatches += 1;
            return;
        };
        let was_pinned = state.flags().contains(DisclosureFlags::PINNED);
        if was_pinned {
            host.release_focus(state.label());
            state.clear_pin();
            self.pending.push_back(binding.group);
        }
        state.set_pin(!was_pinned);
        #[cfg(feature = "tracing")]
        tracing::trace!(group = %binding.group, pinned = !was_pinned, "label click toggled pin");
    }

    /// Run the deferred visibility checks scheduled this turn.
    ///
    /// Must be called after the turn's focus/blur tasks have all dispatched,
    /// so focus has settled on its new target. Each check re-reads focus
    /// ownership from the host at execution time; a group closes only when
    /// the focused control is neither its label nor inside its content
    /// region. Checks for unmounted groups are dropped, and duplicate checks
    /// for one group are harmless.
    pub fn run_deferred<H: FocusHost>(&mut self, host: &H) {
        while let Some(group) = self.pending.pop_front() {
            let Some(state) = self.groups.get_mut(&group) else {
                continue;
            };
            let inside = match host.focus_target() {
                Some(target) => target == state.label() || host.contains(state.content(), target),
                None => false,
            };
            if !inside {
                state.close();
                #[cfg(feature = "tracing")]
                tracing::trace!(group = %group, "focus left group, closed");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Whether the group must render forced-visible.
    ///
    /// `false` for unmounted groups. The render layer reads this each pass,
    /// independent of whatever hover presentation it applies on its own.
    #[must_use]
    pub fn forced_open(&self, group: GroupId) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|s| s.flags().contains(DisclosureFlags::FORCED_OPEN))
    }

    /// Whether the group is pinned open by an explicit label click.
    #[must_use]
    pub fn pinned(&self, group: GroupId) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|s| s.flags().contains(DisclosureFlags::PINNED))
    }

    /// Visibility summary for the group; `Closed` for unmounted groups.
    #[must_use]
    pub fn visibility(&self, group: GroupId) -> Visibility {
        self.groups
            .get(&group)
            .map_or(Visibility::Closed, DisclosureState::visibility)
    }

    /// Whether the group's label currently holds focus, per the host.
    #[must_use]
    pub fn label_focused<H: FocusHost>(&self, group: GroupId, host: &H) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|s| host.focus_target() == Some(s.label()))
    }

    /// Full state record for a mounted group.
    #[must_use]
    pub fn group(&self, group: GroupId) -> Option<&DisclosureState> {
        self.groups.get(&group)
    }

    /// Whether the group is currently mounted.
    #[must_use]
    pub fn is_mounted(&self, group: GroupId) -> bool {
        self.groups.contains_key(&group)
    }

    /// Number of mounted groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of visibility checks waiting for the next drain.
    #[must_use]
    pub fn pending_checks(&self) -> usize {
        self.pending.len()
    }

    /// Diagnostic: dispatches dropped by the stale/mis-wire guards.
    #[must_use]
    pub fn dropped_dispatches(&self) -> u64 {
        self.dropped_dispatches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
