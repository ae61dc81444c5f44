#![forbid(unsafe_code)]

//! Deterministic focus simulator.
//!
//! [`SimHost`] is an in-memory [`FocusHost`]: a current-focus slot, a
//! control allocator, and region membership tables. [`FocusSim`] drives a
//! [`FocusCoordinator`] against it in real event-queue order — a focus
//! transfer dispatches blur on the old control and focus on the new one
//! within a single turn, and [`settle`](FocusSim::settle) runs the deferred
//! checks that a host event loop would run after that turn. Pointer
//! activation dispatches focus before click, matching UI runtimes.
//!
//! No timers, no threads: tests control turn boundaries explicitly, so
//! every ordering the coordinator depends on is reproducible.

use std::collections::HashMap;

use louver_core::control::{ControlId, RegionId};
use louver_core::event::PointerEvent;
use louver_core::host::FocusHost;
use louver_widgets::{Binding, ControlRole, FocusCoordinator, GroupId, GroupSpec, Visibility};

/// In-memory focus host.
#[derive(Debug, Default)]
pub struct SimHost {
    next_control: u64,
    next_region: u64,
    focus: Option<ControlId>,
    members: HashMap<RegionId, Vec<ControlId>>,
}

impl SimHost {
    /// Create an empty host with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh control.
    pub fn control(&mut self) -> ControlId {
        let id = ControlId::new(self.next_control);
        self.next_control += 1;
        id
    }

    /// Allocate a fresh (empty) region.
    pub fn region(&mut self) -> RegionId {
        let id = RegionId::new(self.next_region);
        self.next_region += 1;
        id
    }

    /// Place a control inside a region.
    pub fn place(&mut self, region: RegionId, control: ControlId) {
        self.members.entry(region).or_default().push(control);
    }

    /// Remove a control from a region (e.g. the render pass dropped it).
    pub fn remove(&mut self, region: RegionId, control: ControlId) {
        if let Some(members) = self.members.get_mut(&region) {
            members.retain(|c| *c != control);
        }
    }

    /// The control currently holding focus.
    #[must_use]
    pub fn focus(&self) -> Option<ControlId> {
        self.focus
    }
}

impl FocusHost for SimHost {
    fn focus_target(&self) -> Option<ControlId> {
        self.focus
    }

    fn contains(&self, region: RegionId, control: ControlId) -> bool {
        self.members
            .get(&region)
            .is_some_and(|m| m.contains(&control))
    }

    fn release_focus(&mut self, control: ControlId) {
        if self.focus == Some(control) {
            self.focus = None;
        }
    }
}

/// A group mounted through [`FocusSim::mount_group`], with the controls the
/// simulator allocated for it.
#[derive(Debug, Clone)]
pub struct MountedGroup {
    /// Coordinator handle.
    pub group: GroupId,
    /// The label control.
    pub label: ControlId,
    /// The content region.
    pub content: RegionId,
    /// The child controls, in render order.
    pub items: Vec<ControlId>,
}

/// Drives a [`FocusCoordinator`] against a [`SimHost`] in event-queue order.
#[derive(Debug, Default)]
pub struct FocusSim {
    host: SimHost,
    coordinator: FocusCoordinator,
    bindings: HashMap<ControlId, Binding>,
}

impl FocusSim {
    /// Create a simulator with an empty host and no groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The simulated host.
    #[must_use]
    pub fn host(&self) -> &SimHost {
        &self.host
    }

    /// Mutable access to the simulated host.
    pub fn host_mut(&mut self) -> &mut SimHost {
        &mut self.host
    }

    /// The coordinator under test.
    #[must_use]
    pub fn coordinator(&self) -> &FocusCoordinator {
        &self.coordinator
    }

    /// Mount a group with a fresh label and `items` fresh children, and
    /// attach its bindings, as a render pass would.
    pub fn mount_group(&mut self, id: &str, items: usize) -> MountedGroup {
        let label = self.host.control();
        let content = self.host.region();
        let children: Vec<ControlId> = (0..items).map(|_| self.host.control()).collect();
        for child in &children {
            self.host.place(content, *child);
        }

        let group = self.coordinator.mount(GroupSpec::new(id, label, content));
        let bindings = self.coordinator.bindings(group);
        self.attach(label, bindings.label);
        for child in &children {
            self.attach(*child, bindings.item);
        }

        MountedGroup {
            group,
            label,
            content,
            items: children,
        }
    }

    /// Attach a binding to a control, replacing any earlier one.
    pub fn attach(&mut self, control: ControlId, binding: Binding) {
        self.bindings.insert(control, binding);
    }

    /// Allocate a focusable control that belongs to no group.
    pub fn outside_control(&mut self) -> ControlId {
        self.host.control()
    }

    /// Unmount a group. Attached bindings are left in place and go stale,
    /// as they would when a render pass lags the state change.
    pub fn unmount(&mut self, group: GroupId) {
        self.coordinator.unmount(group);
    }

    /// Move focus to `control`, dispatching blur on the previous owner and
    /// focus on the new one within this turn. Focusing the current owner
    /// dispatches nothing.
    pub fn focus(&mut self, control: ControlId) {
        let previous = self.host.focus;
        if previous == Some(control) {
            return;
        }
        if let Some(previous) = previous
            && let Some(binding) = self.bindings.get(&previous).copied()
        {
            self.coordinator.focus_lost(binding);
        }
        self.host.focus = Some(control);
        if let Some(binding) = self.bindings.get(&control).copied() {
            self.coordinator.focus_gained(binding);
        }
    }

    /// Drop focus entirely, dispatching blur on the previous owner.
    pub fn blur_all(&mut self) {
        if let Some(previous) = self.host.focus.take()
            && let Some(binding) = self.bindings.get(&previous).copied()
        {
            self.coordinator.focus_lost(binding);
        }
    }

    /// Pointer-activate `control`: focus moves first, then the click
    /// dispatches. Returns the event so callers can inspect whether its
    /// default action was suppressed. Only label bindings receive clicks;
    /// activating anything else leaves the event untouched.
    pub fn click(&mut self, control: ControlId) -> PointerEvent {
        self.focus(control);
        let mut event = PointerEvent::new();
        if let Some(binding) = self.bindings.get(&control).copied()
            && binding.role() == ControlRole::Label
        {
            self.coordinator
                .label_clicked(binding, &mut event, &mut self.host);
        }
        event
    }

    /// End the turn: run the deferred visibility checks.
    pub fn settle(&mut self) {
        self.coordinator.run_deferred(&self.host);
    }

    /// Whether the group must render forced-visible.
    #[must_use]
    pub fn forced_open(&self, group: GroupId) -> bool {
        self.coordinator.forced_open(group)
    }

    /// Whether the group is pinned open.
    #[must_use]
    pub fn pinned(&self, group: GroupId) -> bool {
        self.coordinator.pinned(group)
    }

    /// Visibility summary for the group.
    #[must_use]
    pub fn visibility(&self, group: GroupId) -> Visibility {
        self.coordinator.visibility(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocators_hand_out_distinct_ids() {
        let mut host = SimHost::new();
        let a = host.control();
        let b = host.control();
        assert_ne!(a, b);
        assert_ne!(host.region(), host.region());
    }

    #[test]
    fn release_focus_only_affects_the_owner() {
        let mut host = SimHost::new();
        let a = host.control();
        let b = host.control();
        host.focus = Some(a);
        host.release_focus(b);
        assert_eq!(host.focus(), Some(a));
        host.release_focus(a);
        assert_eq!(host.focus(), None);
    }

    #[test]
    fn removed_control_no_longer_contained() {
        let mut host = SimHost::new();
        let region = host.region();
        let control = host.control();
        host.place(region, control);
        assert!(host.contains(region, control));
        host.remove(region, control);
        assert!(!host.contains(region, control));
    }

    #[test]
    fn refocusing_the_owner_dispatches_nothing() {
        let mut sim = FocusSim::new();
        let menu = sim.mount_group("nav", 1);
        sim.focus(menu.label);
        sim.focus(menu.label);
        // No blur was dispatched, so no check is pending.
        assert_eq!(sim.coordinator().pending_checks(), 0);
        assert!(sim.forced_open(menu.group));
    }

    #[test]
    fn mount_group_attaches_all_bindings() {
        let mut sim = FocusSim::new();
        let menu = sim.mount_group("nav", 3);
        assert_eq!(menu.items.len(), 3);
        for item in &menu.items {
            sim.focus(*item);
            assert!(sim.forced_open(menu.group));
            sim.blur_all();
            sim.settle();
        }
    }
}
