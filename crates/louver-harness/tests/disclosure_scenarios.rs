#![forbid(unsafe_code)]

//! End-to-end disclosure scenarios.
//!
//! Each test drives a [`FocusSim`] the way a host event loop would: focus
//! transfers dispatch blur-then-focus within one turn, `settle()` marks the
//! turn boundary where deferred visibility checks run, and pointer
//! activation dispatches focus before click.

use louver_harness::FocusSim;
use louver_widgets::Visibility;

#[test]
fn tabbing_through_a_menu_keeps_it_open() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    sim.focus(menu.label);
    assert!(sim.forced_open(menu.group));

    // Label -> first item: blur and focus land in the same turn, the check
    // runs after both.
    sim.focus(menu.items[0]);
    sim.settle();
    assert!(sim.forced_open(menu.group));

    sim.focus(menu.items[1]);
    sim.settle();
    assert!(sim.forced_open(menu.group));

    // Leaving the menu entirely closes it at the next turn boundary.
    sim.blur_all();
    sim.settle();
    assert!(!sim.forced_open(menu.group));
    assert_eq!(sim.visibility(menu.group), Visibility::Closed);
}

#[test]
fn label_only_group_click_cycle() {
    let mut sim = FocusSim::new();
    let lone = sim.mount_group("account", 0);

    let first = sim.click(lone.label);
    assert!(first.default_prevented());
    assert!(sim.pinned(lone.group));
    assert!(sim.forced_open(lone.group));
    assert_eq!(sim.visibility(lone.group), Visibility::OpenPinned);

    let second = sim.click(lone.label);
    assert!(second.default_prevented());
    assert!(!sim.pinned(lone.group));
    assert_eq!(sim.host().focus(), None);
    sim.settle();
    assert!(!sim.forced_open(lone.group));
}

#[test]
fn child_focus_alone_opens_the_group() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    // Straight to the second item; the label is never focused.
    sim.focus(menu.items[1]);
    assert!(sim.forced_open(menu.group));
    sim.settle();
    assert!(sim.forced_open(menu.group));
}

#[test]
fn clicking_a_cold_label_pins_the_group() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    // Pointer activation on an unfocused label: focus dispatches first,
    // then the click toggles the pin on.
    let event = sim.click(menu.label);
    assert!(event.default_prevented());
    assert_eq!(sim.host().focus(), Some(menu.label));
    assert!(sim.pinned(menu.group));
    assert_eq!(sim.visibility(menu.group), Visibility::OpenPinned);
}

#[test]
fn focusing_elsewhere_unpins_and_closes() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);
    let elsewhere = sim.outside_control();

    sim.click(menu.label);
    assert!(sim.pinned(menu.group));

    sim.focus(elsewhere);
    // The pin drops with the label blur, before the check even runs.
    assert!(!sim.pinned(menu.group));
    sim.settle();
    assert!(!sim.forced_open(menu.group));
}

#[test]
fn unpin_reopens_as_focus_driven_when_an_item_takes_focus() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    sim.click(menu.label);
    let event = sim.click(menu.label);
    assert!(event.default_prevented());
    assert!(!sim.pinned(menu.group));

    // Focus lands on an item before the turn ends; the deferred check then
    // finds the group still occupied.
    sim.focus(menu.items[0]);
    sim.settle();
    assert!(sim.forced_open(menu.group));
    assert_eq!(sim.visibility(menu.group), Visibility::OpenByFocus);
}

#[test]
fn item_activation_keeps_its_default_action() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    let event = sim.click(menu.items[0]);
    assert!(!event.default_prevented());
    assert!(!sim.pinned(menu.group));
    // The press still focused the item, so the group is open.
    assert!(sim.forced_open(menu.group));
}

#[test]
fn groups_open_and_close_independently() {
    let mut sim = FocusSim::new();
    let stories = sim.mount_group("stories", 2);
    let account = sim.mount_group("account", 1);

    sim.focus(stories.items[0]);
    sim.settle();
    assert!(sim.forced_open(stories.group));
    assert!(!sim.forced_open(account.group));

    // Moving into the other group closes the first at the turn boundary.
    sim.focus(account.label);
    sim.settle();
    assert!(!sim.forced_open(stories.group));
    assert!(sim.forced_open(account.group));
}

#[test]
fn unmounting_before_the_check_runs_is_harmless() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 1);

    sim.focus(menu.label);
    sim.blur_all();
    sim.unmount(menu.group);
    sim.settle();

    assert!(!sim.coordinator().is_mounted(menu.group));
    assert_eq!(sim.visibility(menu.group), Visibility::Closed);
    assert_eq!(sim.coordinator().pending_checks(), 0);
}

#[test]
fn stale_bindings_after_unmount_stay_inert() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 1);
    sim.unmount(menu.group);

    // The render pass has not caught up: the old bindings still receive
    // events. Nothing happens.
    sim.focus(menu.label);
    let event = sim.click(menu.items[0]);
    assert!(!event.default_prevented());
    assert!(!sim.forced_open(menu.group));
    assert!(sim.coordinator().dropped_dispatches() > 0);
}

#[test]
fn reopening_after_close_starts_unpinned() {
    let mut sim = FocusSim::new();
    let menu = sim.mount_group("stories", 2);

    sim.click(menu.label);
    sim.click(menu.label);
    sim.settle();
    assert_eq!(sim.visibility(menu.group), Visibility::Closed);

    sim.focus(menu.items[0]);
    sim.settle();
    assert_eq!(sim.visibility(menu.group), Visibility::OpenByFocus);
    assert!(!sim.pinned(menu.group));
}
