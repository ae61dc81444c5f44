#![forbid(unsafe_code)]

//! Louver public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the coordinator and its supporting types from the internal
//! crates and offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use louver_core::control::{ControlId, RegionId};
pub use louver_core::event::PointerEvent;
pub use louver_core::host::FocusHost;

// --- Coordinator re-exports ------------------------------------------------

pub use louver_widgets::{
    Binding, ControlRole, DisclosureFlags, DisclosureState, FocusCoordinator, GroupBindings,
    GroupId, GroupSpec, Visibility,
};

/// Common imports for applications embedding a coordinator.
pub mod prelude {
    pub use crate::{
        Binding, ControlId, ControlRole, FocusCoordinator, FocusHost, GroupId, GroupSpec,
        PointerEvent, RegionId, Visibility,
    };
}
