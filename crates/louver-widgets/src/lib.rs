#![forbid(unsafe_code)]

//! Focus-driven disclosure coordination for louver.

pub mod coordinator;
pub mod disclosure;

pub use coordinator::{Binding, ControlRole, FocusCoordinator, GroupBindings, GroupId, GroupSpec};
pub use disclosure::{DisclosureFlags, DisclosureState, Visibility};
