#![forbid(unsafe_code)]

//! Core: control identity, pointer events, and host capabilities.

pub mod control;
pub mod event;
pub mod host;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
