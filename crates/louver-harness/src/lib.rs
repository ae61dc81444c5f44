#![forbid(unsafe_code)]

//! Deterministic host simulator for exercising disclosure coordination
//! without a real UI runtime.

pub mod sim;

pub use sim::{FocusSim, SimHost};
