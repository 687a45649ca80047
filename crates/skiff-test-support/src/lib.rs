#![forbid(unsafe_code)]

//! Shared test helpers used across the workspace test suites.
//! Layout: fixtures.rs (transfer snapshot builders), scripted.rs (scripted
//! [`skiff_monitor::TransferSource`] fake).

pub mod fixtures;
pub mod scripted;

pub use scripted::{FetchStep, ScriptedSource};
