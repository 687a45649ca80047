#![forbid(unsafe_code)]

//! Asynchronous transfer monitoring.
//!
//! The server offers no push notification for transfer progress, so a
//! monitor drives each transfer from creation to a terminal outcome by
//! periodic polling: create the job, then fetch a fresh snapshot once per
//! interval, classify it, and publish exactly one [`TransferEvent`] per
//! cycle on the session's channel.
//!
//! Layout:
//! - `source.rs`: the [`TransferSource`] seam the monitor polls through
//! - `event.rs`: the per-session [`TransferEvent`] stream
//! - `monitor.rs`: [`TransferMonitor`], session task, and cancellation

pub mod event;
pub mod monitor;
pub mod source;

pub use event::TransferEvent;
pub use monitor::{
    DEFAULT_POLL_INTERVAL, MonitorCanceller, MonitorHandle, MonitorOptions, SeedingBehavior,
    TransferMonitor,
};
pub use source::TransferSource;
