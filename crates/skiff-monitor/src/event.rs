//! Per-session event stream types.

use skiff_models::Transfer;

/// Notifications published by a monitor session, delivered in poll order.
///
/// Each poll cycle produces exactly one event. The variants replace the
/// error/progress/completion callback triple of older client libraries with
/// a single tagged stream while keeping the same guarantees: at most one
/// `CreationFailed` (and then nothing else), at most one `Finished` (always
/// last), and `FetchFailed` never ends a session.
#[derive(Debug)]
pub enum TransferEvent {
    /// The transfer could not be created. When emitted it is the only event
    /// of its session; polling never starts.
    CreationFailed(anyhow::Error),
    /// A poll produced a fresh snapshot in a non-terminal state.
    Progress(Transfer),
    /// A poll failed. Transient: polling continues on the next tick.
    FetchFailed(anyhow::Error),
    /// The transfer reached a terminal state. Final event of the session;
    /// the snapshot's `error_message` is set when the transfer failed.
    Finished(Transfer),
}

impl TransferEvent {
    /// Whether this event ends its session.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CreationFailed(_) | Self::Finished(_))
    }

    /// The snapshot carried by the event, when there is one.
    #[must_use]
    pub const fn transfer(&self) -> Option<&Transfer> {
        match self {
            Self::Progress(transfer) | Self::Finished(transfer) => Some(transfer),
            Self::CreationFailed(_) | Self::FetchFailed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn terminal_variants_are_flagged() {
        assert!(TransferEvent::CreationFailed(anyhow!("refused")).is_terminal());
        assert!(TransferEvent::Finished(Transfer::default()).is_terminal());
        assert!(!TransferEvent::Progress(Transfer::default()).is_terminal());
        assert!(!TransferEvent::FetchFailed(anyhow!("timeout")).is_terminal());
    }

    #[test]
    fn transfer_accessor_exposes_snapshots() {
        assert!(TransferEvent::Progress(Transfer::default()).transfer().is_some());
        assert!(TransferEvent::FetchFailed(anyhow!("timeout")).transfer().is_none());
    }
}
