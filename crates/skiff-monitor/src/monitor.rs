//! Monitor sessions: one spawned poll loop per started transfer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use skiff_models::{AddTransfer, StatusKind, TransferStatus};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::event::TransferEvent;
use crate::source::TransferSource;

/// Default interval between status fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How a [`TransferStatus::Seeding`] snapshot is treated while monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedingBehavior {
    /// Keep polling while the transfer seeds. The session only ends on a
    /// terminal status or cancellation, so seeding statistics stay visible
    /// for as long as the caller cares to watch them.
    #[default]
    ReportProgress,
    /// Treat the first seeding snapshot as terminal success and close the
    /// session. The download is complete at that point; choosing this stops
    /// long-seeding transfers from being polled indefinitely.
    CompleteOnSeed,
}

/// Tuning knobs applied to every session started by a monitor.
#[derive(Debug, Clone, Copy)]
pub struct MonitorOptions {
    /// Interval between status fetches. Measured from completion of the
    /// previous fetch, so a slow fetch delays the next tick rather than
    /// overlapping it.
    pub poll_interval: Duration,
    /// Seeding policy; see [`SeedingBehavior`].
    pub seeding: SeedingBehavior,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            seeding: SeedingBehavior::default(),
        }
    }
}

/// Starts and tracks server-side transfers against a [`TransferSource`].
///
/// Each call to [`TransferMonitor::start`] creates an independent session
/// with its own job, timer, and event channel; sessions share nothing but
/// the source. The monitor itself holds no per-transfer state.
pub struct TransferMonitor<S> {
    source: Arc<S>,
    options: MonitorOptions,
}

impl<S> TransferMonitor<S>
where
    S: TransferSource + 'static,
{
    /// Build a monitor with default options (1 s fixed interval, seeding
    /// reported as progress).
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, MonitorOptions::default())
    }

    /// Build a monitor with explicit options.
    #[must_use]
    pub fn with_options(source: S, options: MonitorOptions) -> Self {
        Self {
            source: Arc::new(source),
            options,
        }
    }

    /// Start a new transfer and monitor it to a terminal outcome.
    ///
    /// Returns immediately; creation and polling run on a background task.
    /// If creation fails the session emits [`TransferEvent::CreationFailed`]
    /// and nothing else; no timer is ever started. On success the initial
    /// snapshot only seeds the session (it is not reported as progress), and
    /// one event per poll cycle follows until a terminal snapshot closes the
    /// stream.
    ///
    /// Starting the same request twice creates two independent jobs and
    /// sessions; transfer creation is one-shot on the server.
    #[must_use]
    pub fn start(&self, request: AddTransfer) -> MonitorHandle {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Session {
            source: Arc::clone(&self.source),
            options: self.options,
            events,
        };
        let task = tokio::spawn(session.run(request));
        MonitorHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
            abort: task.abort_handle(),
            events: receiver,
        }
    }
}

/// Live handle for one monitor session: the event stream plus cancellation.
pub struct MonitorHandle {
    cancelled: Arc<AtomicBool>,
    abort: AbortHandle,
    events: mpsc::UnboundedReceiver<TransferEvent>,
}

impl MonitorHandle {
    /// Receive the next session event.
    ///
    /// Returns `None` once the session has ended: after the terminal event
    /// has been delivered, after the poll loop stopped, or immediately after
    /// cancellation. Events that were queued but not yet consumed when
    /// [`MonitorHandle::cancel`] ran are discarded, never delivered.
    pub async fn next(&mut self) -> Option<TransferEvent> {
        if self.is_cancelled() {
            self.events.close();
            return None;
        }
        let event = self.events.recv().await?;
        if self.is_cancelled() {
            self.events.close();
            return None;
        }
        Some(event)
    }

    /// Cancel the session.
    ///
    /// Stops the poll loop immediately; a fetch already in flight is aborted
    /// and its result discarded. Safe to call at any time and more than
    /// once. After this returns no further event is observable from
    /// [`MonitorHandle::next`].
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }

    /// Detached cancellation token for this session, usable from other
    /// tasks, including whichever task is consuming the events.
    #[must_use]
    pub fn canceller(&self) -> MonitorCanceller {
        MonitorCanceller {
            cancelled: Arc::clone(&self.cancelled),
            abort: self.abort.clone(),
        }
    }

    /// Whether the session was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        // An unobserved session has no reason to keep polling.
        self.abort.abort();
    }
}

/// Clonable cancellation token detached from the event stream.
#[derive(Clone)]
pub struct MonitorCanceller {
    cancelled: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl MonitorCanceller {
    /// Cancel the session; see [`MonitorHandle::cancel`].
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }

    /// Whether the session was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// State owned by one session task.
struct Session<S> {
    source: Arc<S>,
    options: MonitorOptions,
    events: mpsc::UnboundedSender<TransferEvent>,
}

impl<S: TransferSource> Session<S> {
    async fn run(self, request: AddTransfer) {
        let created = match self.source.create(&request).await {
            Ok(transfer) => transfer,
            Err(error) => {
                warn!(url = %request.url, error = %error, "transfer creation failed");
                let _ = self.events.send(TransferEvent::CreationFailed(error));
                return;
            }
        };

        let id = created.id;
        info!(transfer_id = id, name = %created.name, "transfer created, polling started");

        let mut ticker = tokio::time::interval(self.options.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately; consume it so
        // the first fetch happens one full interval after creation.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let event = match self.source.fetch(id).await {
                Err(error) => {
                    warn!(transfer_id = id, error = %error, "status fetch failed, will retry");
                    TransferEvent::FetchFailed(error)
                }
                Ok(transfer) => match self.classify(transfer.status) {
                    StatusKind::Active => {
                        debug!(
                            transfer_id = id,
                            status = transfer.status.as_str(),
                            percent = transfer.percent_done,
                            "transfer progressing"
                        );
                        TransferEvent::Progress(transfer)
                    }
                    StatusKind::Success | StatusKind::Failed => {
                        info!(
                            transfer_id = id,
                            status = transfer.status.as_str(),
                            "transfer reached terminal state"
                        );
                        let _ = self.events.send(TransferEvent::Finished(transfer));
                        // Terminal states are absorbing: the loop exits and
                        // no further fetch is issued for this session.
                        return;
                    }
                },
            };

            if self.events.send(event).is_err() {
                debug!(transfer_id = id, "event receiver dropped, stopping poll loop");
                return;
            }
        }
    }

    fn classify(&self, status: TransferStatus) -> StatusKind {
        match (status, self.options.seeding) {
            (TransferStatus::Seeding, SeedingBehavior::CompleteOnSeed) => StatusKind::Success,
            _ => status.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(seeding: SeedingBehavior) -> Session<NoopSource> {
        let (events, _receiver) = mpsc::unbounded_channel();
        Session {
            source: Arc::new(NoopSource),
            options: MonitorOptions {
                poll_interval: DEFAULT_POLL_INTERVAL,
                seeding,
            },
            events,
        }
    }

    struct NoopSource;

    #[async_trait::async_trait]
    impl TransferSource for NoopSource {
        async fn create(&self, _request: &AddTransfer) -> anyhow::Result<skiff_models::Transfer> {
            anyhow::bail!("unused")
        }

        async fn fetch(&self, _id: skiff_models::TransferId) -> anyhow::Result<skiff_models::Transfer> {
            anyhow::bail!("unused")
        }
    }

    #[test]
    fn default_options_match_source_behaviour() {
        let options = MonitorOptions::default();
        assert_eq!(options.poll_interval, Duration::from_secs(1));
        assert_eq!(options.seeding, SeedingBehavior::ReportProgress);
    }

    #[test]
    fn seeding_policy_only_affects_seeding_snapshots() {
        let report = session_with(SeedingBehavior::ReportProgress);
        assert_eq!(report.classify(TransferStatus::Seeding), StatusKind::Active);
        assert_eq!(report.classify(TransferStatus::Error), StatusKind::Failed);

        let complete = session_with(SeedingBehavior::CompleteOnSeed);
        assert_eq!(complete.classify(TransferStatus::Seeding), StatusKind::Success);
        assert_eq!(complete.classify(TransferStatus::Downloading), StatusKind::Active);
        assert_eq!(complete.classify(TransferStatus::Completed), StatusKind::Success);
    }
}
