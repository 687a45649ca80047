//! Scripted [`TransferSource`] fake.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use skiff_models::{AddTransfer, Transfer, TransferId};
use skiff_monitor::TransferSource;

/// One scripted response to a `fetch` call, consumed in FIFO order.
#[derive(Debug)]
pub enum FetchStep {
    /// Return this snapshot.
    Snapshot(Transfer),
    /// Fail the fetch with this message.
    Failure(String),
    /// Never resolve. Models a fetch that is still in flight when the
    /// session gets cancelled.
    Stall,
}

/// A [`TransferSource`] driven entirely by a pre-recorded script.
///
/// `create` and `fetch` pop their next response from per-operation queues;
/// an exhausted fetch queue stalls forever (the poll loop simply never gets
/// an answer), while an exhausted create queue errors. Call counters let
/// tests assert that terminal states are absorbing, i.e. that no fetch was
/// issued after a terminal snapshot was served.
#[derive(Default)]
pub struct ScriptedSource {
    create_results: Mutex<VecDeque<Result<Transfer, String>>>,
    fetch_steps: Mutex<VecDeque<FetchStep>>,
    create_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl ScriptedSource {
    /// Script a source whose first `create` call returns the snapshot.
    #[must_use]
    pub fn creating(initial: Transfer) -> Self {
        let source = Self::default();
        source
            .create_results
            .lock()
            .expect("create script mutex poisoned")
            .push_back(Ok(initial));
        source
    }

    /// Script a source whose first `create` call fails.
    #[must_use]
    pub fn failing_creation(message: impl Into<String>) -> Self {
        let source = Self::default();
        source
            .create_results
            .lock()
            .expect("create script mutex poisoned")
            .push_back(Err(message.into()));
        source
    }

    /// Append a further successful `create` response, for tests that start
    /// several sessions against one source.
    #[must_use]
    pub fn then_creating(self, initial: Transfer) -> Self {
        self.create_results
            .lock()
            .expect("create script mutex poisoned")
            .push_back(Ok(initial));
        self
    }

    /// Append a successful fetch returning the snapshot.
    #[must_use]
    pub fn then_snapshot(self, snapshot: Transfer) -> Self {
        self.push_step(FetchStep::Snapshot(snapshot));
        self
    }

    /// Append a failing fetch.
    #[must_use]
    pub fn then_failure(self, message: impl Into<String>) -> Self {
        self.push_step(FetchStep::Failure(message.into()));
        self
    }

    /// Append a fetch that never resolves.
    #[must_use]
    pub fn then_stall(self) -> Self {
        self.push_step(FetchStep::Stall);
        self
    }

    fn push_step(&self, step: FetchStep) {
        self.fetch_steps
            .lock()
            .expect("fetch script mutex poisoned")
            .push_back(step);
    }

    /// Number of `create` calls observed so far.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch` calls observed so far.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferSource for ScriptedSource {
    async fn create(&self, _request: &AddTransfer) -> anyhow::Result<Transfer> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .create_results
            .lock()
            .expect("create script mutex poisoned")
            .pop_front();
        match next {
            Some(Ok(transfer)) => Ok(transfer),
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("create script exhausted"),
        }
    }

    async fn fetch(&self, _id: TransferId) -> anyhow::Result<Transfer> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .fetch_steps
            .lock()
            .expect("fetch script mutex poisoned")
            .pop_front();
        match next {
            Some(FetchStep::Snapshot(transfer)) => Ok(transfer),
            Some(FetchStep::Failure(message)) => Err(anyhow!(message)),
            Some(FetchStep::Stall) | None => std::future::pending().await,
        }
    }
}
