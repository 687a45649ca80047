//! Remote transfer client seam.

use async_trait::async_trait;
use skiff_models::{AddTransfer, Transfer, TransferId};

/// Remote side of the transfer lifecycle: one-shot job creation plus an
/// idempotent status read.
///
/// The HTTP client provides the production implementation; tests substitute
/// fakes returning scripted snapshot sequences. Both operations surface
/// transport and server failures as errors; the monitor decides which of
/// them are fatal to a session.
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Create a new server-side transfer. The server assigns the identifier
    /// carried by the returned snapshot.
    async fn create(&self, request: &AddTransfer) -> anyhow::Result<Transfer>;

    /// Fetch the current snapshot for a transfer. May fail transiently.
    async fn fetch(&self, id: TransferId) -> anyhow::Result<Transfer>;
}

#[async_trait]
impl<T> TransferSource for std::sync::Arc<T>
where
    T: TransferSource + ?Sized,
{
    async fn create(&self, request: &AddTransfer) -> anyhow::Result<Transfer> {
        (**self).create(request).await
    }

    async fn fetch(&self, id: TransferId) -> anyhow::Result<Transfer> {
        (**self).fetch(id).await
    }
}
