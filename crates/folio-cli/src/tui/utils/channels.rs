//! Async Channels
//!
//! Groups the receivers the App polls for background work.

use tokio::sync::oneshot;

use folio_core::projects::RefreshHandle;

/// Container for all async channel receivers
#[derive(Default)]
pub struct AsyncChannels {
    /// Repository listing refresh task
    pub projects: Option<RefreshHandle>,
    /// Outcome of the in-flight contact submission
    pub contact_result: Option<oneshot::Receiver<folio_core::Result<()>>>,
}

impl AsyncChannels {
    pub fn new() -> Self {
        Self::default()
    }
}
