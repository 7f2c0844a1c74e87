//! Periodic background refresh of the project listing

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{Project, RepositorySource};
use crate::error::Result;

/// Owner of a running refresh task; dropping it stops the task
pub struct RefreshHandle {
    rx: mpsc::UnboundedReceiver<Result<Vec<Project>>>,
    cancel: CancellationToken,
    trigger: Arc<Notify>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Next fetch result, if one arrived since the last poll
    pub fn try_recv(&mut self) -> Option<Result<Vec<Project>>> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next fetch result; `None` once the task has stopped
    pub async fn recv(&mut self) -> Option<Result<Vec<Project>>> {
        self.rx.recv().await
    }

    /// Fetch now instead of waiting for the next period
    pub fn refresh_now(&self) {
        self.trigger.notify_one();
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Fetch immediately, then every `interval` and on each manual refresh
pub fn spawn_refresh(source: Arc<dyn RepositorySource>, interval: Option<Duration>) -> RefreshHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let trigger = Arc::new(Notify::new());

    let task = tokio::spawn({
        let cancel = cancel.clone();
        let trigger = trigger.clone();
        async move {
            loop {
                let result = tokio::select! {
                    _ = cancel.cancelled() => break,
                    result = source.fetch() => result,
                };
                if tx.send(result).is_err() {
                    break;
                }

                match interval {
                    Some(period) => tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = trigger.notified() => debug!("Manual project refresh"),
                        _ = tokio::time::sleep(period) => debug!("Periodic project refresh"),
                    },
                    None => tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = trigger.notified() => debug!("Manual project refresh"),
                    },
                }
            }
            info!("Project refresh task stopped");
        }
    });

    RefreshHandle {
        rx,
        cancel,
        trigger,
        task,
    }
}
