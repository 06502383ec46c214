//! Periodic schedule refresh with immutable snapshot hand-off.
//!
//! A single background task polls a [`ScheduleSource`] and publishes each
//! successful load as a fresh `Arc<ScheduleConfig>` over a watch channel.
//! Readers grab the current snapshot whenever they resolve; they see either
//! the old or the new config in full, never a half-updated one. A failed
//! reload keeps the prior valid snapshot on the channel and logs a warning,
//! so a broken edit to the schedule never blanks the screens.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;
use crate::loader::ScheduleSource;
use crate::schedule::ScheduleConfig;

/// Read side of the schedule refresh loop. Cheap to clone; every clone
/// observes the same sequence of snapshots.
#[derive(Debug, Clone)]
pub struct ScheduleFeed {
    rx: watch::Receiver<Arc<ScheduleConfig>>,
}

impl ScheduleFeed {
    /// Load the schedule once and start refreshing it every `interval`.
    ///
    /// The initial load must succeed; after that, load failures are logged
    /// and the previous snapshot stays current. The refresh task runs until
    /// the returned handle is aborted or the runtime shuts down. Must be
    /// called from within a tokio runtime.
    pub fn spawn(
        source: Box<dyn ScheduleSource>,
        interval: Duration,
    ) -> Result<(Self, JoinHandle<()>)> {
        let initial = Arc::new(source.load()?);
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick completes immediately; skip it, the initial
            // snapshot is already published.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match source.load() {
                    Ok(config) => {
                        let config = Arc::new(config);
                        if *tx.borrow() != config {
                            debug!("schedule changed, publishing new snapshot");
                        }
                        if tx.send(config).is_err() {
                            // No readers left.
                            return;
                        }
                    }
                    Err(err) => {
                        warn!("schedule reload failed, keeping prior config: {err}");
                    }
                }
            }
        });

        Ok((Self { rx }, handle))
    }

    /// The latest complete schedule snapshot.
    pub fn current(&self) -> Arc<ScheduleConfig> {
        self.rx.borrow().clone()
    }

    /// Wait until the refresh task publishes another snapshot.
    /// Returns an error once the refresh task has gone away.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}
