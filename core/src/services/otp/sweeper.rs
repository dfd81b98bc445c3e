//! Cancellable background eviction of expired OTP records

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::store::MemoryOtpStore;

/// Periodic sweep over the OTP store
///
/// Correctness never depends on the sweep: expired records already read as
/// absent. Sweeping only bounds memory held by keys that requested codes
/// and never verified them. The sweep interval is independent of the TTL.
pub struct OtpSweeper {
    store: Arc<MemoryOtpStore>,
    interval: Duration,
}

impl OtpSweeper {
    /// Create a sweeper over the given store
    pub fn new(store: Arc<MemoryOtpStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run one eviction pass
    pub async fn run_once(&self) -> usize {
        let evicted = self.store.evict_expired().await;
        if evicted > 0 {
            info!(evicted, event = "otp_sweep", "Cleaned up expired OTP records");
        }
        evicted
    }

    /// Start the periodic sweep on the current runtime
    ///
    /// The returned handle owns the task. Call [`SweeperHandle::shutdown`]
    /// to stop it; dropping the handle stops the loop as well, since the
    /// stop channel closes either way.
    pub fn spawn(self) -> SweeperHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let period = self.interval.max(Duration::from_millis(1));
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; skip it so the initial
            // sweep happens one full interval after startup.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        self.run_once().await;
                    }
                }
            }
            debug!(event = "otp_sweeper_stopped", "OTP sweeper stopped");
        });

        SweeperHandle {
            stop: stop_tx,
            task,
        }
    }
}

/// Owning handle for a running sweeper task
pub struct SweeperHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop and wait for it to finish
    pub async fn shutdown(self) {
        let _ = self.stop.send(());
        let _ = self.task.await;
    }
}
