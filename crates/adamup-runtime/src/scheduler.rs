//! Periodic update checks.
//!
//! The scheduler runs one check immediately and then one per interval until
//! its cancellation token fires. Checks are sequential: a check still waiting
//! on the user when the next tick is due postpones that tick instead of
//! stacking prompts.

use std::sync::Arc;
use std::time::Duration;

use adamup_core::UpdateService;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Shortest interval the scheduler accepts.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Runs update checks on a fixed interval.
pub struct UpdateScheduler {
    service: Arc<UpdateService>,
    interval: Duration,
    cancel_token: CancellationToken,
}

impl UpdateScheduler {
    /// Create a scheduler.
    ///
    /// # Arguments
    ///
    /// * `service` - Service shared with the manual command
    /// * `check_interval` - Time between checks (e.g., 24 hours)
    /// * `cancel_token` - Token to signal scheduler shutdown
    pub fn new(
        service: Arc<UpdateService>,
        check_interval: Duration,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            service,
            interval: check_interval.max(MIN_INTERVAL),
            cancel_token,
        }
    }

    /// Run on a new task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run until cancelled.
    ///
    /// A check in flight when the token fires is dropped at its next
    /// suspension point.
    pub async fn run(self) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(
            interval_secs = self.interval.as_secs(),
            "Starting update scheduler"
        );

        loop {
            tokio::select! {
                biased;
                () = self.cancel_token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                () = self.cancel_token.cancelled() => {
                    debug!("Scheduled update check abandoned");
                    break;
                }
                outcome = self.service.check_for_updates() => {
                    debug!(success = outcome.is_success(), "Scheduled update check finished");
                }
            }
        }

        debug!("Update scheduler stopped");
    }
}
