use crate::dashboard::{Dashboard, DashboardSnapshot};
use crate::telemetry::ConfigurationError;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};


/// Longest refresh period accepted by `start`
pub const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Latest published snapshot; `None` until the scheduler is first started
pub type SnapshotReceiver = watch::Receiver<Option<Arc<DashboardSnapshot>>>;

/// Regenerates the dashboard on a fixed period.
///
/// Each tick replaces the published snapshot in a single `watch` send, so
/// readers see either the previous snapshot or the new one, never a mix.
/// The background task is aborted on `stop()` and on drop.
pub struct RefreshScheduler {
    period: Duration,
    snapshot_tx: watch::Sender<Option<Arc<DashboardSnapshot>>>,
    ticks: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    /// Create a stopped scheduler
    pub fn new(period: Duration) -> Self {
        let (snapshot_tx, _) = watch::channel(None);

        Self {
            period,
            snapshot_tx,
            ticks: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Publish an initial snapshot and begin ticking.
    ///
    /// The first tick fires one full period after start. Starting a running
    /// scheduler cancels the previous task first. A malformed camera list
    /// or a period outside `(0, MAX_PERIOD]` is reported here, before
    /// anything is published or spawned.
    pub fn start(&mut self, mut dashboard: Dashboard) -> Result<(), ConfigurationError> {
        self.stop();

        if self.period.is_zero() || self.period > MAX_PERIOD {
            return Err(ConfigurationError::InvalidSetting(format!(
                "refresh period {:?} must be within (0, {:?}]",
                self.period, MAX_PERIOD
            )));
        }

        let initial = dashboard.refresh(Utc::now())?;
        self.snapshot_tx.send_replace(Some(Arc::new(initial)));

        let period = self.period;
        let snapshot_tx = self.snapshot_tx.clone();
        let ticks = Arc::clone(&self.ticks);

        info!(period_ms = period.as_millis() as u64, "Starting refresh scheduler");

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);

            // Skip missed ticks to prevent a burst of regenerations after a stall
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                match dashboard.refresh(Utc::now()) {
                    Ok(snapshot) => {
                        let tick = ticks.fetch_add(1, Ordering::SeqCst) + 1;
                        debug!(
                            tick = tick,
                            total_detections = snapshot.detections.total_detections,
                            "Telemetry refreshed"
                        );
                        snapshot_tx.send_replace(Some(Arc::new(snapshot)));
                    }
                    Err(e) => {
                        // Keep the previous snapshot published
                        error!(error = %e, "Failed to refresh telemetry");
                    }
                }
            }
        }));

        Ok(())
    }

    /// Cancel the timer. Safe to call repeatedly and before `start`.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!(ticks = self.tick_count(), "Refresh scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    /// Number of timer-driven generation cycles so far (the initial
    /// snapshot published by `start` is not counted)
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.snapshot_tx.subscribe()
    }

    pub fn latest(&self) -> Option<Arc<DashboardSnapshot>> {
        self.snapshot_tx.borrow().clone()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
