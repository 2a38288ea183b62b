// Live view: refresh scheduler plus the total-detections counter

use crate::config::VigilConfig;
use crate::counter::CounterDriver;
use crate::dashboard::{Dashboard, DashboardSnapshot};
use crate::scheduler::{RefreshScheduler, SnapshotReceiver};
use crate::telemetry::ConfigurationError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[cfg(test)]
mod tests;

/// Owns both recurring timers of the live dashboard.
///
/// Every published snapshot with a new `total_detections` retargets the
/// counter. `stop()` (or drop) tears down the scheduler, the
/// follower task and, through it, any running counter animation.
pub struct LiveDashboard {
    scheduler: RefreshScheduler,
    counter_duration: Duration,
    counter_steps: u32,
    counter_enabled: bool,
    counter_tx: watch::Sender<u64>,
    follower: Option<JoinHandle<()>>,
}

impl LiveDashboard {
    pub fn new(config: &VigilConfig) -> Self {
        let (counter_tx, _) = watch::channel(0);

        Self {
            scheduler: RefreshScheduler::new(config.refresh.interval()),
            counter_duration: config.counter.duration(),
            counter_steps: config.counter.steps,
            counter_enabled: config.counter.enabled,
            counter_tx,
            follower: None,
        }
    }

    pub fn start(&mut self, dashboard: Dashboard) -> Result<(), ConfigurationError> {
        self.stop();
        self.scheduler.start(dashboard)?;

        info!(
            counter_enabled = self.counter_enabled,
            counter_steps = self.counter_steps,
            counter_duration_ms = self.counter_duration.as_millis() as u64,
            "Live dashboard started"
        );

        if !self.counter_enabled {
            // Show the final figure straight away
            if let Some(snapshot) = self.scheduler.latest() {
                self.counter_tx.send_replace(snapshot.detections.total_detections);
            }
            self.follower = Some(tokio::spawn(follow_without_animation(
                self.scheduler.subscribe(),
                self.counter_tx.clone(),
            )));
            return Ok(());
        }

        let driver = CounterDriver::new(self.counter_duration, self.counter_steps);
        self.follower = Some(tokio::spawn(follow_snapshots(
            self.scheduler.subscribe(),
            driver,
            self.counter_tx.clone(),
        )));

        Ok(())
    }

    /// Stop every timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        if let Some(follower) = self.follower.take() {
            follower.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn latest(&self) -> Option<Arc<DashboardSnapshot>> {
        self.scheduler.latest()
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.scheduler.subscribe()
    }

    pub fn tick_count(&self) -> u64 {
        self.scheduler.tick_count()
    }

    /// Currently displayed counter value
    pub fn counter_value(&self) -> u64 {
        *self.counter_tx.borrow()
    }

    pub fn subscribe_counter(&self) -> watch::Receiver<u64> {
        self.counter_tx.subscribe()
    }
}

impl Drop for LiveDashboard {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Retarget the counter whenever the snapshot total changes and mirror its
/// value outward. A refresh that draws the same total leaves a running
/// animation alone.
///
/// The driver lives inside this task so aborting the task also aborts the
/// animation.
async fn follow_snapshots(
    mut snapshots: SnapshotReceiver,
    mut driver: CounterDriver,
    counter_tx: watch::Sender<u64>,
) {
    let mut values = driver.subscribe();
    let mut current_target = None;

    // Current snapshot counts as a target change too
    snapshots.mark_changed();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    warn!("Snapshot channel closed, counter follower exiting");
                    break;
                }
                let target = snapshots
                    .borrow_and_update()
                    .as_ref()
                    .map(|s| s.detections.total_detections);
                if let Some(target) = target {
                    if current_target != Some(target) {
                        current_target = Some(target);
                        driver.set_target(target);
                    }
                }
            }
            changed = values.changed() => {
                if changed.is_err() {
                    break;
                }
                counter_tx.send_replace(*values.borrow_and_update());
            }
        }
    }
}

async fn follow_without_animation(mut snapshots: SnapshotReceiver, counter_tx: watch::Sender<u64>) {
    while snapshots.changed().await.is_ok() {
        let target = snapshots
            .borrow_and_update()
            .as_ref()
            .map(|s| s.detections.total_detections);
        if let Some(target) = target {
            counter_tx.send_replace(target);
        }
    }
}
