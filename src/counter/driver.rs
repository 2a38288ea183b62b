use super::{AnimatedCounter, CounterState};
use crate::scheduler::MAX_PERIOD;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

/// Shortest pause between two animation steps
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(1);

/// Steps an `AnimatedCounter` every `duration / steps` on a background task.
///
/// At most one animation task exists; a new target aborts the running one.
/// The step interval is clamped to `[MIN_STEP_INTERVAL, MAX_PERIOD]`.
pub struct CounterDriver {
    steps: u32,
    step_interval: Duration,
    value_tx: watch::Sender<u64>,
    task: Option<JoinHandle<()>>,
}

impl CounterDriver {
    pub fn new(duration: Duration, steps: u32) -> Self {
        let steps = steps.max(1);
        let (value_tx, _) = watch::channel(0);

        Self {
            steps,
            step_interval: (duration / steps).clamp(MIN_STEP_INTERVAL, MAX_PERIOD),
            value_tx,
            task: None,
        }
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Restart the animation from 0 toward `target`
    pub fn set_target(&mut self, target: u64) {
        self.stop();
        self.value_tx.send_replace(0);

        let mut counter = AnimatedCounter::new(self.steps);
        counter.set_target(target);

        let value_tx = self.value_tx.clone();
        let step_interval = self.step_interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + step_interval, step_interval);

            while counter.state() == CounterState::Animating {
                ticker.tick().await;
                value_tx.send_replace(counter.step());
            }

            debug!(total = target, "Counter animation finished");
        }));
    }

    /// Abort any running animation; the displayed value stays where it was
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_animating(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    pub fn value(&self) -> u64 {
        *self.value_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.value_tx.subscribe()
    }
}

impl Drop for CounterDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
