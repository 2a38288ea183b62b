// Animated total-detections counter

mod driver;

pub use driver::{CounterDriver, MIN_STEP_INTERVAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Animating,
}

/// Linear 0 → target interpolation over a fixed number of steps.
///
/// Setting a target always restarts from 0, including mid-animation.
/// The last step lands exactly on the target.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    steps: u32,
    step: u32,
    target: u64,
    value: u64,
    state: CounterState,
}

impl AnimatedCounter {
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
            step: 0,
            target: 0,
            value: 0,
            state: CounterState::Idle,
        }
    }

    pub fn set_target(&mut self, target: u64) {
        self.target = target;
        self.step = 0;
        self.value = 0;
        self.state = CounterState::Animating;
    }

    /// Advance one step and return the displayed value. No-op when idle.
    pub fn step(&mut self) -> u64 {
        if self.state == CounterState::Idle {
            return self.value;
        }

        self.step += 1;
        // floor(target * step / steps) without float drift
        let value = (self.target as u128 * self.step as u128 / self.steps as u128) as u64;

        if self.step >= self.steps || value >= self.target {
            self.value = self.target;
            self.state = CounterState::Idle;
        } else {
            self.value = value;
        }

        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Per-step increment (`target / steps`)
    pub fn increment(&self) -> f64 {
        self.target as f64 / self.steps as f64
    }
}
