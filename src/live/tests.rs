use super::*;
use crate::telemetry::{default_cameras, default_series_bands};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::sleep;

fn dashboard(seed: u64) -> Dashboard {
    Dashboard::new(
        default_cameras(),
        default_series_bands(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

fn total(live: &LiveDashboard) -> u64 {
    live.latest().unwrap().detections.total_detections
}

#[tokio::test(start_paused = true)]
async fn test_counter_animates_to_initial_total() {
    let mut live = LiveDashboard::new(&VigilConfig::default());
    live.start(dashboard(1)).unwrap();
    settle().await;

    sleep(Duration::from_millis(1000)).await;
    settle().await;
    let midway = live.counter_value();
    assert!(midway > 0 && midway < total(&live));

    sleep(Duration::from_millis(1000)).await;
    settle().await;
    assert_eq!(live.counter_value(), total(&live));
}

#[tokio::test(start_paused = true)]
async fn test_tick_restarts_counter_toward_new_total() {
    let mut live = LiveDashboard::new(&VigilConfig::default());
    live.start(dashboard(2)).unwrap();
    settle().await;

    sleep(Duration::from_millis(5000)).await;
    settle().await;
    assert_eq!(live.tick_count(), 1);
    assert!(live.counter_value() < total(&live));

    sleep(Duration::from_millis(2000)).await;
    settle().await;
    assert_eq!(live.counter_value(), total(&live));
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_everything() {
    let mut live = LiveDashboard::new(&VigilConfig::default());
    live.start(dashboard(3)).unwrap();
    settle().await;

    sleep(Duration::from_millis(5500)).await;
    settle().await;
    live.stop();
    live.stop();
    settle().await;

    let ticks = live.tick_count();
    let value = live.counter_value();
    assert!(!live.is_running());

    sleep(Duration::from_millis(20_000)).await;
    settle().await;
    assert_eq!(live.tick_count(), ticks);
    assert_eq!(live.counter_value(), value);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_counter_jumps_to_total() {
    let mut config = VigilConfig::default();
    config.counter.enabled = false;

    let mut live = LiveDashboard::new(&config);
    live.start(dashboard(4)).unwrap();
    assert_eq!(live.counter_value(), total(&live));

    sleep(Duration::from_millis(5000)).await;
    settle().await;
    assert_eq!(live.counter_value(), total(&live));
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_total_keeps_animation_running() {
    let mut config = VigilConfig::default();
    config.counter.duration_ms = 8000;

    // Seed 2097 draws the same total for the initial snapshot and tick 1
    let mut live = LiveDashboard::new(&config);
    live.start(dashboard(2097)).unwrap();
    settle().await;
    let initial_total = total(&live);

    sleep(Duration::from_millis(4900)).await;
    settle().await;
    let before_tick = live.counter_value();
    assert!(before_tick > 0);

    sleep(Duration::from_millis(200)).await;
    settle().await;
    assert_eq!(live.tick_count(), 1);
    assert_eq!(total(&live), initial_total);
    assert!(live.counter_value() >= before_tick);

    sleep(Duration::from_millis(3000)).await;
    settle().await;
    assert_eq!(live.counter_value(), initial_total);
}
