use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use vigil::config::{apply_env_overrides, load_or_default};
use vigil::dashboard::Dashboard;
use vigil::inventory::{default_inventory, InventorySummary};
use vigil::live::LiveDashboard;
use vigil::reports::{generate_daily_report, summarize};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil=info".into()),
        )
        .init();

    info!("Vigil starting...");

    let config_path = std::env::var("VIGIL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("vigil.toml"));

    let mut config = load_or_default(&config_path)?;
    apply_env_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(
        config = %config_path.display(),
        cameras = config.cameras.len(),
        refresh_interval_ms = config.refresh.interval_ms,
        seeded = config.generator.seed.is_some(),
        "Configuration loaded"
    );

    let dashboard = Dashboard::from_config(&config).context("Invalid camera configuration")?;

    for alert in dashboard.alerts() {
        info!(
            id = alert.id,
            severity = ?alert.severity,
            when = %alert.relative_time,
            "{}",
            alert.message
        );
    }

    for bucket in dashboard.confidence_histogram() {
        debug!(range = %bucket.range, count = bucket.count, "Detection confidence");
    }

    let inventory = InventorySummary::from_records(&default_inventory());
    info!(
        total = inventory.total,
        active = inventory.active,
        maintenance = inventory.maintenance,
        average_health = inventory.average_health,
        "Camera inventory"
    );

    if let Some(summary) = summarize(&generate_daily_report(Utc::now(), &mut rand::thread_rng())) {
        info!(
            days = summary.days,
            avg_fps = summary.avg_fps,
            total_detections = summary.total_detections,
            total_errors = summary.total_errors,
            "30-day performance report"
        );
    }

    let mut live = LiveDashboard::new(&config);
    live.start(dashboard).context("Failed to start live dashboard")?;

    let mut snapshots = live.subscribe();
    snapshots.mark_changed();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    warn!("Snapshot channel closed");
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                let Some(snapshot) = snapshot else { continue };

                info!(
                    tick = live.tick_count(),
                    active_cameras = snapshot.active_cameras(),
                    cpu = snapshot.system.cpu,
                    gpu = snapshot.system.gpu,
                    memory = snapshot.system.memory,
                    bottleneck = snapshot.system.bottleneck.as_str(),
                    total_detections = snapshot.detections.total_detections,
                    counter = live.counter_value(),
                    "Dashboard refreshed"
                );

                match serde_json::to_string(snapshot.as_ref()) {
                    Ok(json) => debug!(snapshot = %json, "Snapshot payload"),
                    Err(e) => warn!(error = %e, "Failed to serialize snapshot"),
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    live.stop();
    info!(ticks = live.tick_count(), "Vigil stopped");

    Ok(())
}
