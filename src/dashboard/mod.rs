// Live dashboard state: one consistent snapshot per refresh

use crate::config::VigilConfig;
use crate::telemetry::{
    confidence_histogram, generate_alerts, generate_camera_snapshot, generate_detection_stats,
    generate_performance_series, generate_system_metrics, validate_bands, validate_cameras,
    Alert, CameraConfig, CameraSnapshot, ConfidenceBucket, ConfigurationError, DetectionStats,
    PerformanceSeries, SeriesBand, SystemMetrics,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;


/// Everything the live dashboard shows, generated in a single pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub cameras: Vec<CameraSnapshot>,
    pub system: SystemMetrics,
    pub detections: DetectionStats,
    pub performance: PerformanceSeries,
}

impl DashboardSnapshot {
    /// Whole seconds since this snapshot was generated ("Updated Ns ago")
    ///
    /// Returns 0 if `now` is earlier than the generation time.
    pub fn seconds_ago(&self, now: DateTime<Utc>) -> u64 {
        (now - self.generated_at).num_seconds().max(0) as u64
    }

    pub fn active_cameras(&self) -> usize {
        self.cameras.iter().filter(|c| c.active).count()
    }
}

/// Owns the camera configuration and the random source.
///
/// Moved into the refresh task; nothing else mutates it.
pub struct Dashboard {
    cameras: Vec<CameraConfig>,
    bands: Vec<SeriesBand>,
    rng: StdRng,
}

impl Dashboard {
    /// Create dashboard with an explicit random source
    pub fn new(
        cameras: Vec<CameraConfig>,
        bands: Vec<SeriesBand>,
        rng: StdRng,
    ) -> Result<Self, ConfigurationError> {
        validate_cameras(&cameras)?;
        validate_bands(&bands, &cameras)?;

        Ok(Self { cameras, bands, rng })
    }

    /// Build from loaded configuration, seeding from `generator.seed` if set
    pub fn from_config(config: &VigilConfig) -> Result<Self, ConfigurationError> {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::new(config.cameras.clone(), config.series.clone(), rng)
    }

    pub fn cameras(&self) -> &[CameraConfig] {
        &self.cameras
    }

    /// Regenerate every random part of the dashboard at `now`.
    ///
    /// Either a complete snapshot is returned or nothing is.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> Result<DashboardSnapshot, ConfigurationError> {
        let cameras = generate_camera_snapshot(&self.cameras, &mut self.rng)?;
        let system = generate_system_metrics(&mut self.rng);
        let detections = generate_detection_stats(&mut self.rng);
        let performance = generate_performance_series(&self.bands, now, &mut self.rng);

        Ok(DashboardSnapshot {
            generated_at: now,
            cameras,
            system,
            detections,
            performance,
        })
    }

    /// Alert feed (static, not part of the refresh cycle)
    pub fn alerts(&self) -> Vec<Alert> {
        generate_alerts()
    }

    /// Confidence histogram (static, not part of the refresh cycle)
    pub fn confidence_histogram(&self) -> Vec<ConfidenceBucket> {
        confidence_histogram()
    }
}
