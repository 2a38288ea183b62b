// Synthetic telemetry records and their generators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod error;
pub mod generator;

pub use error::ConfigurationError;
pub use generator::{
    confidence_histogram, generate_alerts, generate_camera_snapshot, generate_detection_stats,
    generate_performance_series, generate_system_metrics, validate_bands, validate_cameras,
    MAX_SERIES_BASE,
};

#[cfg(test)]
mod tests;

/// Number of samples in a performance series
pub const SERIES_LEN: usize = 30;

/// Static description of one camera, supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub id: String,
    pub location: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CameraConfig {
    pub fn new(id: &str, location: &str, active: bool) -> Self {
        Self {
            id: id.to_string(),
            location: location.to_string(),
            active,
        }
    }
}

/// The nine cameras of the reference deployment (CAM-04 offline)
pub fn default_cameras() -> Vec<CameraConfig> {
    vec![
        CameraConfig::new("CAM-01", "Main Gate", true),
        CameraConfig::new("CAM-02", "Parking Lot A", true),
        CameraConfig::new("CAM-03", "Building Entrance", true),
        CameraConfig::new("CAM-04", "Cafeteria", false),
        CameraConfig::new("CAM-05", "Loading Dock", true),
        CameraConfig::new("CAM-06", "Emergency Exit", true),
        CameraConfig::new("CAM-07", "Server Room", true),
        CameraConfig::new("CAM-08", "Reception Area", true),
        CameraConfig::new("CAM-09", "Warehouse Floor", true),
    ]
}

/// FPS band of one tracked camera in the performance series.
///
/// Each sample is drawn uniformly from `[base, base + 4]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBand {
    pub camera: String,
    pub base: u32,
}

impl SeriesBand {
    pub fn new(camera: &str, base: u32) -> Self {
        Self {
            camera: camera.to_string(),
            base,
        }
    }
}

pub fn default_series_bands() -> Vec<SeriesBand> {
    vec![
        SeriesBand::new("CAM-01", 25),
        SeriesBand::new("CAM-02", 24),
        SeriesBand::new("CAM-03", 26),
        SeriesBand::new("CAM-05", 25),
        SeriesBand::new("CAM-06", 27),
    ]
}

/// Live state of one camera at refresh time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSnapshot {
    pub id: String,
    pub location: String,
    pub active: bool,
    pub fps: u32,
    pub motion_intensity: u32,
    pub detections: u32,
}

/// Resource saturation label shown next to the system gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bottleneck {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    Memory,
}

impl Bottleneck {
    pub const ALL: [Bottleneck; 3] = [Bottleneck::Cpu, Bottleneck::Gpu, Bottleneck::Memory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bottleneck::Cpu => "CPU",
            Bottleneck::Gpu => "GPU",
            Bottleneck::Memory => "Memory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub cpu: u32,
    pub gpu: u32,
    pub memory: u32,
    pub active_streams: u32,
    pub max_streams: u32,
    pub bottleneck: Bottleneck,
}

/// Detection breakdown by object class.
///
/// The four class values double as pie-chart shares and are not
/// normalized to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionStats {
    pub person: u32,
    pub vehicle: u32,
    pub bicycle: u32,
    pub other: u32,
    pub total_detections: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FpsReading {
    pub camera: String,
    pub fps: u32,
}

/// One minute of the rolling FPS chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSample {
    /// 24-hour `HH:MM` label
    pub time: String,
    pub timestamp: DateTime<Utc>,
    pub readings: Vec<FpsReading>,
}

impl PerformanceSample {
    pub fn fps_for(&self, camera: &str) -> Option<u32> {
        self.readings
            .iter()
            .find(|r| r.camera == camera)
            .map(|r| r.fps)
    }
}

/// Oldest sample first, newest sample at "now"
pub type PerformanceSeries = Vec<PerformanceSample>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
    pub relative_time: String,
}

/// One bar of the detection confidence histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBucket {
    pub range: String,
    pub count: u32,
}
