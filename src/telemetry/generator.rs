use super::{
    Alert, Bottleneck, CameraConfig, CameraSnapshot, ConfidenceBucket, ConfigurationError,
    DetectionStats, FpsReading, PerformanceSample, PerformanceSeries, SeriesBand, Severity,
    SystemMetrics, SERIES_LEN,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashSet;

const ACTIVE_STREAMS: u32 = 8;
const MAX_STREAMS: u32 = 12;

/// Width of a series band above its base
const BAND_SPREAD: u32 = 4;

/// Highest base a series band may declare
pub const MAX_SERIES_BASE: u32 = u32::MAX - BAND_SPREAD;

/// Check a camera list before any snapshot is built from it.
///
/// Rules:
/// - at least one camera
/// - non-empty, unique ids
/// - non-empty locations
pub fn validate_cameras(cameras: &[CameraConfig]) -> Result<(), ConfigurationError> {
    if cameras.is_empty() {
        return Err(ConfigurationError::EmptyCameraList);
    }

    let mut seen = HashSet::with_capacity(cameras.len());
    for (index, camera) in cameras.iter().enumerate() {
        if camera.id.trim().is_empty() {
            return Err(ConfigurationError::EmptyCameraId(index));
        }
        if camera.location.trim().is_empty() {
            return Err(ConfigurationError::EmptyLocation(camera.id.clone()));
        }
        if !seen.insert(camera.id.as_str()) {
            return Err(ConfigurationError::DuplicateCameraId(camera.id.clone()));
        }
    }

    Ok(())
}

/// Check series bands against the camera list they plot.
///
/// Every band needs a non-empty camera id that exists in `cameras`, at most
/// one band per camera, and a base no higher than `MAX_SERIES_BASE`.
pub fn validate_bands(bands: &[SeriesBand], cameras: &[CameraConfig]) -> Result<(), ConfigurationError> {
    let known: HashSet<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::with_capacity(bands.len());

    for (index, band) in bands.iter().enumerate() {
        if band.camera.trim().is_empty() {
            return Err(ConfigurationError::EmptySeriesCamera(index));
        }
        if !known.contains(band.camera.as_str()) {
            return Err(ConfigurationError::UnknownSeriesCamera(band.camera.clone()));
        }
        if !seen.insert(band.camera.as_str()) {
            return Err(ConfigurationError::DuplicateSeriesBand(band.camera.clone()));
        }
        if band.base > MAX_SERIES_BASE {
            return Err(ConfigurationError::SeriesBaseOutOfRange {
                camera: band.camera.clone(),
                base: band.base,
            });
        }
    }

    Ok(())
}

/// Draw per-camera stats for every configured camera, preserving order.
///
/// Inactive cameras report zero fps, motion and detections.
pub fn generate_camera_snapshot<R: Rng + ?Sized>(
    cameras: &[CameraConfig],
    rng: &mut R,
) -> Result<Vec<CameraSnapshot>, ConfigurationError> {
    validate_cameras(cameras)?;

    let snapshot = cameras
        .iter()
        .map(|camera| {
            let (fps, motion_intensity, detections) = if camera.active {
                (
                    rng.gen_range(25..=29),
                    rng.gen_range(0..=99),
                    rng.gen_range(0..=19),
                )
            } else {
                (0, 0, 0)
            };

            CameraSnapshot {
                id: camera.id.clone(),
                location: camera.location.clone(),
                active: camera.active,
                fps,
                motion_intensity,
                detections,
            }
        })
        .collect();

    Ok(snapshot)
}

/// Resource gauges. The bottleneck label is drawn on its own and is not
/// derived from the gauge values.
pub fn generate_system_metrics<R: Rng + ?Sized>(rng: &mut R) -> SystemMetrics {
    SystemMetrics {
        cpu: rng.gen_range(60..=89),
        gpu: rng.gen_range(50..=89),
        memory: rng.gen_range(65..=89),
        active_streams: ACTIVE_STREAMS,
        max_streams: MAX_STREAMS,
        bottleneck: Bottleneck::ALL[rng.gen_range(0..Bottleneck::ALL.len())],
    }
}

pub fn generate_detection_stats<R: Rng + ?Sized>(rng: &mut R) -> DetectionStats {
    DetectionStats {
        person: rng.gen_range(50..=69),
        vehicle: rng.gen_range(25..=39),
        bicycle: rng.gen_range(5..=14),
        other: rng.gen_range(5..=14),
        total_detections: rng.gen_range(15_000..=15_999),
    }
}

/// Rolling 30-minute FPS window ending at `now`.
///
/// Samples are independent draws; adjacent points are not correlated.
pub fn generate_performance_series<R: Rng + ?Sized>(
    bands: &[SeriesBand],
    now: DateTime<Utc>,
    rng: &mut R,
) -> PerformanceSeries {
    (0..SERIES_LEN)
        .rev()
        .map(|minutes_back| {
            let timestamp = now - Duration::minutes(minutes_back as i64);
            let readings = bands
                .iter()
                .map(|band| FpsReading {
                    camera: band.camera.clone(),
                    fps: rng.gen_range(band.base..=band.base.saturating_add(BAND_SPREAD)),
                })
                .collect();

            PerformanceSample {
                time: timestamp.format("%H:%M").to_string(),
                timestamp,
                readings,
            }
        })
        .collect()
}

/// Seeded alert feed; not randomized
pub fn generate_alerts() -> Vec<Alert> {
    let alert = |id, severity, message: &str, relative_time: &str| Alert {
        id,
        severity,
        message: message.to_string(),
        relative_time: relative_time.to_string(),
    };

    vec![
        alert(1, Severity::Warning, "High GPU usage detected (89%)", "2 min ago"),
        alert(2, Severity::Info, "New object detected: Bicycle at CAM-04", "5 min ago"),
        alert(3, Severity::Error, "Stream disconnected: CAM-04", "8 min ago"),
        alert(4, Severity::Success, "All systems optimal", "12 min ago"),
        alert(5, Severity::Warning, "Memory usage above 85%", "15 min ago"),
    ]
}

/// Detection confidence histogram, highest bucket first; not randomized
pub fn confidence_histogram() -> Vec<ConfidenceBucket> {
    let bucket = |range: &str, count| ConfidenceBucket {
        range: range.to_string(),
        count,
    };

    vec![
        bucket("90-100%", 45),
        bucket("80-89%", 32),
        bucket("70-79%", 28),
        bucket("60-69%", 15),
        bucket("50-59%", 8),
    ]
}
