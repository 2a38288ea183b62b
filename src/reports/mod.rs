// Long-range performance reports (30-day and 24-hour views)

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;


pub const REPORT_DAYS: usize = 30;
pub const ACTIVITY_HOURS: usize = 24;

/// One day of aggregated pipeline performance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPerformance {
    /// `Mon dd` label, e.g. "Mar 01"
    pub date: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "avgFPS")]
    pub avg_fps: u32,
    pub cpu_usage: u32,
    pub gpu_usage: u32,
    pub memory_usage: u32,
    pub detections: u32,
    pub uptime: u32,
    pub errors: u32,
    pub bandwidth: u32,
}

/// One hour of detection activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyActivity {
    /// `HH:MM` label
    pub hour: String,
    pub timestamp: DateTime<Utc>,
    pub detections: u32,
    pub persons: u32,
    pub vehicles: u32,
    pub alerts: u32,
}

/// Per-camera line of the reports table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPerformance {
    pub camera: String,
    #[serde(rename = "avgFPS")]
    pub avg_fps: f64,
    pub uptime: f64,
    pub detections: u32,
    pub errors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Warning,
}

impl HealthStatus {
    /// Report-page thresholds: 95 and up is excellent, 85 and up good
    pub fn from_score(score: u32) -> Self {
        if score >= 95 {
            HealthStatus::Excellent
        } else if score >= 85 {
            HealthStatus::Good
        } else {
            HealthStatus::Warning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub health: u32,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemHealth {
    pub overall: u32,
    pub components: Vec<ComponentHealth>,
}

/// Averages and totals over a daily report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub days: usize,
    pub avg_fps: f64,
    pub avg_cpu: f64,
    pub avg_gpu: f64,
    pub avg_memory: f64,
    pub avg_uptime: f64,
    pub total_detections: u64,
    pub total_errors: u64,
}

/// 30 daily samples, oldest first, the last one dated `now`
pub fn generate_daily_report<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<DailyPerformance> {
    (0..REPORT_DAYS)
        .rev()
        .map(|days_back| {
            let timestamp = now - Duration::days(days_back as i64);
            DailyPerformance {
                date: timestamp.format("%b %d").to_string(),
                timestamp,
                avg_fps: rng.gen_range(25..=29),
                cpu_usage: rng.gen_range(60..=89),
                gpu_usage: rng.gen_range(50..=89),
                memory_usage: rng.gen_range(65..=89),
                detections: rng.gen_range(1000..=1499),
                uptime: rng.gen_range(95..=104),
                errors: rng.gen_range(0..=4),
                bandwidth: rng.gen_range(80..=99),
            }
        })
        .collect()
}

/// 24 hourly samples, oldest first, the last one at `now`
pub fn generate_hourly_activity<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<HourlyActivity> {
    (0..ACTIVITY_HOURS)
        .rev()
        .map(|hours_back| {
            let timestamp = now - Duration::hours(hours_back as i64);
            HourlyActivity {
                hour: timestamp.format("%H:%M").to_string(),
                timestamp,
                detections: rng.gen_range(50..=149),
                persons: rng.gen_range(30..=89),
                vehicles: rng.gen_range(20..=59),
                alerts: rng.gen_range(0..=9),
            }
        })
        .collect()
}

pub fn camera_performance() -> Vec<CameraPerformance> {
    let row = |camera: &str, avg_fps, uptime, detections, errors| CameraPerformance {
        camera: camera.to_string(),
        avg_fps,
        uptime,
        detections,
        errors,
    };

    vec![
        row("CAM-01", 28.5, 99.8, 1250, 2),
        row("CAM-02", 27.2, 98.5, 980, 5),
        row("CAM-03", 29.1, 99.9, 1450, 1),
        row("CAM-04", 0.0, 45.2, 0, 15),
        row("CAM-05", 26.8, 97.8, 1100, 3),
    ]
}

pub fn system_health() -> SystemHealth {
    let component = |name: &str, health: u32| ComponentHealth {
        name: name.to_string(),
        health,
        status: HealthStatus::from_score(health),
    };

    SystemHealth {
        overall: 94,
        components: vec![
            component("CPU", 92),
            component("GPU", 96),
            component("Memory", 88),
            component("Storage", 94),
            component("Network", 99),
        ],
    }
}

/// Returns `None` for an empty report
pub fn summarize(report: &[DailyPerformance]) -> Option<ReportSummary> {
    if report.is_empty() {
        return None;
    }

    let days = report.len();
    let mean = |f: fn(&DailyPerformance) -> u32| {
        report.iter().map(|d| f(d) as f64).sum::<f64>() / days as f64
    };

    Some(ReportSummary {
        days,
        avg_fps: mean(|d| d.avg_fps),
        avg_cpu: mean(|d| d.cpu_usage),
        avg_gpu: mean(|d| d.gpu_usage),
        avg_memory: mean(|d| d.memory_usage),
        avg_uptime: mean(|d| d.uptime),
        total_detections: report.iter().map(|d| d.detections as u64).sum(),
        total_errors: report.iter().map(|d| d.errors as u64).sum(),
    })
}
