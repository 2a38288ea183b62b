// Managed camera inventory and its search/status filter

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Active,
    Inactive,
    Maintenance,
}

/// Status dropdown: everything, or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CameraStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: CameraStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGrade {
    Good,
    Fair,
    Poor,
}

impl HealthGrade {
    pub fn from_health(health: u32) -> Self {
        if health >= 90 {
            HealthGrade::Good
        } else if health >= 70 {
            HealthGrade::Fair
        } else {
            HealthGrade::Poor
        }
    }
}

/// Camera as listed on the management page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub ip: String,
    pub status: CameraStatus,
    pub fps: u32,
    pub resolution: String,
    pub codec: String,
    pub bitrate: String,
    pub uptime: String,
    pub detection_zones: u32,
    pub last_maintenance: String,
    pub model: String,
    pub firmware: String,
    pub health: u32,
}

impl CameraRecord {
    pub fn health_grade(&self) -> HealthGrade {
        HealthGrade::from_health(self.health)
    }

    /// Case-insensitive substring match on name, location or id
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
            || self.id.to_lowercase().contains(&needle)
    }
}

pub fn default_inventory() -> Vec<CameraRecord> {
    vec![
        record("CAM-01", "Main Gate Camera", "Main Gate", "192.168.1.101", CameraStatus::Active)
            .stream(28, "1920x1080", "H.264", "2.5 Mbps", "15d 8h 32m")
            .device(3, "2024-01-15", "Intel RealSense D435i", "v2.1.4", 95),
        record("CAM-02", "Parking Lot A", "Parking Lot A", "192.168.1.102", CameraStatus::Active)
            .stream(25, "1920x1080", "H.265", "1.8 Mbps", "12d 4h 15m")
            .device(2, "2024-01-10", "Intel RealSense D455", "v2.1.3", 88),
        record("CAM-03", "Building Entrance", "Building Entrance", "192.168.1.103", CameraStatus::Active)
            .stream(30, "2560x1440", "H.264", "3.2 Mbps", "8d 12h 45m")
            .device(4, "2024-01-20", "Intel RealSense D435i", "v2.1.4", 92),
        record("CAM-04", "Cafeteria Monitor", "Cafeteria", "192.168.1.104", CameraStatus::Maintenance)
            .stream(0, "1920x1080", "H.264", "0 Mbps", "0d 0h 0m")
            .device(2, "2024-01-25", "Intel RealSense D455", "v2.1.2", 45),
        record("CAM-05", "Loading Dock", "Loading Dock", "192.168.1.105", CameraStatus::Active)
            .stream(27, "1920x1080", "H.265", "2.1 Mbps", "20d 16h 8m")
            .device(3, "2024-01-05", "Intel RealSense D435i", "v2.1.4", 97),
    ]
}

fn record(id: &str, name: &str, location: &str, ip: &str, status: CameraStatus) -> CameraRecord {
    CameraRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        ip: ip.to_string(),
        status,
        fps: 0,
        resolution: String::new(),
        codec: String::new(),
        bitrate: String::new(),
        uptime: String::new(),
        detection_zones: 0,
        last_maintenance: String::new(),
        model: String::new(),
        firmware: String::new(),
        health: 0,
    }
}

impl CameraRecord {
    fn stream(mut self, fps: u32, resolution: &str, codec: &str, bitrate: &str, uptime: &str) -> Self {
        self.fps = fps;
        self.resolution = resolution.to_string();
        self.codec = codec.to_string();
        self.bitrate = bitrate.to_string();
        self.uptime = uptime.to_string();
        self
    }

    fn device(mut self, zones: u32, last_maintenance: &str, model: &str, firmware: &str, health: u32) -> Self {
        self.detection_zones = zones;
        self.last_maintenance = last_maintenance.to_string();
        self.model = model.to_string();
        self.firmware = firmware.to_string();
        self.health = health;
        self
    }
}

/// Records matching both the search text and the status filter, in order.
///
/// An empty search matches every record.
pub fn filter_cameras<'a>(
    records: &'a [CameraRecord],
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a CameraRecord> {
    records
        .iter()
        .filter(|r| r.matches_search(search) && filter.matches(r.status))
        .collect()
}

/// Header counters on the management page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub maintenance: usize,
    pub average_health: f64,
}

impl InventorySummary {
    pub fn from_records(records: &[CameraRecord]) -> Self {
        let count = |status: CameraStatus| records.iter().filter(|r| r.status == status).count();
        let average_health = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.health as f64).sum::<f64>() / records.len() as f64
        };

        Self {
            total: records.len(),
            active: count(CameraStatus::Active),
            inactive: count(CameraStatus::Inactive),
            maintenance: count(CameraStatus::Maintenance),
            average_health,
        }
    }
}
