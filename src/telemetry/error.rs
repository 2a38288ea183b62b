use std::fmt;

/// Rejected camera list or settings supplied to the generators
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    EmptyCameraList,
    EmptyCameraId(usize),
    DuplicateCameraId(String),
    EmptyLocation(String),
    EmptySeriesCamera(usize),
    DuplicateSeriesBand(String),
    UnknownSeriesCamera(String),
    SeriesBaseOutOfRange { camera: String, base: u32 },
    InvalidSetting(String),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyCameraList => write!(f, "camera list must not be empty"),
            ConfigurationError::EmptyCameraId(index) => {
                write!(f, "camera at position {} has an empty id", index)
            }
            ConfigurationError::DuplicateCameraId(id) => {
                write!(f, "camera id '{}' appears more than once", id)
            }
            ConfigurationError::EmptyLocation(id) => {
                write!(f, "camera '{}' has an empty location", id)
            }
            ConfigurationError::EmptySeriesCamera(index) => {
                write!(f, "series band at position {} has an empty camera id", index)
            }
            ConfigurationError::DuplicateSeriesBand(camera) => {
                write!(f, "camera '{}' has more than one series band", camera)
            }
            ConfigurationError::UnknownSeriesCamera(camera) => {
                write!(f, "series band names unknown camera '{}'", camera)
            }
            ConfigurationError::SeriesBaseOutOfRange { camera, base } => {
                write!(f, "series band '{}' base {} is out of range", camera, base)
            }
            ConfigurationError::InvalidSetting(msg) => write!(f, "invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for ConfigurationError {}
