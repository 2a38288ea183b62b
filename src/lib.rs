// Configuration loading and env overrides
pub mod config;

// Synthetic telemetry records and generators
pub mod telemetry;

// Consistent per-refresh dashboard snapshot
pub mod dashboard;

// Recurring refresh timer
pub mod scheduler;

// Animated total-detections counter
pub mod counter;

// Scheduler + counter wired together
pub mod live;

// 30-day / 24-hour performance reports
pub mod reports;

// Managed camera inventory
pub mod inventory;
