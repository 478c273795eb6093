pub mod alerts;
pub mod classifier;
pub mod config;
pub mod generator;
pub mod history;
pub mod models;
pub mod monitor;

pub use alerts::AlertLog;
pub use config::{MonitorConfig, WalkConfig};
pub use generator::{PerturbationSource, RandomWalk, SampleGenerator};
pub use history::HistoryRing;
pub use models::{
    Alert, AlertThresholds, BloodPressure, Severity, UserProfile, VitalSample, VitalStatus,
    VitalsStatus,
};
pub use monitor::{MonitorController, MonitorEvent, MonitorSnapshot, MonitorStatus};
