mod alert;
mod profile;
mod vitals;

pub use alert::{Alert, Severity};
pub use profile::{AlertThresholds, ResolvedThresholds, UserProfile};
pub use vitals::{BloodPressure, VitalSample, VitalStatus, VitalsStatus};
