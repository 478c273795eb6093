use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{VitalSample, VitalStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One abnormal-condition episode. Created once when the condition is first
/// observed, mutated only by acknowledgment, never deleted within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: VitalStatus,
    pub severity: Severity,
    pub message: String,
    /// The sample that triggered the alert.
    pub reading: VitalSample,
    pub acknowledged: bool,
}
