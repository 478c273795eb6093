use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// One timestamped reading of heart rate, blood pressure and oxygen
/// saturation. Immutable once produced by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalSample {
    pub timestamp: DateTime<Utc>,
    pub heart_rate: f64,
    pub blood_pressure: BloodPressure,
    pub sp_o2: f64,
}

impl VitalSample {
    /// Resting-adult baseline used for the first tick of a session.
    pub fn baseline(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            heart_rate: 75.0,
            blood_pressure: BloodPressure {
                systolic: 120.0,
                diastolic: 80.0,
            },
            sp_o2: 98.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum VitalStatus {
    Normal,
    Tachycardia,
    Bradycardia,
    Hypertension,
    Hypotension,
    #[serde(rename = "lowSpO2")]
    LowSpO2,
}

impl VitalStatus {
    pub fn is_abnormal(&self) -> bool {
        *self != VitalStatus::Normal
    }

    pub fn label(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "Normal",
            VitalStatus::Tachycardia => "High Heart Rate",
            VitalStatus::Bradycardia => "Low Heart Rate",
            VitalStatus::Hypertension => "High Blood Pressure",
            VitalStatus::Hypotension => "Low Blood Pressure",
            VitalStatus::LowSpO2 => "Low Oxygen Saturation",
        }
    }
}

impl Default for VitalStatus {
    fn default() -> Self {
        VitalStatus::Normal
    }
}

/// Independent per-vital judgements for one sample. A single sample can be
/// abnormal on several vitals at once; nothing here collapses them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsStatus {
    pub heart_rate: VitalStatus,
    pub blood_pressure: VitalStatus,
    pub sp_o2: VitalStatus,
}

impl VitalsStatus {
    pub fn is_all_normal(&self) -> bool {
        !self.heart_rate.is_abnormal()
            && !self.blood_pressure.is_abnormal()
            && !self.sp_o2.is_abnormal()
    }

    /// Abnormal judgements only, in fixed heart-rate, blood-pressure,
    /// SpO2 order.
    pub fn abnormal(&self) -> impl Iterator<Item = VitalStatus> {
        [self.heart_rate, self.blood_pressure, self.sp_o2]
            .into_iter()
            .filter(VitalStatus::is_abnormal)
    }
}
