use crate::models::{AlertThresholds, Severity, VitalSample, VitalStatus, VitalsStatus};

// Secondary critical bounds. Breaching one escalates an alert to high
// severity; they are not user-configurable.
const CRITICAL_HEART_RATE_HIGH: f64 = 180.0;
const CRITICAL_HEART_RATE_LOW: f64 = 40.0;
const CRITICAL_SYSTOLIC_HIGH: f64 = 180.0;
const CRITICAL_SYSTOLIC_LOW: f64 = 80.0;
const CRITICAL_SPO2_LOW: f64 = 90.0;

/// Classifies one sample against the user's thresholds. Pure function of the
/// sample and the thresholds; each vital is judged independently.
///
/// Blood pressure gates on systolic only. The profile carries diastolic
/// bounds, but classification has never used them.
pub fn classify(sample: &VitalSample, thresholds: &AlertThresholds) -> VitalsStatus {
    let t = thresholds.resolve();

    let heart_rate = if sample.heart_rate > t.tachycardia {
        VitalStatus::Tachycardia
    } else if sample.heart_rate < t.bradycardia {
        VitalStatus::Bradycardia
    } else {
        VitalStatus::Normal
    };

    let systolic = sample.blood_pressure.systolic;
    let blood_pressure = if systolic > t.hypertension_systolic {
        VitalStatus::Hypertension
    } else if systolic < t.hypotension_systolic {
        VitalStatus::Hypotension
    } else {
        VitalStatus::Normal
    };

    let sp_o2 = if sample.sp_o2 < t.low_spo2 {
        VitalStatus::LowSpO2
    } else {
        VitalStatus::Normal
    };

    VitalsStatus {
        heart_rate,
        blood_pressure,
        sp_o2,
    }
}

/// Severity for an alert of the given kind: medium for an ordinary threshold
/// breach, high once a critical bound is crossed. The low tier is reserved
/// for trend-only indicators.
pub fn severity_for(kind: VitalStatus, sample: &VitalSample) -> Severity {
    match kind {
        VitalStatus::Tachycardia if sample.heart_rate > CRITICAL_HEART_RATE_HIGH => Severity::High,
        VitalStatus::Bradycardia if sample.heart_rate < CRITICAL_HEART_RATE_LOW => Severity::High,
        VitalStatus::Hypertension
            if sample.blood_pressure.systolic > CRITICAL_SYSTOLIC_HIGH =>
        {
            Severity::High
        }
        VitalStatus::Hypotension if sample.blood_pressure.systolic < CRITICAL_SYSTOLIC_LOW => {
            Severity::High
        }
        VitalStatus::LowSpO2 if sample.sp_o2 < CRITICAL_SPO2_LOW => Severity::High,
        VitalStatus::Normal => Severity::Low,
        _ => Severity::Medium,
    }
}

/// Human-readable alert text, mirroring the dashboard wording.
pub fn alert_message(kind: VitalStatus, sample: &VitalSample) -> String {
    match kind {
        VitalStatus::Tachycardia => {
            format!("Heart rate elevated: {:.0} BPM", sample.heart_rate)
        }
        VitalStatus::Bradycardia => format!("Heart rate low: {:.0} BPM", sample.heart_rate),
        VitalStatus::Hypertension => format!(
            "Blood pressure high: {:.0}/{:.0} mmHg",
            sample.blood_pressure.systolic, sample.blood_pressure.diastolic
        ),
        VitalStatus::Hypotension => format!(
            "Blood pressure low: {:.0}/{:.0} mmHg",
            sample.blood_pressure.systolic, sample.blood_pressure.diastolic
        ),
        VitalStatus::LowSpO2 => format!("Oxygen saturation low: {:.0}%", sample.sp_o2),
        VitalStatus::Normal => "Vitals within configured limits".to_string(),
    }
}
