use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alerts::AlertLog;
use crate::classifier::classify;
use crate::history::HistoryRing;
use crate::models::{Alert, AlertThresholds, VitalSample, VitalsStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MonitorStatus {
    Idle,
    Running,
}

impl Default for MonitorStatus {
    fn default() -> Self {
        MonitorStatus::Idle
    }
}

/// The single owned state container for one monitoring session: current
/// sample, per-vital statuses, rolling history and the alert log. Mutated
/// only under the controller's lock; everyone else gets snapshots.
#[derive(Debug)]
pub struct MonitorState {
    pub status: MonitorStatus,
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub thresholds: AlertThresholds,
    pub current_sample: Option<VitalSample>,
    pub current_status: VitalsStatus,
    pub history: HistoryRing,
    pub alerts: AlertLog,
    pub ticks: u64,
}

impl MonitorState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            status: MonitorStatus::Idle,
            session_id: None,
            started_at: None,
            thresholds: AlertThresholds::default(),
            current_sample: None,
            current_status: VitalsStatus::default(),
            history: HistoryRing::new(history_capacity),
            alerts: AlertLog::new(),
            ticks: 0,
        }
    }

    pub fn begin_session(
        &mut self,
        session_id: String,
        thresholds: AlertThresholds,
        started_at: DateTime<Utc>,
    ) {
        self.status = MonitorStatus::Running;
        self.session_id = Some(session_id);
        self.started_at = Some(started_at);
        self.thresholds = thresholds;
        self.current_sample = None;
        self.current_status = VitalsStatus::default();
        self.history.clear();
        self.alerts.clear();
        self.ticks = 0;
    }

    pub fn end_session(&mut self) {
        self.status = MonitorStatus::Idle;
        self.session_id = None;
        self.started_at = None;
    }

    /// One tick's worth of work: classify the sample, append it to history,
    /// run alert deduplication. Returns the alerts this tick created.
    pub fn observe(&mut self, sample: VitalSample) -> Vec<Alert> {
        let statuses = classify(&sample, &self.thresholds);
        self.history.append(sample.clone());
        let emitted = self.alerts.evaluate(&statuses, &sample, sample.timestamp);
        self.current_sample = Some(sample);
        self.current_status = statuses;
        self.ticks = self.ticks.wrapping_add(1);
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodPressure, VitalStatus};

    fn hr_sample(heart_rate: f64) -> VitalSample {
        VitalSample {
            timestamp: Utc::now(),
            heart_rate,
            blood_pressure: BloodPressure {
                systolic: 120.0,
                diastolic: 80.0,
            },
            sp_o2: 98.0,
        }
    }

    fn running_state() -> MonitorState {
        let mut state = MonitorState::new(120);
        state.begin_session(
            "session-1".to_string(),
            AlertThresholds {
                tachycardia: Some(100.0),
                bradycardia: Some(60.0),
                ..AlertThresholds::default()
            },
            Utc::now(),
        );
        state
    }

    #[test]
    fn three_elevated_ticks_raise_one_alert() {
        let mut state = running_state();

        let mut emitted = Vec::new();
        for _ in 0..3 {
            emitted.extend(state.observe(hr_sample(105.0)));
        }

        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].kind, VitalStatus::Tachycardia);
        assert!(!emitted[0].acknowledged);
        assert_eq!(state.history.len(), 3);
        assert_eq!(state.current_status.heart_rate, VitalStatus::Tachycardia);

        // Every retained entry classifies as tachycardia.
        for sample in state.history.iter() {
            let statuses = classify(sample, &state.thresholds);
            assert_eq!(statuses.heart_rate, VitalStatus::Tachycardia);
        }
    }

    #[test]
    fn observe_tracks_current_sample_and_tick_count() {
        let mut state = running_state();
        state.observe(hr_sample(75.0));
        state.observe(hr_sample(78.0));

        assert_eq!(state.ticks, 2);
        assert_eq!(state.current_sample.as_ref().unwrap().heart_rate, 78.0);
        assert!(state.current_status.is_all_normal());
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn begin_session_resets_previous_session_data() {
        let mut state = running_state();
        state.observe(hr_sample(150.0));
        assert_eq!(state.alerts.len(), 1);
        state.end_session();

        state.begin_session("session-2".to_string(), AlertThresholds::default(), Utc::now());
        assert_eq!(state.status, MonitorStatus::Running);
        assert!(state.alerts.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.ticks, 0);
    }
}
