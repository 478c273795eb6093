use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use crate::classifier::{alert_message, severity_for};
use crate::models::{Alert, VitalSample, VitalStatus, VitalsStatus};

/// Session-scoped alert log with per-condition deduplication.
///
/// The log only ever grows within a session; acknowledgment flips a flag and
/// re-arms that condition for future emission. Invariant: at most one
/// unacknowledged alert exists per condition at any time.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: Vec<Alert>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tick's judgements. Emits a new alert for each abnormal
    /// condition that has no unacknowledged alert yet; an ongoing episode
    /// that is already flagged is suppressed. Returns the newly created
    /// alerts.
    pub fn evaluate(
        &mut self,
        statuses: &VitalsStatus,
        sample: &VitalSample,
        now: DateTime<Utc>,
    ) -> Vec<Alert> {
        let mut emitted = Vec::new();

        for kind in statuses.abnormal() {
            if self.has_active(kind) {
                continue;
            }

            let alert = Alert {
                id: Uuid::new_v4().to_string(),
                timestamp: now,
                kind,
                severity: severity_for(kind, sample),
                message: alert_message(kind, sample),
                reading: sample.clone(),
                acknowledged: false,
            };
            info!("alert raised ({}): {}", kind.label(), alert.message);
            self.alerts.push(alert.clone());
            emitted.push(alert);
        }

        emitted
    }

    /// Marks the alert as acknowledged, returning that condition to its
    /// quiescent state. Unknown or already-acknowledged ids are reported so
    /// the caller can log them; neither is fatal.
    pub fn acknowledge(&mut self, alert_id: &str) -> Result<()> {
        match self.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) if !alert.acknowledged => {
                alert.acknowledged = true;
                info!("alert {} acknowledged ({})", alert.id, alert.kind.label());
                Ok(())
            }
            Some(_) => bail!("alert {alert_id} already acknowledged"),
            None => bail!("no alert with id {alert_id}"),
        }
    }

    fn has_active(&self, kind: VitalStatus) -> bool {
        self.alerts
            .iter()
            .any(|a| a.kind == kind && !a.acknowledged)
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// The latest `limit` alerts, newest first, for dashboard-style views.
    pub fn recent(&self, limit: usize) -> Vec<Alert> {
        self.alerts.iter().rev().take(limit).cloned().collect()
    }

    pub fn unacknowledged_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.acknowledged).count()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }
}
