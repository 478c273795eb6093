use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::MonitorConfig;
use crate::generator::{RandomWalk, SampleGenerator};
use crate::models::{Alert, UserProfile, VitalSample, VitalsStatus};

use super::loop_worker::monitor_loop;
use super::state::{MonitorState, MonitorStatus};

/// Read-only view of the engine for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    pub status: MonitorStatus,
    pub session_id: Option<String>,
    pub current_sample: Option<VitalSample>,
    pub current_status: VitalsStatus,
    pub history: Vec<VitalSample>,
    pub alerts: Vec<Alert>,
}

/// Change notifications published to subscribers on every tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "payload")]
pub enum MonitorEvent {
    StateChanged { status: MonitorStatus },
    SampleRecorded { sample: VitalSample, status: VitalsStatus },
    AlertRaised { alert: Alert },
}

/// Cloneable handle owning the session state and the tick loop. One
/// controller per client session; starting while running is an error,
/// stopping is idempotent and deterministically tears the loop down.
#[derive(Clone)]
pub struct MonitorController {
    state: Arc<Mutex<MonitorState>>,
    config: MonitorConfig,
    events: broadcast::Sender<MonitorEvent>,
    worker: Arc<Mutex<Option<(JoinHandle<()>, CancellationToken)>>>,
}

impl MonitorController {
    pub fn new(config: MonitorConfig) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            state: Arc::new(Mutex::new(MonitorState::new(config.history_capacity))),
            config,
            events,
            worker: Arc::new(Mutex::new(None)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MonitorEvent> {
        self.events.subscribe()
    }

    /// Begins a monitoring session for the given user and spawns the tick
    /// loop. Returns the new session id.
    pub async fn start(&self, profile: &UserProfile) -> Result<String> {
        {
            let state = self.state.lock().await;
            if state.status != MonitorStatus::Idle {
                bail!("monitor already running");
            }
        }

        let session_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();

        {
            let mut state = self.state.lock().await;
            state.begin_session(session_id.clone(), profile.thresholds.clone(), started_at);
        }

        let generator =
            SampleGenerator::new(self.config.walk.clone(), RandomWalk::from_entropy());
        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(monitor_loop(
            self.state.clone(),
            generator,
            self.config.clone(),
            self.events.clone(),
            cancel_token.clone(),
        ));
        *self.worker.lock().await = Some((handle, cancel_token));

        info!(
            "monitoring session {} started for {}",
            session_id, profile.full_name
        );
        let _ = self.events.send(MonitorEvent::StateChanged {
            status: MonitorStatus::Running,
        });

        Ok(session_id)
    }

    /// Stops the session and joins the loop task so no tick can run against
    /// a torn-down session. Safe to call when idle.
    pub async fn stop(&self) -> Result<()> {
        let worker = self.worker.lock().await.take();
        if let Some((handle, token)) = worker {
            token.cancel();
            handle.await.context("monitor loop task failed to join")?;
        }

        let mut state = self.state.lock().await;
        if state.status == MonitorStatus::Idle {
            return Ok(());
        }
        state.end_session();
        info!("monitoring session stopped");
        drop(state);

        let _ = self.events.send(MonitorEvent::StateChanged {
            status: MonitorStatus::Idle,
        });
        Ok(())
    }

    pub async fn snapshot(&self) -> MonitorSnapshot {
        let state = self.state.lock().await;
        MonitorSnapshot {
            status: state.status,
            session_id: state.session_id.clone(),
            current_sample: state.current_sample.clone(),
            current_status: state.current_status,
            history: state.history.to_vec(),
            alerts: state.alerts.all().to_vec(),
        }
    }

    /// Acknowledges one alert. Takes the same lock as the tick loop, so an
    /// acknowledgment that returns before a tick is visible to that tick's
    /// dedup check. Unknown ids are logged and returned as errors the
    /// caller may ignore.
    pub async fn acknowledge_alert(&self, alert_id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.alerts.acknowledge(alert_id) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("acknowledge ignored: {err}");
                Err(err)
            }
        }
    }

    /// The latest `limit` alerts, newest first.
    pub async fn recent_alerts(&self, limit: usize) -> Vec<Alert> {
        self.state.lock().await.alerts.recent(limit)
    }
}
