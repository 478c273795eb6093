use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use tokio::sync::{broadcast, Mutex};
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::MonitorConfig;
use crate::generator::{PerturbationSource, SampleGenerator};
use crate::models::VitalSample;

use super::controller::MonitorEvent;
use super::state::{MonitorState, MonitorStatus};

/// Drives one monitoring session: generate the next sample on each tick,
/// feed it through the state container, publish events. Acknowledgments and
/// snapshots share the state mutex, so an acknowledgment that completes
/// before a tick is always visible to that tick's dedup check.
pub async fn monitor_loop<P>(
    state: Arc<Mutex<MonitorState>>,
    mut generator: SampleGenerator<P>,
    config: MonitorConfig,
    events: broadcast::Sender<MonitorEvent>,
    cancel_token: CancellationToken,
) where
    P: PerturbationSource + Send,
{
    let mut interval = time::interval(config.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u32 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Utc::now();

                let (sample, statuses, emitted, history_len, unacknowledged) = {
                    let mut guard = state.lock().await;
                    if guard.status != MonitorStatus::Running {
                        break;
                    }

                    let sample = match guard.current_sample.as_ref() {
                        Some(prev) => generator.next_sample(prev, now),
                        None => VitalSample::baseline(now),
                    };

                    let emitted = guard.observe(sample.clone());
                    (
                        sample,
                        guard.current_status,
                        emitted,
                        guard.history.len(),
                        guard.alerts.unacknowledged_count(),
                    )
                };

                debug!(
                    "tick: hr={:.0} bp={:.0}/{:.0} spo2={:.0}",
                    sample.heart_rate,
                    sample.blood_pressure.systolic,
                    sample.blood_pressure.diastolic,
                    sample.sp_o2,
                );

                for alert in emitted {
                    let _ = events.send(MonitorEvent::AlertRaised { alert });
                }
                let _ = events.send(MonitorEvent::SampleRecorded {
                    sample,
                    status: statuses,
                });

                ticks = ticks.wrapping_add(1);
                if config.heartbeat_every_ticks > 0 && ticks % config.heartbeat_every_ticks == 0 {
                    info!(
                        "session heartbeat: {} samples in history, {} unacknowledged alerts",
                        history_len, unacknowledged,
                    );
                }
            }
            _ = cancel_token.cancelled() => {
                info!("monitor loop shutting down");
                break;
            }
        }
    }
}
