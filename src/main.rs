use anyhow::Result;
use log::{debug, info, warn};
use tokio::sync::broadcast::error::RecvError;

use vitalwatch::models::UserProfile;
use vitalwatch::monitor::{MonitorController, MonitorEvent};
use vitalwatch::MonitorConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("vitalwatch starting up...");

    let controller = MonitorController::new(MonitorConfig::default());
    let mut events = controller.subscribe();

    let profile = UserProfile::demo();
    let session_id = controller.start(&profile).await?;
    info!("session {session_id} running; press ctrl-c to stop");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(MonitorEvent::AlertRaised { alert }) => {
                    info!("ALERT [{:?}] {}", alert.severity, alert.message);
                }
                Ok(MonitorEvent::SampleRecorded { sample, .. }) => {
                    debug!(
                        "sample: hr={:.0} bp={:.0}/{:.0} spo2={:.0}",
                        sample.heart_rate,
                        sample.blood_pressure.systolic,
                        sample.blood_pressure.diastolic,
                        sample.sp_o2,
                    );
                }
                Ok(MonitorEvent::StateChanged { status }) => {
                    info!("monitor state: {status:?}");
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("event stream lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                controller.stop().await?;
                break;
            }
        }
    }

    Ok(())
}
