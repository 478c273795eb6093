use std::time::Duration;

/// Tunable knobs for the monitoring loop.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Cadence of sample generation while a session is running.
    pub tick_interval: Duration,

    /// Rolling history size: 120 samples = 2 minutes at 1 Hz.
    pub history_capacity: usize,

    /// Log a session summary every N ticks (1 = every tick).
    pub heartbeat_every_ticks: u32,

    /// Random-walk step sizes and hard physiological clamps.
    pub walk: WalkConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            history_capacity: 120,
            heartbeat_every_ticks: 10,
            walk: WalkConfig::default(),
        }
    }
}

/// Per-field walk parameters: the uniform jitter half-range applied each
/// tick, and the saturating bounds the result is clamped into.
#[derive(Debug, Clone)]
pub struct FieldWalk {
    pub jitter: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub heart_rate: FieldWalk,
    pub systolic: FieldWalk,
    pub diastolic: FieldWalk,
    pub sp_o2: FieldWalk,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            heart_rate: FieldWalk {
                jitter: 3.0,
                min: 40.0,
                max: 160.0,
            },
            systolic: FieldWalk {
                jitter: 2.0,
                min: 70.0,
                max: 190.0,
            },
            diastolic: FieldWalk {
                jitter: 2.0,
                min: 40.0,
                max: 120.0,
            },
            sp_o2: FieldWalk {
                jitter: 1.0,
                min: 85.0,
                max: 100.0,
            },
        }
    }
}
