pub mod controller;
pub mod loop_worker;
pub mod state;

pub use controller::{MonitorController, MonitorEvent, MonitorSnapshot};
pub use state::{MonitorState, MonitorStatus};
