pub mod driver;
pub mod metrics;
pub mod workload;

pub use driver::{Sim, SimOutput, run, run_with};
pub use metrics::{Metrics, ProcessMetrics};
