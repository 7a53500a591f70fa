pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Process, SimEvent};
pub use error::{SimError, WorkloadError};
pub use scheduler::ReadyQueue;
pub use sim::{Metrics, Sim, SimOutput};
