pub mod event;
pub mod observer;
pub mod process;

pub use event::SimEvent;
pub use observer::Observer;
pub use process::{Priority, Process, ProcessIdx, Ticks};
