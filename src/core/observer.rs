use super::{
    event::SimEvent,
    process::{Process, ProcessIdx, Ticks},
};
use std::cmp::Ordering;

use crate::scheduler::compare;

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    trace: Vec<SimEvent>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, events: &[SimEvent]) {
        self.step += 1;
        self.trace.extend_from_slice(events);
    }

    pub fn observe_selection(&self, processes: &[Process], chosen: ProcessIdx, now: Ticks) {
        let selected = &processes[chosen];
        debug_assert!(
            selected.is_ready(now),
            "Process {} selected at t={now} but not ready",
            selected.id()
        );

        for other in processes.iter().filter(|p| p.is_ready(now)) {
            debug_assert!(
                compare(other, selected) != Ordering::Greater,
                "Process {} outranks selected {} at t={now}",
                other.id(),
                selected.id()
            );
        }
    }

    pub fn observe_idle(&self, processes: &[Process], now: Ticks) {
        for process in processes {
            debug_assert!(
                !process.is_ready(now),
                "Idle jump at t={now} while {} is ready",
                process.id()
            );
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn trace(&self) -> &[SimEvent] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<SimEvent> {
        self.trace
    }
}
