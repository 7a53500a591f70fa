use super::{ReadyQueue, compare};
use crate::core::{Process, ProcessIdx, Ticks};

pub struct RescanQueue;

impl ReadyQueue for RescanQueue {
    fn init(_processes: &[Process]) -> Self {
        Self
    }

    fn pick(&mut self, processes: &[Process], now: Ticks) -> Option<ProcessIdx> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready(now))
            .max_by(|(_, a), (_, b)| compare(a, b))
            .map(|(idx, _)| idx)
    }
}
