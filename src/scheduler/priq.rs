use keyed_priority_queue::KeyedPriorityQueue;

use super::{ReadyQueue, SelectionKey};
use crate::core::{Process, ProcessIdx, Ticks};

// A preempted process stays queued below the new top
pub struct PriqQueue {
    ready: KeyedPriorityQueue<ProcessIdx, SelectionKey>,
    // Process indices sorted by arrival time
    arrivals: Vec<ProcessIdx>,
    arrival_cursor: usize,
}

impl ReadyQueue for PriqQueue {
    fn init(processes: &[Process]) -> Self {
        let mut arrivals: Vec<ProcessIdx> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&idx| processes[idx].arrival_time());

        Self {
            ready: KeyedPriorityQueue::new(),
            arrivals,
            arrival_cursor: 0,
        }
    }

    fn admit(&mut self, processes: &[Process], now: Ticks) {
        // Contiguous, since arrivals are sorted
        let arriving = self.arrivals[self.arrival_cursor..]
            .iter()
            .take_while(|&&idx| processes[idx].arrival_time() <= now);

        for &idx in arriving {
            let process = &processes[idx];
            debug_assert!(!process.is_finished(), "Finished process {} admitted", process.id());
            self.ready.push(idx, SelectionKey::of(process));
            self.arrival_cursor += 1;
        }
    }

    fn pick(&mut self, _processes: &[Process], _now: Ticks) -> Option<ProcessIdx> {
        self.ready.peek().map(|(&idx, _)| idx)
    }

    fn completed(&mut self, processes: &[Process], idx: ProcessIdx) {
        let removed = self.ready.remove(&idx);
        debug_assert!(
            removed.is_some(),
            "Completed process {} missing from ready queue",
            processes[idx].id()
        );
    }
}
