pub mod priq;
pub mod rescan;

use std::cmp::Ordering;

use crate::core::{Priority, Process, ProcessIdx, Ticks};
pub use priq::PriqQueue;
pub use rescan::RescanQueue;

// Greater means `a` runs before `b`
pub fn compare(a: &Process, b: &Process) -> Ordering {
    rank(
        (a.priority(), a.arrival_time(), a.id()),
        (b.priority(), b.arrival_time(), b.id()),
    )
}

fn rank(a: (Priority, Ticks, &str), b: (Priority, Ticks, &str)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| b.1.cmp(&a.1))
        .then_with(|| b.2.cmp(a.2))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionKey {
    priority: Priority,
    arrival_time: Ticks,
    id: String,
}

impl SelectionKey {
    pub fn of(process: &Process) -> Self {
        Self {
            priority: process.priority(),
            arrival_time: process.arrival_time(),
            id: process.id().to_owned(),
        }
    }
}

impl PartialOrd for SelectionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SelectionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(
            (self.priority, self.arrival_time, &self.id),
            (other.priority, other.arrival_time, &other.id),
        )
    }
}

pub trait ReadyQueue {
    fn init(processes: &[Process]) -> Self;

    fn admit(&mut self, _processes: &[Process], _now: Ticks) {}

    fn pick(&mut self, processes: &[Process], now: Ticks) -> Option<ProcessIdx>;

    fn completed(&mut self, _processes: &[Process], _idx: ProcessIdx) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, priority: Priority, arrival: i64) -> Process {
        Process::new(id, priority, arrival, 1).unwrap()
    }

    #[test]
    fn higher_priority_wins() {
        assert_eq!(compare(&p("B", 5, 9), &p("A", 1, 0)), Ordering::Greater);
    }

    #[test]
    fn earlier_arrival_breaks_priority_tie() {
        assert_eq!(compare(&p("B", 3, 1), &p("A", 3, 2)), Ordering::Greater);
    }

    #[test]
    fn smaller_id_breaks_remaining_tie() {
        assert_eq!(compare(&p("A", 3, 1), &p("B", 3, 1)), Ordering::Greater);
        // Lexicographic, not numeric
        assert_eq!(compare(&p("P10", 3, 1), &p("P2", 3, 1)), Ordering::Greater);
    }

    #[test]
    fn key_order_matches_process_order() {
        let procs = [p("A", 1, 0), p("B", 1, 0), p("C", 4, 3), p("D", 4, 2)];
        for a in &procs {
            for b in &procs {
                assert_eq!(SelectionKey::of(a).cmp(&SelectionKey::of(b)), compare(a, b));
            }
        }
    }
}
