use std::fmt;

use crate::core::{Process, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst: Ticks,
    pub completion_time: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
    // Time from arrival to first run
    pub response: Ticks,
}

impl ProcessMetrics {
    pub fn of(process: &Process) -> Self {
        let id = process.id();
        let completion_time = process
            .completion_time()
            .unwrap_or_else(|| panic!("Metrics requested for unfinished process {id}"));
        let start_time = process
            .start_time()
            .unwrap_or_else(|| panic!("Finished process {id} has no start time"));

        let turnaround = completion_time
            .checked_sub(process.arrival_time())
            .unwrap_or_else(|| panic!("Process {id} completed before it arrived"));
        let waiting = turnaround
            .checked_sub(process.original_burst())
            .unwrap_or_else(|| panic!("Process {id} completed faster than its burst"));
        let response = start_time
            .checked_sub(process.arrival_time())
            .unwrap_or_else(|| panic!("Process {id} started before it arrived"));

        Self {
            id: id.to_owned(),
            arrival_time: process.arrival_time(),
            burst: process.original_burst(),
            completion_time,
            turnaround,
            waiting,
            response,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub processes: Vec<ProcessMetrics>,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    pub makespan: Ticks,
    pub idle_time: Ticks,
}

impl Metrics {
    pub fn compute(processes: &[Process], makespan: Ticks, idle_time: Ticks) -> Self {
        assert!(!processes.is_empty(), "Metrics need at least one process");

        let mut rows: Vec<ProcessMetrics> = processes.iter().map(ProcessMetrics::of).collect();
        rows.sort_by_key(|row| row.arrival_time);

        // Sum exactly, divide once
        let n = rows.len() as f64;
        let total = |f: fn(&ProcessMetrics) -> Ticks| rows.iter().map(f).sum::<Ticks>() as f64;
        let avg_turnaround = total(|r| r.turnaround) / n;
        let avg_waiting = total(|r| r.waiting) / n;
        let avg_response = total(|r| r.response) / n;

        Self {
            processes: rows,
            avg_turnaround,
            avg_waiting,
            avg_response,
            makespan,
            idle_time,
        }
    }

    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|row| row.burst).sum()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Metrics:")?;
        for row in &self.processes {
            writeln!(
                f,
                "{}: completion={}, turnaround={}, waiting={}",
                row.id, row.completion_time, row.turnaround, row.waiting
            )?;
        }
        write!(
            f,
            "Average turnaround={:.2}, average waiting={:.2}",
            self.avg_turnaround, self.avg_waiting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: &str, arrival: i64, burst: i64, start: Ticks) -> Process {
        let mut p = Process::new(id, 0, arrival, burst).unwrap();
        for t in start..start + burst as Ticks {
            p.run_for(1, t);
        }
        p
    }

    #[test]
    fn averages_are_exact_means() {
        let procs = [finished("A", 0, 1, 0), finished("B", 0, 1, 1), finished("C", 0, 1, 2)];
        let metrics = Metrics::compute(&procs, 3, 0);

        assert_eq!(metrics.avg_turnaround, 2.0);
        assert_eq!(metrics.avg_waiting, 1.0);
        assert_eq!(metrics.avg_response, 1.0);
        assert_eq!(metrics.total_burst(), 3);
    }

    #[test]
    fn rows_follow_arrival_order() {
        let procs = [finished("late", 4, 1, 4), finished("early", 0, 2, 0)];
        let metrics = Metrics::compute(&procs, 5, 2);
        let ids: Vec<_> = metrics.processes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[test]
    #[should_panic(expected = "unfinished process")]
    fn unfinished_process_panics() {
        let procs = [Process::new("A", 0, 0, 1).unwrap()];
        Metrics::compute(&procs, 0, 0);
    }
}
