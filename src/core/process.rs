use crate::error::SimError;

pub type Ticks = u64;
pub type Priority = i32;
// Index into the process slice owned by the simulation
pub type ProcessIdx = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: String,
    priority: Priority,
    arrival_time: Ticks,
    original_burst: Ticks,
    remaining_burst: Ticks,
    start_time: Option<Ticks>,
    completion_time: Option<Ticks>,
}

impl Process {
    pub fn new(
        id: impl Into<String>,
        priority: Priority,
        arrival_time: i64,
        burst: i64,
    ) -> Result<Self, SimError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SimError::EmptyId);
        }
        if burst <= 0 {
            return Err(SimError::NonPositiveBurst { id, burst });
        }
        if arrival_time < 0 {
            return Err(SimError::NegativeArrival {
                id,
                arrival: arrival_time,
            });
        }

        Ok(Self {
            id,
            priority,
            arrival_time: arrival_time as Ticks,
            original_burst: burst as Ticks,
            remaining_burst: burst as Ticks,
            start_time: None,
            completion_time: None,
        })
    }

    pub fn run_for(&mut self, units: Ticks, now: Ticks) {
        assert!(
            !self.is_finished(),
            "Process {} ran after it finished",
            self.id
        );
        assert!(
            now >= self.arrival_time,
            "Process {} ran at t={now} before arriving at t={}",
            self.id,
            self.arrival_time
        );

        let consumed = units.min(self.remaining_burst);
        self.remaining_burst -= consumed;
        self.start_time.get_or_insert(now);

        if self.remaining_burst == 0 {
            self.completion_time = Some(now + consumed);
        }

        debug_assert!(self.remaining_burst <= self.original_burst);
    }

    pub fn reset(&mut self) {
        self.remaining_burst = self.original_burst;
        self.start_time = None;
        self.completion_time = None;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn original_burst(&self) -> Ticks {
        self.original_burst
    }

    pub fn remaining_burst(&self) -> Ticks {
        self.remaining_burst
    }

    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    pub fn is_ready(&self, now: Ticks) -> bool {
        !self.is_finished() && self.arrival_time <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Process::new("", 1, 0, 1), Err(SimError::EmptyId));
        assert_eq!(
            Process::new("P1", 1, 0, 0),
            Err(SimError::NonPositiveBurst {
                id: "P1".into(),
                burst: 0
            })
        );
        assert_eq!(
            Process::new("P1", 1, -3, 2),
            Err(SimError::NegativeArrival {
                id: "P1".into(),
                arrival: -3
            })
        );
    }

    #[test]
    fn completion_is_recorded_at_end_of_last_unit() {
        let mut p = Process::new("P1", 2, 1, 2).unwrap();
        p.run_for(1, 3);
        assert_eq!(p.remaining_burst(), 1);
        assert_eq!(p.completion_time(), None);
        assert_eq!(p.start_time(), Some(3));

        p.run_for(1, 7);
        assert!(p.is_finished());
        assert_eq!(p.completion_time(), Some(8));
        assert_eq!(p.start_time(), Some(3));
    }

    #[test]
    fn oversized_run_clamps_at_zero() {
        let mut p = Process::new("P1", 0, 0, 2).unwrap();
        p.run_for(5, 0);
        assert_eq!(p.remaining_burst(), 0);
        assert_eq!(p.completion_time(), Some(2));
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut p = Process::new("P1", 0, 0, 1).unwrap();
        let fresh = p.clone();
        p.run_for(1, 0);
        p.reset();
        assert_eq!(p, fresh);
    }

    #[test]
    #[should_panic(expected = "ran after it finished")]
    fn running_finished_process_panics() {
        let mut p = Process::new("P1", 0, 0, 1).unwrap();
        p.run_for(1, 0);
        p.run_for(1, 1);
    }

    #[test]
    #[should_panic(expected = "before arriving")]
    fn running_before_arrival_panics() {
        let mut p = Process::new("P1", 0, 4, 1).unwrap();
        p.run_for(1, 2);
    }
}
