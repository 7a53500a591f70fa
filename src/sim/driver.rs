use log::{debug, info, trace};
use rustc_hash::FxHashSet;

use super::metrics::Metrics;
use crate::{
    core::{Observer, Process, SimEvent, Ticks},
    error::SimError,
    scheduler::{ReadyQueue, RescanQueue},
};

#[derive(Debug, Clone)]
pub struct SimOutput {
    pub trace: Vec<SimEvent>,
    pub metrics: Metrics,
}

pub struct Sim<'a, Q: ReadyQueue> {
    processes: &'a mut [Process],
    queue: Q,
    observer: Observer,
    now: Ticks,
    finished: usize,
    idle_time: Ticks,
}

impl<'a, Q: ReadyQueue> Sim<'a, Q> {
    pub fn new(processes: &'a mut [Process]) -> Result<Self, SimError> {
        validate(processes)?;

        let queue = Q::init(processes);
        Ok(Self {
            processes,
            queue,
            observer: Observer::new(),
            now: 0,
            finished: 0,
            idle_time: 0,
        })
    }

    // One unit of work or one idle jump
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.all_finished() {
            return events;
        }

        self.queue.admit(self.processes, self.now);

        let Some(idx) = self.queue.pick(self.processes, self.now) else {
            let from = self.now;
            self.observer.observe_idle(self.processes, from);
            self.now = self.next_arrival().unwrap_or(from + 1);
            self.idle_time += self.now - from;

            trace!("t={from}: idle until {}", self.now);
            events.push(SimEvent::Idle { from, to: self.now });
            self.observer.record(&events);
            return events;
        };

        self.observer.observe_selection(self.processes, idx, self.now);

        let process = &mut self.processes[idx];
        debug!("t={}: running {}", self.now, process.id());
        events.push(SimEvent::Running {
            id: process.id().to_owned(),
            time: self.now,
        });

        process.run_for(1, self.now);
        if process.is_finished() {
            let time = process
                .completion_time()
                .expect("Finished process must have a completion time");
            info!("t={time}: finished {}", process.id());
            events.push(SimEvent::Finished {
                id: process.id().to_owned(),
                time,
            });

            self.finished += 1;
            self.queue.completed(self.processes, idx);
        }

        self.now += 1;
        self.observer.record(&events);
        events
    }

    pub fn run(mut self) -> SimOutput {
        while !self.all_finished() {
            self.step();
        }

        let metrics = Metrics::compute(self.processes, self.now, self.idle_time);
        info!(
            "simulation finished at t={} after {} steps ({} idle ticks)",
            self.now,
            self.observer.steps(),
            self.idle_time
        );

        SimOutput {
            trace: self.observer.into_trace(),
            metrics,
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.processes
            .iter()
            .filter(|p| !p.is_finished() && p.arrival_time() > self.now)
            .map(Process::arrival_time)
            .min()
    }

    pub fn all_finished(&self) -> bool {
        self.finished == self.processes.len()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn idle_time(&self) -> Ticks {
        self.idle_time
    }

    pub fn processes(&self) -> &[Process] {
        self.processes
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

fn validate(processes: &[Process]) -> Result<(), SimError> {
    if processes.is_empty() {
        return Err(SimError::Empty);
    }

    let mut seen = FxHashSet::default();
    for process in processes {
        if !seen.insert(process.id()) {
            return Err(SimError::DuplicateId(process.id().to_owned()));
        }
        if process.is_finished() {
            return Err(SimError::AlreadyFinished(process.id().to_owned()));
        }
    }

    Ok(())
}

pub fn run(processes: &mut [Process]) -> Result<SimOutput, SimError> {
    run_with::<RescanQueue>(processes)
}

pub fn run_with<Q: ReadyQueue>(processes: &mut [Process]) -> Result<SimOutput, SimError> {
    Ok(Sim::<Q>::new(processes)?.run())
}
