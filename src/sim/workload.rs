use std::{fs, path::Path};

use rand::prelude::*;

use crate::{
    core::{Priority, Process, Ticks},
    error::{SimError, WorkloadError},
};

pub fn reference() -> Vec<Process> {
    [("P1", 2, 0, 5), ("P2", 5, 2, 3), ("P3", 3, 4, 2), ("P4", 5, 5, 4)]
        .into_iter()
        .map(|(id, priority, arrival, burst)| Process::new(id, priority, arrival, burst))
        .collect::<Result<_, SimError>>()
        .expect("reference workload is well formed")
}

pub fn parse(input: &str) -> Result<Vec<Process>, WorkloadError> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        let [id, priority, arrival, burst] = fields[..] else {
            return Err(WorkloadError::Parse {
                line,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        };

        let number = |name: &str, value: &str| {
            value.parse::<i64>().map_err(|err| WorkloadError::Parse {
                line,
                reason: format!("invalid {name} {value:?}: {err}"),
            })
        };
        let priority = Priority::try_from(number("priority", priority)?).map_err(|_| {
            WorkloadError::Parse {
                line,
                reason: format!("priority {priority} out of range"),
            }
        })?;
        let arrival = number("arrival", arrival)?;
        let burst = number("burst", burst)?;

        let process = Process::new(id, priority, arrival, burst)
            .map_err(|source| WorkloadError::Invalid { line, source })?;
        processes.push(process);
    }

    Ok(processes)
}

pub fn read(path: impl AsRef<Path>) -> Result<Vec<Process>, WorkloadError> {
    parse(&fs::read_to_string(path)?)
}

#[derive(Debug, Clone)]
pub struct BernoulliParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: Ticks,
    pub long_ticks: Ticks,
    pub max_priority: Priority,
    pub seed: u64,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            max_priority: 5,
            seed: 0,
        }
    }
}

pub fn bernoulli(params: &BernoulliParams) -> Result<Vec<Process>, WorkloadError> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut processes = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let burst = if rng.random::<f64>() < params.p_short {
                params.short_ticks
            } else {
                params.long_ticks
            };
            let priority = rng.random_range(0..=params.max_priority.max(0));

            let arrival = to_signed("arrival", t)?;
            let burst = to_signed("burst", burst.max(1))?;
            let process = Process::new(format!("P{}", processes.len() + 1), priority, arrival, burst)
                .expect("generated process is well formed");
            processes.push(process);
        }
    }

    Ok(processes)
}

fn to_signed(field: &'static str, value: Ticks) -> Result<i64, WorkloadError> {
    i64::try_from(value).map_err(|_| WorkloadError::OutOfRange { field, value })
}
