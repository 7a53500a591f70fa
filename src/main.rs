use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use prio_model::{
    scheduler::{PriqQueue, RescanQueue},
    sim::{
        self,
        workload::{self, BernoulliParams},
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Queue {
    Rescan,
    Priq,
}

/// Simulate preemptive priority scheduling and report turnaround/waiting times.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Workload file with `<id> <priority> <arrival> <burst>` per line
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random workload with arrivals over this many ticks
    #[arg(long, value_name = "TICKS")]
    random: Option<u64>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 5)]
    max_priority: i32,

    /// Ready-set policy
    #[arg(long, value_enum, default_value_t = Queue::Rescan)]
    queue: Queue,

    /// Print only the final report
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut processes = match (&args.input, args.random) {
        (Some(path), _) => workload::read(path)
            .with_context(|| format!("loading workload from {}", path.display()))?,
        (None, Some(ticks)) => workload::bernoulli(&BernoulliParams {
            ticks,
            seed: args.seed,
            max_priority: args.max_priority,
            ..Default::default()
        })
        .context("generating random workload")?,
        (None, None) => workload::reference(),
    };

    let output = match args.queue {
        Queue::Rescan => sim::run_with::<RescanQueue>(&mut processes),
        Queue::Priq => sim::run_with::<PriqQueue>(&mut processes),
    }
    .context("simulation rejected the workload")?;

    if !args.quiet {
        for event in &output.trace {
            println!("{event}");
        }
        println!();
    }
    println!("{}", output.metrics);

    Ok(())
}
