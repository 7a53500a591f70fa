use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("no processes to schedule")]
    Empty,

    #[error("process id must not be empty")]
    EmptyId,

    #[error("process {id}: burst must be positive, got {burst}")]
    NonPositiveBurst { id: String, burst: i64 },

    #[error("process {id}: arrival time must be non-negative, got {arrival}")]
    NegativeArrival { id: String, arrival: i64 },

    #[error("duplicate process id {0}")]
    DuplicateId(String),

    #[error("process {0} has already finished; reset it before running again")]
    AlreadyFinished(String),
}

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("failed to read workload")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("generated {field} {value} does not fit a process")]
    OutOfRange { field: &'static str, value: u64 },

    #[error("line {line}: invalid process")]
    Invalid {
        line: usize,
        #[source]
        source: SimError,
    },
}
