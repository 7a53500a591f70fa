/*!
 * Error Tests
 * Input rejection before any process state changes
 */

use pretty_assertions::assert_eq;
use prio_model::{
    Process, SimError, WorkloadError,
    sim::{self, workload},
};

#[test]
fn test_empty_input_rejected() {
    let mut processes: Vec<Process> = Vec::new();
    assert_eq!(sim::run(&mut processes).unwrap_err(), SimError::Empty);
}

#[test]
fn test_duplicate_ids_rejected_before_mutation() {
    let mut processes = vec![
        Process::new("A", 1, 0, 2).unwrap(),
        Process::new("B", 1, 0, 2).unwrap(),
        Process::new("A", 3, 1, 1).unwrap(),
    ];
    let before = processes.clone();

    assert_eq!(
        sim::run(&mut processes).unwrap_err(),
        SimError::DuplicateId("A".into())
    );
    assert_eq!(processes, before);
}

#[test]
fn test_second_run_rejected() {
    let mut processes = workload::reference();
    sim::run(&mut processes).unwrap();
    let after_first = processes.clone();

    assert_eq!(
        sim::run(&mut processes).unwrap_err(),
        SimError::AlreadyFinished("P1".into())
    );
    assert_eq!(processes, after_first);
}

#[test]
fn test_malformed_workload_reports_line() {
    let err = workload::parse("P1 1 0 2\nP2 1 -1 2\n").unwrap_err();
    match err {
        WorkloadError::Invalid { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                SimError::NegativeArrival {
                    id: "P2".into(),
                    arrival: -1
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(SimError::Empty.to_string(), "no processes to schedule");
    assert_eq!(
        SimError::NonPositiveBurst {
            id: "P1".into(),
            burst: 0
        }
        .to_string(),
        "process P1: burst must be positive, got 0"
    );
}
