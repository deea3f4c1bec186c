//! End-to-end runs through the workbench facade.

use core_sched::models::{Job, QueueSnapshot};
use core_sched::scenario::demo_jobs;
use core_sched::scheduler::Algorithm;
use core_sched::workbench::Workbench;
use core_sched::ScheduleError;

fn spans(bench: &Workbench) -> Vec<(String, i64, i64)> {
    bench
        .scheduled_jobs()
        .into_iter()
        .map(|j| (j.id, j.start_time.unwrap(), j.end_time.unwrap()))
        .collect()
}

fn span(id: &str, start: i64, end: i64) -> (String, i64, i64) {
    (id.to_string(), start, end)
}

fn three_job_bench() -> Workbench {
    let mut bench = Workbench::new();
    bench.add_job("J1", 0, 30).unwrap();
    bench.add_job("J2", 0, 10).unwrap();
    bench.add_job("J3", 0, 20).unwrap();
    bench
}

#[test]
fn test_single_core_fcfs_example() {
    let mut bench = three_job_bench();
    bench.set_algorithm("fcfs").unwrap();
    assert_eq!(
        spans(&bench),
        vec![span("J1", 0, 30), span("J2", 30, 40), span("J3", 40, 60)]
    );
}

#[test]
fn test_single_core_sjf_example() {
    let mut bench = three_job_bench();
    bench.set_algorithm("sjf").unwrap();
    assert_eq!(
        spans(&bench),
        vec![span("J2", 0, 10), span("J3", 10, 30), span("J1", 30, 60)]
    );
}

#[test]
fn test_two_core_fcfs_example() {
    let mut bench = three_job_bench();
    bench.add_job("J4", 8, 15).unwrap();
    bench.set_core_count(2).unwrap();
    bench.set_algorithm("FCFS").unwrap();

    let outcome = bench.outcome().unwrap();
    assert_eq!(outcome.core_of("J4"), Some(0));
    assert_eq!(
        spans(&bench),
        vec![
            span("J1", 0, 30),
            span("J4", 30, 45),
            span("J2", 0, 10),
            span("J3", 10, 30),
        ]
    );
}

#[test]
fn test_demo_scenario_sjf_two_cores() {
    let mut bench = Workbench::new();
    bench.set_core_count(2).unwrap();
    bench.select_algorithm(Algorithm::Sjf).unwrap();
    bench.load_jobs(demo_jobs()).unwrap();

    assert_eq!(
        spans(&bench),
        vec![
            span("J2", 0, 10),
            span("J4", 10, 25),
            span("J1", 25, 55),
            span("J3", 0, 20),
            span("J6", 20, 24),
            span("J5", 24, 31),
        ]
    );

    let kpi = bench.kpi().unwrap();
    assert_eq!(kpi.makespan, 55);
    assert!((kpi.mean_turnaround.unwrap() - 20.5).abs() < 1e-9);

    let snapshots = bench.queue_snapshots();
    assert_eq!(snapshots[0], QueueSnapshot::new(0, ["J1", "J3"]));
    let times: Vec<i64> = snapshots.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0, 10, 20, 24, 25]);
}

#[test]
fn test_reschedule_discards_previous_run() {
    let mut bench = three_job_bench();
    bench.set_algorithm("sjf").unwrap();
    let first = bench.outcome().unwrap().clone();

    bench.set_algorithm("fcfs").unwrap();
    bench.set_algorithm("sjf").unwrap();
    assert_eq!(bench.outcome().unwrap(), &first);
}

#[test]
fn test_error_leaves_workbench_reusable() {
    let mut bench = three_job_bench();
    bench.set_algorithm("sjf").unwrap();

    assert!(matches!(
        bench.add_job("J1", 0, 5),
        Err(ScheduleError::InvalidInput(_))
    ));
    bench.add_job("J4", 0, 5).unwrap();
    assert_eq!(bench.scheduled_jobs()[0], {
        let mut j = Job::new("J4", 0, 5);
        j.start_time = Some(0);
        j.end_time = Some(5);
        j
    });
}

#[test]
fn test_outcome_serializes_for_presentation() {
    let mut bench = three_job_bench();
    bench.set_algorithm("sjf").unwrap();

    let value = serde_json::to_value(bench.outcome().unwrap()).unwrap();
    assert_eq!(value["config"]["algorithm"], "sjf");
    assert_eq!(value["cores"][0]["jobs"][0]["id"], "J2");
    assert_eq!(value["cores"][0]["jobs"][0]["end_time"], 10);
    assert_eq!(value["snapshots"][0]["waiting_ids"][0], "J1");

    let kpi = serde_json::to_value(bench.kpi().unwrap()).unwrap();
    assert_eq!(kpi["makespan"], 60);
}
