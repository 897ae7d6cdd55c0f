//! Aggregate run metrics.
//!
//! Reduces the per-process outputs of one completed simulation into
//! summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | Throughput | completed / makespan |
//! | CPU Utilization | total burst / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Summary statistics of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Number of completed processes the averages are taken over.
    pub process_count: usize,
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time (ticks).
    pub avg_response_time: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
    /// Latest completion time (ticks).
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl AggregateMetrics {
    /// Computes metrics from the process records of a finished run.
    ///
    /// Processes that never completed are not counted. With nothing
    /// counted (e.g. an empty run), every metric is zero.
    pub fn calculate(processes: &[Process]) -> Self {
        let mut count: usize = 0;
        // Per-process values fit i64; their sums may not
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i128 = 0;
        let mut makespan: i64 = 0;

        for p in processes {
            let (Some(completion), Some(turnaround), Some(waiting)) =
                (p.completion_time, p.turnaround_time, p.waiting_time)
            else {
                continue;
            };
            count += 1;
            total_waiting += i128::from(waiting);
            total_turnaround += i128::from(turnaround);
            total_response += i128::from(p.response_time.unwrap_or(0));
            total_burst += i128::from(p.burst_time);
            makespan = makespan.max(completion);
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        let (throughput, cpu_utilization) = if makespan > 0 {
            (n / makespan as f64, total_burst as f64 / makespan as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: count,
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time: total_response as f64 / n,
            throughput,
            makespan,
            cpu_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn finished(id: u32, arrival: i64, burst: i64, first_run: i64, completion: i64) -> Process {
        let mut p = Process::from_spec(&ProcessSpec::new(id, arrival, burst));
        p.mark_dispatched(first_run);
        p.run_for(burst);
        p.finish(completion);
        p
    }

    #[test]
    fn test_metrics_basic() {
        // FCFS on (1,0,10),(2,1,5)
        let procs = vec![finished(1, 0, 10, 0, 10), finished(2, 1, 5, 10, 15)];

        let m = AggregateMetrics::calculate(&procs);
        assert_eq!(m.process_count, 2);
        assert_eq!(m.makespan, 15);
        assert!((m.avg_waiting_time - 4.5).abs() < 1e-10); // (0 + 9) / 2
        assert!((m.avg_turnaround_time - 12.0).abs() < 1e-10); // (10 + 14) / 2
        assert!((m.avg_response_time - 4.5).abs() < 1e-10);
        assert!((m.throughput - 2.0 / 15.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idle_gap() {
        // Second process arrives after the CPU has gone idle
        let procs = vec![finished(1, 0, 2, 0, 2), finished(2, 6, 2, 6, 8)];

        let m = AggregateMetrics::calculate(&procs);
        assert_eq!(m.makespan, 8);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = AggregateMetrics::calculate(&[]);
        assert_eq!(m, AggregateMetrics::default());
        assert_eq!(m.process_count, 0);
        assert!((m.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_incomplete_processes_skipped() {
        let pending = Process::from_spec(&ProcessSpec::new(9, 0, 4));
        let procs = vec![finished(1, 0, 3, 0, 3), pending];

        let m = AggregateMetrics::calculate(&procs);
        assert_eq!(m.process_count, 1);
        assert_eq!(m.makespan, 3);
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        // Turnaround sum exceeds i64::MAX even though each value fits
        let half = i64::MAX / 2;
        let procs = vec![
            finished(1, 0, half, 0, half),
            finished(2, 0, half, half, 2 * half),
        ];

        let m = AggregateMetrics::calculate(&procs);
        assert_eq!(m.makespan, 2 * half);
        assert!(m.avg_turnaround_time > half as f64);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }
}
