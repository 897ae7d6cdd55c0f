//! Workload sources.
//!
//! The reference workload is the classic five-process textbook set used to
//! compare the policies side by side. `WorkloadGenerator` draws random
//! process sets for stress and property checks.

use rand::Rng;

use crate::models::{ProcessId, ProcessSpec};

/// Round Robin quantum used with the reference workload.
pub const REFERENCE_QUANTUM: i64 = 2;

/// The five-process reference workload `(id, arrival, burst, priority)`.
pub fn reference_workload() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new(1, 0, 10).with_priority(3),
        ProcessSpec::new(2, 1, 5).with_priority(1),
        ProcessSpec::new(3, 3, 8).with_priority(2),
        ProcessSpec::new(4, 5, 2).with_priority(4),
        ProcessSpec::new(5, 6, 4).with_priority(5),
    ]
}

/// Random process-set generator.
///
/// IDs are `1..=count` in input order (`count` is capped at
/// `ProcessId::MAX` so every ID is distinct); arrival, burst, and priority are
/// drawn uniformly from their inclusive ranges.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    burst_range: (i64, i64),
    priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            burst_range: (1, 10),
            priority_range: (1, 5),
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range. Bounds are clamped to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Draws one process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let (burst_min, burst_max) = self.burst_range;
        let (prio_min, prio_max) = self.priority_range;

        let last_id = ProcessId::try_from(self.count).unwrap_or(ProcessId::MAX);
        (1..=last_id)
            .map(|id| {
                ProcessSpec::new(
                    id,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(burst_min..=burst_max),
                )
                .with_priority(rng.random_range(prio_min..=prio_max))
            })
            .collect()
    }
}
