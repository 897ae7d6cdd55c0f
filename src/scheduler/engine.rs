//! Discrete-event scheduling engine.
//!
//! # Algorithm
//!
//! 1. Copy the caller's specs into a fresh process table.
//! 2. Sort the table once (stably) by arrival time.
//! 3. Loop until every process completes:
//!    admit arrivals up to the clock, jump the clock to the next arrival if
//!    nothing is ready, pop the next process, run it for a slice.
//! 4. Aggregate metrics over the finished table.
//!
//! Slice length is the only thing that differs between dispatch shapes:
//! non-preemptive policies run the whole remaining burst, event-driven
//! preemptive policies run until the next arrival, Round Robin runs one
//! quantum.
//!
//! # Complexity
//! O(n log n) for keyed policies (each arrival bounds at most one extra
//! slice); O(n + Σburst / quantum) dispatches for Round Robin.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::fmt;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::AggregateMetrics;
use crate::dispatching::{ArrivalCursor, Policy, ReadySet};
use crate::error::SimulationError;
use crate::models::{Process, ProcessId, ProcessSpec, Slice, Timeline};
use crate::validation::validate_run;

/// Result of one policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Finished process records, in the caller's input order.
    pub processes: Vec<Process>,
    /// Every execution slice, in time order.
    pub timeline: Timeline,
    /// Summary statistics.
    pub metrics: AggregateMetrics,
}

impl SimulationOutcome {
    /// Finds the record of a process.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process IDs ordered by completion time.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut done: Vec<&Process> = self
            .processes
            .iter()
            .filter(|p| p.is_complete())
            .collect();
        done.sort_by_key(|p| p.completion_time);
        done.into_iter().map(|p| p.id).collect()
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

fn cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Scheduling Results:", self.policy)?;
        writeln!(
            f,
            "{:>7} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7}",
            "Process", "Arrival", "Burst", "Response", "Completion", "Turnaround", "Waiting"
        )?;
        for p in &self.processes {
            writeln!(
                f,
                "{:>7} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7}",
                p.id,
                p.arrival_time,
                p.burst_time,
                cell(p.response_time),
                cell(p.completion_time),
                cell(p.turnaround_time),
                cell(p.waiting_time),
            )?;
        }
        let m = &self.metrics;
        writeln!(f, "Average Waiting Time: {:.2}", m.avg_waiting_time)?;
        writeln!(f, "Average Turnaround Time: {:.2}", m.avg_turnaround_time)?;
        writeln!(f, "Average Response Time: {:.2}", m.avg_response_time)?;
        write!(f, "Throughput: {:.4} processes per unit time", m.throughput)
    }
}

/// How long a dispatched process may hold the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceBound {
    /// Until completion.
    Burst,
    /// Until completion or the next arrival, whichever comes first.
    NextArrival,
    /// At most one quantum.
    Quantum(i64),
}

/// Drives a single policy over process sets.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::dispatching::Policy;
/// use cpu_sched_sim::models::ProcessSpec;
/// use cpu_sched_sim::scheduler::Simulator;
///
/// let processes = vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 1, 3)];
/// let simulator = Simulator::new(Policy::RoundRobin { time_quantum: 2 });
/// let outcome = simulator.simulate(&processes).unwrap();
///
/// assert_eq!(outcome.process(1).unwrap().completion_time, Some(6));
/// assert_eq!(outcome.process(2).unwrap().completion_time, Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for `policy`.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Simulates the policy over an independent copy of `specs`.
    ///
    /// Input is validated before any tick is simulated. An empty process
    /// set yields an empty outcome with zero metrics.
    pub fn simulate(&self, specs: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        validate_run(&self.policy, specs)?;

        let ready = match self.policy.selection_rule() {
            Some(rule) => ReadySet::keyed(rule),
            None => ReadySet::fifo(),
        };
        let bound = match &self.policy {
            Policy::RoundRobin { time_quantum } => SliceBound::Quantum(*time_quantum),
            policy if policy.is_preemptive() => SliceBound::NextArrival,
            _ => SliceBound::Burst,
        };

        let mut run = Run::new(&self.policy, specs, ready);
        run.execute(bound)?;

        let metrics = AggregateMetrics::calculate(&run.processes);
        info!(
            "{}: {} processes, makespan {}, avg waiting {:.2}, avg turnaround {:.2}",
            self.policy,
            metrics.process_count,
            metrics.makespan,
            metrics.avg_waiting_time,
            metrics.avg_turnaround_time
        );

        Ok(SimulationOutcome {
            policy: self.policy.clone(),
            processes: run.processes,
            timeline: run.timeline,
            metrics,
        })
    }
}

/// Runs every policy over its own copy of `specs`, in order.
///
/// Stops at the first failing policy.
pub fn simulate_all(
    policies: &[Policy],
    specs: &[ProcessSpec],
) -> Result<Vec<SimulationOutcome>, SimulationError> {
    policies
        .iter()
        .map(|policy| Simulator::new(policy.clone()).simulate(specs))
        .collect()
}

/// Mutable state of one simulation run.
struct Run<'a> {
    policy: &'a Policy,
    processes: Vec<Process>,
    cursor: ArrivalCursor,
    ready: ReadySet,
    timeline: Timeline,
    clock: i64,
    completed: usize,
}

impl<'a> Run<'a> {
    fn new(policy: &'a Policy, specs: &[ProcessSpec], ready: ReadySet) -> Self {
        let processes: Vec<Process> = specs.iter().map(Process::from_spec).collect();
        let cursor = ArrivalCursor::new(&processes);
        Self {
            policy,
            processes,
            cursor,
            ready,
            timeline: Timeline::new(),
            clock: 0,
            completed: 0,
        }
    }

    fn execute(&mut self, bound: SliceBound) -> Result<(), SimulationError> {
        while self.completed < self.processes.len() {
            let index = self.next_dispatch()?;
            let slice = self.slice_length(index, bound);
            let finished = self.run_slice(index, slice);

            if let SliceBound::Quantum(_) = bound {
                // Arrivals during the slice queue ahead of the preempted process
                self.cursor
                    .admit(self.clock, &self.processes, &mut self.ready);
            }
            if !finished {
                let rank = self.cursor.rank(index);
                self.ready.push(index, rank, &self.processes[index]);
            }
        }
        Ok(())
    }

    /// Admits arrivals and pops the next process, jumping idle gaps.
    fn next_dispatch(&mut self) -> Result<usize, SimulationError> {
        loop {
            self.cursor
                .admit(self.clock, &self.processes, &mut self.ready);
            if let Some(index) = self.ready.pop() {
                return Ok(index);
            }
            match self.cursor.next_arrival(&self.processes) {
                Some(arrival) => {
                    trace!("t={}: CPU idle until t={arrival}", self.clock);
                    self.clock = arrival;
                }
                None => {
                    return Err(SimulationError::ReadySetExhausted {
                        clock: self.clock,
                        unfinished: self.processes.len() - self.completed,
                    })
                }
            }
        }
    }

    fn slice_length(&self, index: usize, bound: SliceBound) -> i64 {
        let remaining = self.processes[index].remaining_time;
        match bound {
            SliceBound::Burst => remaining,
            SliceBound::Quantum(quantum) => remaining.min(quantum),
            // All arrivals <= clock are admitted, so the gap is positive
            SliceBound::NextArrival => match self.cursor.next_arrival(&self.processes) {
                Some(arrival) => remaining.min(arrival - self.clock),
                None => remaining,
            },
        }
    }

    /// Runs `index` for `slice` ticks. Returns whether it completed.
    fn run_slice(&mut self, index: usize, slice: i64) -> bool {
        let start = self.clock;
        let process = &mut self.processes[index];
        process.mark_dispatched(start);
        process.run_for(slice);
        self.clock += slice;
        debug!(
            "{}: t={start}..{} run pid {} ({} left)",
            self.policy.name(),
            self.clock,
            process.id,
            process.remaining_time
        );
        self.timeline.record(Slice::new(process.id, start, self.clock));

        if process.remaining_time == 0 {
            process.finish(self.clock);
            self.completed += 1;
            true
        } else {
            false
        }
    }
}
