//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! Callers describe processes with [`ProcessSpec`]; each simulation run
//! materializes its own [`Process`] records from those specs and fills in
//! the timing outputs as it goes.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u32;

/// Neutral priority used when the caller does not specify one.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Static description of a process (simulation input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static rank (lower value = higher priority).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process spec with the neutral priority.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl From<(ProcessId, i64, i64)> for ProcessSpec {
    fn from((id, arrival_time, burst_time): (ProcessId, i64, i64)) -> Self {
        Self::new(id, arrival_time, burst_time)
    }
}

impl From<(ProcessId, i64, i64, i32)> for ProcessSpec {
    fn from((id, arrival_time, burst_time, priority): (ProcessId, i64, i64, i32)) -> Self {
        Self::new(id, arrival_time, burst_time).with_priority(priority)
    }
}

/// A process record owned by exactly one simulation run.
///
/// Output fields start unset (`None`) and are written exactly once:
/// `response_time` at first dispatch, the rest when `remaining_time`
/// reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static rank (lower value = higher priority).
    pub priority: i32,
    /// CPU time still owed to the process.
    pub remaining_time: i64,
    /// First dispatch minus arrival.
    pub response_time: Option<i64>,
    /// Tick at which `remaining_time` reached zero.
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a fresh record from a spec, with all outputs unset.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            remaining_time: spec.burst_time,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.response_time.is_some()
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Records the first dispatch. Later calls are no-ops.
    pub(crate) fn mark_dispatched(&mut self, clock: i64) {
        if self.response_time.is_none() {
            self.response_time = Some(clock - self.arrival_time);
        }
    }

    /// Consumes `slice` ticks of CPU time.
    pub(crate) fn run_for(&mut self, slice: i64) {
        self.remaining_time -= slice;
    }

    /// Finalizes the timing outputs at completion.
    pub(crate) fn finish(&mut self, clock: i64) {
        let turnaround = clock - self.arrival_time;
        self.completion_time = Some(clock);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}
