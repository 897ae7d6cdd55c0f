//! Scheduling policies and the shared dispatch scaffolding.
//!
//! Every policy walks the same skeleton: admit arrivals up to the clock,
//! pick the next process from the ready set, run it for a slice, repeat.
//! Policies differ only in how the ready set is ordered and in how long a
//! slice may last.
//!
//! | Policy | Ready set | Slice |
//! |--------|-----------|-------|
//! | FCFS | arrival order | whole burst |
//! | SJF | shortest burst | whole burst |
//! | SRTF | shortest remaining | until next arrival |
//! | Round Robin | FIFO queue | `min(quantum, remaining)` |
//! | Priority | lowest priority value | whole burst |
//! | Preemptive Priority | lowest priority value | until next arrival |
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::Policy;
//! use cpu_sched_sim::models::ProcessSpec;
//!
//! let processes = vec![ProcessSpec::new(1, 0, 10), ProcessSpec::new(2, 1, 5)];
//! let outcome = Policy::Fcfs.simulate(&processes).unwrap();
//! assert_eq!(outcome.process(2).unwrap().completion_time, Some(15));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod admission;
mod ready;

pub use admission::ArrivalCursor;
pub use ready::{ReadyKey, ReadySet};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;
use crate::models::{Process, ProcessSpec};
use crate::scheduler::{SimulationOutcome, Simulator};

/// Score used to order a keyed ready set.
///
/// Lower score = dispatched first.
pub type RuleScore = i64;

/// Ordering criterion of a keyed ready set.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties fall back to arrival rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionRule {
    /// Earliest arrival first.
    ArrivalOrder,
    /// Smallest total burst first.
    ShortestBurst,
    /// Smallest remaining CPU time first (re-evaluated on re-insertion).
    ShortestRemaining,
    /// Smallest priority value first (1 outranks 5).
    LowestPriorityValue,
}

impl SelectionRule {
    /// Evaluates a process under this rule.
    pub fn evaluate(&self, process: &Process) -> RuleScore {
        match self {
            Self::ArrivalOrder => process.arrival_time,
            Self::ShortestBurst => process.burst_time,
            Self::ShortestRemaining => process.remaining_time,
            Self::LowestPriorityValue => process.priority as RuleScore,
        }
    }
}

/// CPU scheduling discipline.
///
/// A closed set of variants; every variant is driven through the same
/// [`Simulator`] contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks per dispatch (> 0).
        time_quantum: i64,
    },
    /// Static priority, non-preemptive.
    Priority,
    /// Static priority, preempted by better-ranked arrivals.
    PreemptivePriority,
}

impl Policy {
    /// All six policies, Round Robin using `time_quantum`.
    pub fn all(time_quantum: i64) -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srtf,
            Policy::RoundRobin { time_quantum },
            Policy::Priority,
            Policy::PreemptivePriority,
        ]
    }

    /// Short policy name (e.g., "FCFS", "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "RR",
            Self::Priority => "Priority",
            Self::PreemptivePriority => "Preemptive Priority",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin { .. } | Self::PreemptivePriority
        )
    }

    /// Ready-set ordering, or `None` for the FIFO queue of Round Robin.
    ///
    /// Both priority policies use the same direction: lower value wins.
    pub fn selection_rule(&self) -> Option<SelectionRule> {
        match self {
            Self::Fcfs => Some(SelectionRule::ArrivalOrder),
            Self::Sjf => Some(SelectionRule::ShortestBurst),
            Self::Srtf => Some(SelectionRule::ShortestRemaining),
            Self::RoundRobin { .. } => None,
            Self::Priority | Self::PreemptivePriority => Some(SelectionRule::LowestPriorityValue),
        }
    }

    /// Runs this policy over an independent copy of `processes`.
    pub fn simulate(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        Simulator::new(self.clone()).simulate(processes)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { time_quantum } => {
                write!(f, "Round Robin (Time Quantum: {time_quantum})")
            }
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_policies() {
        let all = Policy::all(3);
        assert_eq!(all.len(), 6);
        assert!(all.contains(&Policy::RoundRobin { time_quantum: 3 }));
    }

    #[test]
    fn test_preemptive_flags() {
        assert!(!Policy::Fcfs.is_preemptive());
        assert!(!Policy::Sjf.is_preemptive());
        assert!(!Policy::Priority.is_preemptive());
        assert!(Policy::Srtf.is_preemptive());
        assert!(Policy::RoundRobin { time_quantum: 2 }.is_preemptive());
        assert!(Policy::PreemptivePriority.is_preemptive());
    }

    #[test]
    fn test_priority_policies_share_direction() {
        assert_eq!(
            Policy::Priority.selection_rule(),
            Policy::PreemptivePriority.selection_rule()
        );
    }

    #[test]
    fn test_rule_scores() {
        let mut p = Process::from_spec(&ProcessSpec::new(1, 4, 9).with_priority(2));
        p.run_for(3);
        assert_eq!(SelectionRule::ArrivalOrder.evaluate(&p), 4);
        assert_eq!(SelectionRule::ShortestBurst.evaluate(&p), 9);
        assert_eq!(SelectionRule::ShortestRemaining.evaluate(&p), 6);
        assert_eq!(SelectionRule::LowestPriorityValue.evaluate(&p), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Policy::Srtf.to_string(), "SRTF");
        assert_eq!(
            Policy::RoundRobin { time_quantum: 2 }.to_string(),
            "Round Robin (Time Quantum: 2)"
        );
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Policy::RoundRobin { time_quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"policy":"round_robin","time_quantum":4}"#);

        let parsed: Policy = serde_json::from_str(r#"{"policy":"preemptive_priority"}"#).unwrap();
        assert_eq!(parsed, Policy::PreemptivePriority);
    }
}
