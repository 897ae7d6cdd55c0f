//! Ready set: processes that have arrived but not finished.
//!
//! Two shapes exist. A keyed set is a min-heap ordered by
//! `(score, arrival rank)`, so equal scores dispatch in arrival order and
//! every run is reproducible. A FIFO set is a plain queue for Round Robin.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Heap key of a keyed ready set.
///
/// Field order defines the ordering: score first, then arrival rank.
/// Ranks are unique within a run, so the order is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadyKey {
    /// Rule score at insertion time (lower = sooner).
    pub score: RuleScore,
    /// Position in the stable arrival order.
    pub rank: usize,
    /// Index into the run's process table.
    pub index: usize,
}

/// Per-run collection of dispatchable processes.
#[derive(Debug, Clone)]
pub enum ReadySet {
    /// Min-heap keyed by a selection rule.
    Keyed {
        /// Rule applied at every insertion.
        rule: SelectionRule,
        /// Pending entries.
        heap: BinaryHeap<Reverse<ReadyKey>>,
    },
    /// First-in, first-out queue of process indices.
    Fifo(VecDeque<usize>),
}

impl ReadySet {
    /// Creates an empty keyed ready set.
    pub fn keyed(rule: SelectionRule) -> Self {
        Self::Keyed {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty FIFO ready set.
    pub fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    /// Inserts a process.
    ///
    /// Keyed sets score the process in its current state, so a partially
    /// executed process re-enters with its reduced remaining time.
    pub fn push(&mut self, index: usize, rank: usize, process: &Process) {
        match self {
            Self::Keyed { rule, heap } => heap.push(Reverse(ReadyKey {
                score: rule.evaluate(process),
                rank,
                index,
            })),
            Self::Fifo(queue) => queue.push_back(index),
        }
    }

    /// Removes and returns the next process index to dispatch.
    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Keyed { heap, .. } => heap.pop().map(|Reverse(key)| key.index),
            Self::Fifo(queue) => queue.pop_front(),
        }
    }

    /// Number of waiting processes.
    pub fn len(&self) -> usize {
        match self {
            Self::Keyed { heap, .. } => heap.len(),
            Self::Fifo(queue) => queue.len(),
        }
    }

    /// Whether no process is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::from_spec(&ProcessSpec::new(id, arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_keyed_pops_lowest_score() {
        let procs = [
            make_process(1, 0, 8, 0),
            make_process(2, 0, 3, 0),
            make_process(3, 0, 5, 0),
        ];
        let mut ready = ReadySet::keyed(SelectionRule::ShortestBurst);
        for (i, p) in procs.iter().enumerate() {
            ready.push(i, i, p);
        }

        assert_eq!(ready.pop(), Some(1));
        assert_eq!(ready.pop(), Some(2));
        assert_eq!(ready.pop(), Some(0));
        assert_eq!(ready.pop(), None);
    }

    #[test]
    fn test_keyed_ties_break_by_rank() {
        let procs = [make_process(1, 0, 4, 0), make_process(2, 0, 4, 0)];
        let mut ready = ReadySet::keyed(SelectionRule::ShortestBurst);
        // Insert the later-ranked entry first
        ready.push(1, 1, &procs[1]);
        ready.push(0, 0, &procs[0]);

        assert_eq!(ready.pop(), Some(0));
        assert_eq!(ready.pop(), Some(1));
    }

    #[test]
    fn test_keyed_rescores_on_reinsert() {
        let mut long = make_process(1, 0, 10, 0);
        let short = make_process(2, 0, 4, 0);
        let mut ready = ReadySet::keyed(SelectionRule::ShortestRemaining);

        long.run_for(8); // 2 remaining
        ready.push(0, 0, &long);
        ready.push(1, 1, &short);

        assert_eq!(ready.pop(), Some(0));
    }

    #[test]
    fn test_fifo_order() {
        let p = make_process(1, 0, 1, 0);
        let mut ready = ReadySet::fifo();
        ready.push(2, 0, &p);
        ready.push(0, 1, &p);
        ready.push(1, 2, &p);

        assert_eq!(ready.len(), 3);
        assert_eq!(ready.pop(), Some(2));
        assert_eq!(ready.pop(), Some(0));
        assert_eq!(ready.pop(), Some(1));
        assert!(ready.is_empty());
    }

    #[test]
    fn test_lowest_priority_value_first() {
        let procs = [make_process(1, 0, 4, 5), make_process(2, 0, 4, 1)];
        let mut ready = ReadySet::keyed(SelectionRule::LowestPriorityValue);
        ready.push(0, 0, &procs[0]);
        ready.push(1, 1, &procs[1]);

        assert_eq!(ready.pop(), Some(1));
    }
}
