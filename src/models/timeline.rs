//! Execution timeline (Gantt chart) model.
//!
//! A timeline records every interval during which the simulated CPU ran a
//! process. It is produced alongside the per-process outputs of a run and
//! lets consumers verify that each process received exactly its burst.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A half-open execution interval `[start, end)` on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of execution slices for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// A slice that continues the previous one for the same process
    /// (same pid, touching boundary) is merged into it.
    pub fn record(&mut self, slice: Slice) {
        if slice.duration() <= 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == slice.process_id && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// All recorded slices in execution order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Number of recorded slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Returns all slices granted to a process.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time granted to a process.
    pub fn executed_time(&self, process_id: ProcessId) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(Slice::duration)
            .sum()
    }

    /// Tick at which the process first ran.
    pub fn first_start(&self, process_id: ProcessId) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Ticks in `[0, makespan)` during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        let busy: i64 = self.slices.iter().map(Slice::duration).sum();
        self.makespan() - busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record(Slice::new(1, 0, 2));
        t.record(Slice::new(2, 2, 4));
        t.record(Slice::new(1, 4, 6));
        t.record(Slice::new(2, 8, 9));
        t
    }

    #[test]
    fn test_executed_time() {
        let t = sample_timeline();
        assert_eq!(t.executed_time(1), 4);
        assert_eq!(t.executed_time(2), 3);
        assert_eq!(t.executed_time(99), 0);
    }

    #[test]
    fn test_makespan_and_idle() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.idle_time(), 2); // gap [6, 8)
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 3);
    }

    #[test]
    fn test_contiguous_slices_merge() {
        let mut t = Timeline::new();
        t.record(Slice::new(1, 0, 1));
        t.record(Slice::new(1, 1, 3));
        t.record(Slice::new(1, 4, 5)); // gap → new slice
        assert_eq!(t.len(), 2);
        assert_eq!(t.slices()[0], Slice::new(1, 0, 3));
        assert_eq!(t.context_switches(), 0);
    }

    #[test]
    fn test_zero_length_slice_ignored() {
        let mut t = Timeline::new();
        t.record(Slice::new(1, 3, 3));
        assert!(t.is_empty());
    }

    #[test]
    fn test_first_start_and_slices_for() {
        let t = sample_timeline();
        assert_eq!(t.first_start(2), Some(2));
        assert_eq!(t.first_start(3), None);
        assert_eq!(t.slices_for(1).len(), 2);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
        assert_eq!(t.context_switches(), 0);
    }
}
