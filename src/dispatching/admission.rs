//! Arrival admission.
//!
//! The process table is sorted once (stably) by arrival time; the cursor
//! walks that order and hands every process whose arrival is due to the
//! ready set. Between arrivals the clock jumps instead of ticking.

use log::trace;

use super::ReadySet;
use crate::models::Process;

/// Cursor over the stable arrival order of a process table.
#[derive(Debug, Clone)]
pub struct ArrivalCursor {
    /// Process table indices in arrival order (ties by input order).
    order: Vec<usize>,
    /// Arrival rank per process table index.
    ranks: Vec<usize>,
    /// Position in `order` of the next unadmitted process.
    next: usize,
}

impl ArrivalCursor {
    /// Builds the arrival order for `processes`.
    pub fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        // sort_by_key is stable: equal arrivals keep input order
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut ranks = vec![0; processes.len()];
        for (rank, &index) in order.iter().enumerate() {
            ranks[index] = rank;
        }

        Self {
            order,
            ranks,
            next: 0,
        }
    }

    /// Moves every process with `arrival_time <= clock` into `ready`.
    ///
    /// Returns the number of processes admitted.
    pub fn admit(&mut self, clock: i64, processes: &[Process], ready: &mut ReadySet) -> usize {
        let start = self.next;
        while let Some(&index) = self.order.get(self.next) {
            let process = &processes[index];
            if process.arrival_time > clock {
                break;
            }
            trace!("t={clock}: admit pid {}", process.id);
            ready.push(index, self.next, process);
            self.next += 1;
        }
        self.next - start
    }

    /// Arrival time of the next unadmitted process.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&index| processes[index].arrival_time)
    }

    /// Arrival rank of a process table index.
    #[inline]
    pub fn rank(&self, index: usize) -> usize {
        self.ranks[index]
    }

    /// Process table indices in arrival order.
    pub fn arrival_order(&self) -> &[usize] {
        &self.order
    }

    /// Whether every process has been admitted.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn table(arrivals: &[i64]) -> Vec<Process> {
        arrivals
            .iter()
            .enumerate()
            .map(|(i, &a)| Process::from_spec(&ProcessSpec::new(i as u32 + 1, a, 1)))
            .collect()
    }

    #[test]
    fn test_stable_arrival_order() {
        let procs = table(&[5, 0, 5, 2]);
        let cursor = ArrivalCursor::new(&procs);
        assert_eq!(cursor.arrival_order(), &[1, 3, 0, 2]);
        assert_eq!(cursor.rank(0), 2);
        assert_eq!(cursor.rank(2), 3);
    }

    #[test]
    fn test_admit_up_to_clock() {
        let procs = table(&[0, 3, 3, 7]);
        let mut cursor = ArrivalCursor::new(&procs);
        let mut ready = ReadySet::fifo();

        assert_eq!(cursor.admit(0, &procs, &mut ready), 1);
        assert_eq!(cursor.next_arrival(&procs), Some(3));
        assert_eq!(cursor.admit(2, &procs, &mut ready), 0);
        assert_eq!(cursor.admit(3, &procs, &mut ready), 2);
        assert_eq!(ready.len(), 3);
        assert_eq!(cursor.next_arrival(&procs), Some(7));
        assert!(!cursor.is_exhausted());

        assert_eq!(cursor.admit(100, &procs, &mut ready), 1);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next_arrival(&procs), None);
    }

    #[test]
    fn test_empty_table() {
        let procs: Vec<Process> = Vec::new();
        let mut cursor = ArrivalCursor::new(&procs);
        let mut ready = ReadySet::fifo();
        assert_eq!(cursor.admit(0, &procs, &mut ready), 0);
        assert!(cursor.is_exhausted());
    }
}
