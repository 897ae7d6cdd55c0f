//! Discrete-event CPU scheduling simulator.
//!
//! Simulates a single CPU serving a closed set of processes under six
//! classical disciplines and reports, per process, response / completion /
//! turnaround / waiting time, plus aggregate metrics for the run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `Timeline`, `Slice`
//! - **`dispatching`**: `Policy` variants, ready-set ordering, arrival admission
//! - **`scheduler`**: `Simulator`, `SimulationOutcome`, `AggregateMetrics`,
//!   `SimulationConfig`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad bursts,
//!   bad arrivals, bad quanta)
//! - **`workload`**: Reference and randomly generated process sets
//!
//! # Policies
//!
//! FCFS, SJF, SRTF, Round Robin, Priority, and Preemptive Priority. Both
//! priority policies treat a lower numeric value as more urgent.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use dispatching::Policy;
pub use error::SimulationError;
pub use models::{Process, ProcessId, ProcessSpec};
pub use scheduler::{simulate_all, AggregateMetrics, SimulationConfig, SimulationOutcome, Simulator};
