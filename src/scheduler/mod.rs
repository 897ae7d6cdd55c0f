//! Simulation engine, run configuration, and aggregate metrics.
//!
//! # Algorithm
//!
//! `Simulator` runs one policy over an owned copy of the process set,
//! advancing a simulated clock in event-driven jumps (arrivals,
//! completions, quantum expiry) rather than single ticks.
//!
//! # KPI
//!
//! `AggregateMetrics` computes average waiting, turnaround and response
//! time, throughput, makespan, and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod engine;
mod kpi;

pub use config::SimulationConfig;
pub use engine::{simulate_all, SimulationOutcome, Simulator};
pub use kpi::AggregateMetrics;
