//! Run configuration.
//!
//! Bundles a process set with the policies to run over it. Deserializable,
//! so a consumer can keep workloads in JSON or TOML files.
//!
//! ```json
//! {
//!   "processes": [{ "id": 1, "arrival_time": 0, "burst_time": 10, "priority": 3 }],
//!   "policies": [{ "policy": "fcfs" }, { "policy": "round_robin", "time_quantum": 2 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{simulate_all, SimulationOutcome};
use crate::dispatching::Policy;
use crate::error::SimulationError;
use crate::models::ProcessSpec;
use crate::validation::{validate_policy, validate_processes};

/// A process set and the policies to simulate over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Processes, in caller order.
    pub processes: Vec<ProcessSpec>,
    /// Policies to run, each on its own copy of `processes`.
    #[serde(default)]
    pub policies: Vec<Policy>,
}

impl SimulationConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a process.
    pub fn with_process(mut self, process: impl Into<ProcessSpec>) -> Self {
        self.processes.push(process.into());
        self
    }

    /// Replaces the process set.
    pub fn with_processes(mut self, processes: Vec<ProcessSpec>) -> Self {
        self.processes = processes;
        self
    }

    /// Adds a policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Validates the whole configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let mut errors = Vec::new();
        for policy in &self.policies {
            if let Err(mut e) = validate_policy(policy) {
                errors.append(&mut e);
            }
        }
        if let Err(mut e) = validate_processes(&self.processes) {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SimulationError::InvalidInput(errors))
        }
    }

    /// Validates, then runs every configured policy in order.
    pub fn run(&self) -> Result<Vec<SimulationOutcome>, SimulationError> {
        self.validate()?;
        simulate_all(&self.policies, &self.processes)
    }
}
