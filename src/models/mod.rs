//! Simulation domain models.
//!
//! Provides the process records a simulation run consumes and mutates,
//! and the execution timeline it produces.
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `ProcessSpec` | Caller |
//! | In-flight | `Process` | One simulation run |
//! | Output | `Process` + `Timeline` | `SimulationOutcome` |

mod process;
mod timeline;

pub use process::{Process, ProcessId, ProcessSpec, DEFAULT_PRIORITY};
pub use timeline::{Slice, Timeline};
