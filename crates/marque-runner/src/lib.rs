//! Marque Runner - the agent task entry point
//!
//! Resolves an agent id against the registry, composes the persona prompt
//! and issues exactly one generation call. Two surfaces are offered:
//! - `try_run_agent_task`: typed `Result` for callers that branch on errors
//! - `run_agent_task`: always a string, with fixed sentinels for failures

mod error;
mod runner;

pub use error::RunError;
pub use marque_providers::{GENERATION_ERROR, NO_RESPONSE};
pub use runner::{AgentRunner, TaskOutput, AGENT_NOT_FOUND};
