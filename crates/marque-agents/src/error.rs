//! Agent lookup error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent not found: {id}")]
    NotFound { id: String },

    #[error("duplicate agent id: {id}")]
    DuplicateId { id: String },
}
