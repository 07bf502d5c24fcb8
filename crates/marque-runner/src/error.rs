//! Task runner error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("agent not found: {id}")]
    UnknownAgent { id: String },

    #[error("provider error: {0}")]
    Provider(#[from] marque_providers::ProviderError),
}

impl RunError {
    pub fn is_unknown_agent(&self) -> bool {
        matches!(self, Self::UnknownAgent { .. })
    }
}
