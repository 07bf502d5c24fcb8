//! Model client traits

use async_trait::async_trait;

use crate::{GenerationRequest, GenerationResponse, ProviderError};

/// Result type for model operations
pub type ModelResult<T> = Result<T, ProviderError>;

/// Trait for model clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one request and wait for the complete response
    async fn generate(&self, request: &GenerationRequest) -> ModelResult<GenerationResponse>;

    /// Get the default model identifier
    fn model(&self) -> &str;

    /// Get the provider name
    fn provider(&self) -> &str;
}
