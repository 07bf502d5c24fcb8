//! Mock model client for integration testing
//!
//! Provides a MockModelClient that can be configured with queued responses
//! and tracks all requests sent to it.

#![allow(dead_code)]

use async_trait::async_trait;
use marque_providers::{
    GenerationRequest, GenerationResponse, ModelClient, ModelResult, ProviderError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A queued response
#[derive(Clone)]
pub enum MockResponse {
    /// Text response
    Text(String),
    /// Successful reply without any text
    Empty,
    /// Transport failure
    Unavailable,
    /// Rejected credentials
    AuthFailed,
}

/// Mock model client for testing
pub struct MockModelClient {
    /// Queued responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// All requests that have been sent
    recorded: Arc<Mutex<Vec<GenerationRequest>>>,
    /// Reply with the first line of the system instruction instead of the queue
    echo_persona: bool,
}

impl MockModelClient {
    /// Create a new mock client
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            recorded: Arc::new(Mutex::new(Vec::new())),
            echo_persona: false,
        }
    }

    /// A client that answers every request with the persona line it was sent
    pub fn echo_persona() -> Self {
        Self {
            echo_persona: true,
            ..Self::new()
        }
    }

    /// Queue a response
    pub fn queue(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue a text response
    pub fn queue_text(&self, text: impl Into<String>) {
        self.queue(MockResponse::Text(text.into()));
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.recorded.lock().unwrap().clone()
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, request: &GenerationRequest) -> ModelResult<GenerationResponse> {
        self.recorded.lock().unwrap().push(request.clone());

        if self.echo_persona {
            // Yield so concurrent tasks interleave
            tokio::task::yield_now().await;
            let line = request.system_instruction.lines().next().unwrap_or_default();
            return Ok(GenerationResponse::from_text(line));
        }

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Text(text)) => Ok(GenerationResponse::from_text(text)),
            Some(MockResponse::Empty) | None => Ok(GenerationResponse::default()),
            Some(MockResponse::Unavailable) => Err(ProviderError::Unavailable {
                provider: "mock".to_string(),
            }),
            Some(MockResponse::AuthFailed) => Err(ProviderError::AuthenticationFailed(
                "invalid key".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn provider(&self) -> &str {
        "mock"
    }
}
