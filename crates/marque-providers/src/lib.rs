//! Marque Providers - Model client implementations
//!
//! This crate provides the generation boundary used by the agent runner:
//! - `ModelClient`, the async seam that tests replace with mocks
//! - `GeminiClient`, the Google Gemini `generateContent` client
//! - `generate_text`, which folds results into plain text or a sentinel

mod config;
mod error;
mod error_classify;
mod gemini;
mod generate;
mod response_handling;
mod traits;
mod types;

pub use config::{ProviderConfig, API_KEY_ENV_VARS, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use error::ProviderError;
pub use error_classify::classify_error;
pub use gemini::GeminiClient;
pub use generate::{generate_text, GENERATION_ERROR, NO_RESPONSE};
pub use secrecy::SecretString;
pub use traits::{ModelClient, ModelResult};
pub use types::{GenerationRequest, GenerationResponse, TokenUsage};
