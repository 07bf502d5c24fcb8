//! Google Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_GEMINI_BASE_URL;
use crate::error_classify::classify_error;
use crate::response_handling::{extract_retry_after, read_error_body, retry_delay_from_body};
use crate::{
    traits::ModelResult, GenerationRequest, GenerationResponse, ModelClient, ProviderConfig,
    ProviderError, TokenUsage,
};

/// Google Gemini API client
pub struct GeminiClient {
    client: Client,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::Configuration("API key required for Gemini".into()))?;

        if api_key.expose_secret().trim().is_empty() {
            return Err(ProviderError::Configuration(
                "API key for Gemini is empty".into(),
            ));
        }

        config.validate().map_err(ProviderError::Configuration)?;

        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    fn build_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let generation_config =
            if self.config.temperature.is_some() || self.config.max_output_tokens.is_some() {
                Some(GeminiGenerationConfig {
                    temperature: self.config.temperature,
                    max_output_tokens: self.config.max_output_tokens,
                })
            } else {
                None
            };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart::text(&request.prompt)],
            }],
            system_instruction: if request.system_instruction.is_empty() {
                None
            } else {
                Some(GeminiSystemInstruction {
                    parts: vec![GeminiPart::text(&request.system_instruction)],
                })
            },
            generation_config,
        }
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_BASE_URL)
            .trim_end_matches('/')
    }

    fn api_key(&self) -> &str {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .unwrap_or_default()
    }

    /// Mirrors the hosted SDK's `.text`: the first candidate's text parts joined,
    /// thought parts skipped.
    fn convert_response(response: GeminiResponse) -> GenerationResponse {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "Gemini blocked the prompt");
        }

        let usage = response.usage_metadata.map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        let Some(candidate) = response.candidates.into_iter().next() else {
            return GenerationResponse {
                text: None,
                finish_reason: None,
                usage,
            };
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match part {
                GeminiPart::Text { text, thought } if thought != Some(true) => Some(text),
                _ => None,
            })
            .collect();

        GenerationResponse {
            text: if text.is_empty() { None } else { Some(text) },
            finish_reason: candidate.finish_reason,
            usage,
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> ModelResult<GenerationResponse> {
        let body = self.build_request(request);
        let model = if request.model.is_empty() {
            self.config.model.as_str()
        } else {
            request.model.as_str()
        };
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url(), model);

        tracing::debug!(model, "sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let header_delay = extract_retry_after(response.headers());
            let body = read_error_body(response).await;
            let retry_after_ms = header_delay.or_else(|| retry_delay_from_body(&body));
            return Err(classify_error(status, &body, model, retry_after_ms));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(Self::convert_response(api_response))
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}

// API request/response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    Other(serde_json::Value),
}

impl GeminiPart {
    fn text(text: &str) -> Self {
        GeminiPart::Text {
            text: text.to_string(),
            thought: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}
