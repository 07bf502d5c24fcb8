//! Request and response values exchanged with a model client

use serde::{Deserialize, Serialize};

/// One text-generation call: built per task and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A successful reply from the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// Generated text, `None` when the reply carried no text at all.
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl GenerationResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// The text if the model produced any non-empty output.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_serializes_camel_case_throughout() {
        let response = GenerationResponse {
            text: Some("Hi".to_string()),
            finish_reason: Some("STOP".to_string()),
            usage: Some(TokenUsage {
                input_tokens: 12,
                output_tokens: 2,
            }),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["finishReason"], "STOP");
        assert_eq!(value["usage"], json!({"inputTokens": 12, "outputTokens": 2}));
    }
}
