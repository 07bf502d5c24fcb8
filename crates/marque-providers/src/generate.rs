//! String-returning generation boundary.
//!
//! Callers that only understand text get the model output or one of two
//! fixed sentinels. Failure detail is logged here and goes no further.

use crate::{GenerationRequest, ModelClient};

/// Returned when the call succeeded but the model produced no text.
pub const NO_RESPONSE: &str = "No response generated.";

/// Returned for any transport, authentication or remote failure.
pub const GENERATION_ERROR: &str = "Error: the agent encountered an issue processing your request.";

/// Issues exactly one request and folds every outcome into a string.
pub async fn generate_text(client: &dyn ModelClient, request: &GenerationRequest) -> String {
    match client.generate(request).await {
        Ok(response) => match response.non_empty_text() {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(
                    provider = client.provider(),
                    finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
                    "model returned no text"
                );
                NO_RESPONSE.to_string()
            }
        },
        Err(error) => {
            tracing::error!(
                provider = client.provider(),
                model = %request.model,
                error = %error,
                "generation request failed"
            );
            GENERATION_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{traits::ModelResult, GenerationResponse, ProviderError};
    use async_trait::async_trait;

    struct Fixed(fn() -> ModelResult<GenerationResponse>);

    #[async_trait]
    impl ModelClient for Fixed {
        async fn generate(&self, _request: &GenerationRequest) -> ModelResult<GenerationResponse> {
            (self.0)()
        }

        fn model(&self) -> &str {
            "fixed"
        }

        fn provider(&self) -> &str {
            "fixed"
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("fixed", "system", "prompt")
    }

    #[tokio::test]
    async fn returns_text_verbatim() {
        let client = Fixed(|| Ok(GenerationResponse::from_text("Hello")));
        assert_eq!(generate_text(&client, &request()).await, "Hello");
    }

    #[tokio::test]
    async fn empty_text_becomes_no_response() {
        let client = Fixed(|| Ok(GenerationResponse::from_text("")));
        assert_eq!(generate_text(&client, &request()).await, NO_RESPONSE);

        let client = Fixed(|| Ok(GenerationResponse::default()));
        assert_eq!(generate_text(&client, &request()).await, NO_RESPONSE);
    }

    #[tokio::test]
    async fn errors_become_sentinel() {
        let client = Fixed(|| Err(ProviderError::AuthenticationFailed("bad key".into())));
        assert_eq!(generate_text(&client, &request()).await, GENERATION_ERROR);
    }
}
