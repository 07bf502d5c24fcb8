use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use marque_agents::{compose_for, AdditionalContext, AgentKind, AgentRegistry};
use marque_providers::{generate_text, GenerationRequest, ModelClient, TokenUsage, NO_RESPONSE};

use crate::error::RunError;

/// Returned by [`AgentRunner::run_agent_task`] for ids outside the registry.
pub const AGENT_NOT_FOUND: &str = "Agent not found.";

/// Typed result of one agent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutput {
    pub agent: AgentKind,
    pub model: String,
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl TaskOutput {
    /// The generated text, or [`NO_RESPONSE`] when the model produced none.
    pub fn text_or_default(&self) -> &str {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_RESPONSE)
    }
}

/// Dispatches agent tasks to a model client.
///
/// Holds only shared read-only handles, so clones can run tasks concurrently.
#[derive(Clone)]
pub struct AgentRunner {
    registry: Arc<AgentRegistry>,
    client: Arc<dyn ModelClient>,
    model: String,
}

impl std::fmt::Debug for AgentRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRunner")
            .field("registry", &self.registry)
            .field("provider", &self.client.provider())
            .field("model", &self.model)
            .finish()
    }
}

impl AgentRunner {
    /// Runner over the built-in personas using the client's default model.
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        let model = client.model().to_string();
        Self {
            registry: Arc::new(AgentRegistry::builtin().clone()),
            client,
            model,
        }
    }

    pub fn with_registry(mut self, registry: AgentRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolves the agent and builds the request without touching the network.
    pub fn prepare(
        &self,
        agent_id: &str,
        input: &str,
        context: Option<&AdditionalContext>,
    ) -> Result<(AgentKind, GenerationRequest), RunError> {
        let kind = self
            .registry
            .find_agent(agent_id)
            .and_then(|descriptor| descriptor.kind())
            .ok_or_else(|| RunError::UnknownAgent {
                id: agent_id.to_string(),
            })?;

        let brand = context.and_then(|c| c.brand_intelligence.as_ref());
        let composed = compose_for(kind, input, brand);
        let request =
            GenerationRequest::new(&self.model, composed.system_instruction, composed.prompt);

        Ok((kind, request))
    }

    /// Runs one task and reports failures as typed errors.
    pub async fn try_run_agent_task(
        &self,
        agent_id: &str,
        input: &str,
        context: Option<&AdditionalContext>,
    ) -> Result<TaskOutput, RunError> {
        let (agent, request) = self.prepare(agent_id, input, context)?;
        let span = task_span(agent, &self.model);

        async move {
            tracing::info!("running agent task");
            let response = self.client.generate(&request).await?;
            Ok::<_, RunError>(TaskOutput {
                agent,
                model: request.model,
                text: response.text,
                finish_reason: response.finish_reason,
                usage: response.usage,
            })
        }
        .instrument(span)
        .await
    }

    /// Runs one task and always resolves to text.
    ///
    /// Unknown agents yield [`AGENT_NOT_FOUND`] without a remote call; remote
    /// failures yield the provider's error sentinel.
    pub async fn run_agent_task(
        &self,
        agent_id: &str,
        input: &str,
        context: Option<&AdditionalContext>,
    ) -> String {
        let (agent, request) = match self.prepare(agent_id, input, context) {
            Ok(prepared) => prepared,
            Err(error) => {
                tracing::warn!(agent_id, %error, "rejected agent task");
                return AGENT_NOT_FOUND.to_string();
            }
        };

        let span = task_span(agent, &self.model);
        async move {
            tracing::info!("running agent task");
            generate_text(self.client.as_ref(), &request).await
        }
        .instrument(span)
        .await
    }
}

fn task_span(agent: AgentKind, model: &str) -> tracing::Span {
    tracing::info_span!(
        "agent_task",
        task_id = %uuid::Uuid::new_v4(),
        agent = %agent,
        model = %model,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_output_json_is_camel_case() {
        let output = TaskOutput {
            agent: AgentKind::Copywriter,
            model: "gemini-2.5-flash".to_string(),
            text: Some("Hello".to_string()),
            finish_reason: Some("STOP".to_string()),
            usage: Some(TokenUsage {
                input_tokens: 40,
                output_tokens: 5,
            }),
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "agent": "copywriter",
                "model": "gemini-2.5-flash",
                "text": "Hello",
                "finishReason": "STOP",
                "usage": {"inputTokens": 40, "outputTokens": 5}
            })
        );
    }
}
