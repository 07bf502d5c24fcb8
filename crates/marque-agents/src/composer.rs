//! Prompt composition
//!
//! Maps an agent and raw user input to the system instruction and prompt
//! sent to the model. Composition is pure: the same inputs always produce
//! the same strings.

use serde::{Deserialize, Serialize};

use crate::brand::BrandContext;
use crate::error::AgentError;
use crate::prompts::{self, PersonaTemplate, DEFAULT_BRAND_TONE};
use crate::types::AgentKind;

/// A fully composed request body for one persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPrompt {
    pub system_instruction: String,
    pub prompt: String,
}

/// Composes the prompt for `agent_id`.
///
/// Unknown ids return [`AgentError::NotFound`]; nothing else can fail.
pub fn compose(
    agent_id: &str,
    input: &str,
    context: Option<&BrandContext>,
) -> Result<ComposedPrompt, AgentError> {
    let kind: AgentKind = agent_id.parse()?;
    Ok(compose_for(kind, input, context))
}

/// Composes the prompt for an already resolved persona.
pub fn compose_for(kind: AgentKind, input: &str, context: Option<&BrandContext>) -> ComposedPrompt {
    let composed = match kind {
        AgentKind::ContentStrategist => render(&prompts::CONTENT_STRATEGIST, input, None),
        AgentKind::Copywriter => render(&prompts::COPYWRITER, input, None),
        AgentKind::SeoSpecialist => render(&prompts::SEO_SPECIALIST, input, None),
        AgentKind::SocialMediaManager => render(&prompts::SOCIAL_MEDIA_MANAGER, input, None),
        AgentKind::BrandGuardian => {
            let guidelines = context
                .map(BrandContext::to_prompt_json)
                .unwrap_or_else(|| DEFAULT_BRAND_TONE.to_string());
            render(&prompts::BRAND_GUARDIAN, input, Some(&guidelines))
        }
        AgentKind::EmailMarketer => render(&prompts::EMAIL_MARKETER, input, None),
        AgentKind::MarketResearcher => render(&prompts::MARKET_RESEARCHER, input, None),
        AgentKind::CampaignAnalyst => render(&prompts::CAMPAIGN_ANALYST, input, None),
    };

    tracing::debug!(
        agent = %kind,
        prompt_len = composed.prompt.len(),
        "composed prompt"
    );
    composed
}

fn render(template: &PersonaTemplate, input: &str, guidelines: Option<&str>) -> ComposedPrompt {
    let mut prompt = String::new();
    prompt.push_str(template.task);
    prompt.push_str("\n\n");

    if let Some(guidelines) = guidelines {
        prompt.push_str("Brand guidelines:\n");
        prompt.push_str(guidelines);
        prompt.push_str("\n\n");
    }

    prompt.push_str("User request:\n\"\"\"\n");
    prompt.push_str(input);
    prompt.push_str("\n\"\"\"\n\nYour response must include:\n");
    for (i, item) in template.checklist.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, item));
    }

    ComposedPrompt {
        system_instruction: template.system_instruction.to_string(),
        prompt,
    }
}
