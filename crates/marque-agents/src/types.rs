//! Agent descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgentError;

/// Release status shown next to an agent in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Beta,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Beta => "beta",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a persona in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub color_token: String,
    pub status: AgentStatus,
}

impl AgentDescriptor {
    /// Returns the built-in persona this descriptor belongs to, if any.
    pub fn kind(&self) -> Option<AgentKind> {
        self.id.parse().ok()
    }
}

/// The closed set of personas the composer knows how to prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    ContentStrategist,
    Copywriter,
    SeoSpecialist,
    SocialMediaManager,
    BrandGuardian,
    EmailMarketer,
    MarketResearcher,
    CampaignAnalyst,
}

impl AgentKind {
    /// All personas, in catalog order.
    pub const ALL: [AgentKind; 8] = [
        AgentKind::ContentStrategist,
        AgentKind::Copywriter,
        AgentKind::SeoSpecialist,
        AgentKind::SocialMediaManager,
        AgentKind::BrandGuardian,
        AgentKind::EmailMarketer,
        AgentKind::MarketResearcher,
        AgentKind::CampaignAnalyst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::ContentStrategist => "content-strategist",
            AgentKind::Copywriter => "copywriter",
            AgentKind::SeoSpecialist => "seo-specialist",
            AgentKind::SocialMediaManager => "social-media-manager",
            AgentKind::BrandGuardian => "brand-guardian",
            AgentKind::EmailMarketer => "email-marketer",
            AgentKind::MarketResearcher => "market-researcher",
            AgentKind::CampaignAnalyst => "campaign-analyst",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AgentError::NotFound { id: s.to_string() })
    }
}
