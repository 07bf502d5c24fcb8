use crate::types::{AgentDescriptor, AgentKind, AgentStatus};

type AgentRow = (
    AgentKind,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    AgentStatus,
    &'static [&'static str],
);

// (kind, name, role, description, color, status, capabilities)
const AGENTS: &[AgentRow] = &[
    (
        AgentKind::ContentStrategist,
        "Atlas",
        "Content Strategist",
        "Plans editorial calendars and content pillars around business goals.",
        "indigo",
        AgentStatus::Active,
        &["Content pillars", "Editorial calendars", "Audience mapping"],
    ),
    (
        AgentKind::Copywriter,
        "Nova",
        "Conversion Copywriter",
        "Writes headlines, landing pages and ad copy that convert.",
        "rose",
        AgentStatus::Active,
        &["Headlines", "Landing pages", "Ad copy", "A/B variants"],
    ),
    (
        AgentKind::SeoSpecialist,
        "Orion",
        "SEO Specialist",
        "Finds keyword opportunities and tightens on-page optimization.",
        "emerald",
        AgentStatus::Active,
        &["Keyword research", "On-page audits", "Meta descriptions"],
    ),
    (
        AgentKind::SocialMediaManager,
        "Echo",
        "Social Media Manager",
        "Turns ideas into platform-native posts and engagement hooks.",
        "sky",
        AgentStatus::Active,
        &["Post drafting", "Hashtag strategy", "Platform adaptation"],
    ),
    (
        AgentKind::BrandGuardian,
        "Sentinel",
        "Brand Consistency Guardian",
        "Reviews drafts against the brand voice and flags off-brand language.",
        "amber",
        AgentStatus::Active,
        &["Voice audits", "Tone alignment", "Rewrite suggestions"],
    ),
    (
        AgentKind::EmailMarketer,
        "Relay",
        "Email Campaign Specialist",
        "Builds email sequences with subject lines that get opened.",
        "orange",
        AgentStatus::Active,
        &["Subject lines", "Drip sequences", "Personalization"],
    ),
    (
        AgentKind::MarketResearcher,
        "Lens",
        "Market Researcher",
        "Maps competitors, audience segments and positioning gaps.",
        "violet",
        AgentStatus::Beta,
        &["Competitor analysis", "Audience personas", "Positioning"],
    ),
    (
        AgentKind::CampaignAnalyst,
        "Pulse",
        "Campaign Performance Analyst",
        "Reads campaign metrics and recommends where to shift budget.",
        "teal",
        AgentStatus::Beta,
        &["KPI interpretation", "Budget allocation", "Experiment design"],
    ),
];

/// Returns the built-in agent descriptors in catalog order.
pub fn get_agent_definitions() -> Vec<AgentDescriptor> {
    AGENTS
        .iter()
        .map(
            |&(kind, name, role, description, color, status, capabilities)| AgentDescriptor {
                id: kind.as_str().to_string(),
                name: name.to_string(),
                role: role.to_string(),
                description: description.to_string(),
                capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
                color_token: color.to_string(),
                status,
            },
        )
        .collect()
}
