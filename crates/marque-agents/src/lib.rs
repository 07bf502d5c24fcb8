//! Marque Agents - persona catalog and prompt composition
//!
//! Holds the fixed registry of brand and marketing personas and the pure
//! functions that turn a persona id plus user input into the system
//! instruction and prompt sent to a model.

pub mod brand;
pub mod composer;
pub mod definitions;
mod error;
pub mod prompts;
pub mod registry;
pub mod types;

pub use crate::brand::{prioritize, AdditionalContext, BrandContext};
pub use crate::composer::{compose, compose_for, ComposedPrompt};
pub use crate::definitions::get_agent_definitions;
pub use crate::error::AgentError;
pub use crate::prompts::{PersonaTemplate, DEFAULT_BRAND_TONE};
pub use crate::registry::AgentRegistry;
pub use crate::types::{AgentDescriptor, AgentKind, AgentStatus};
