use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;

use crate::definitions::get_agent_definitions;
use crate::error::AgentError;
use crate::types::AgentDescriptor;

lazy_static! {
    static ref BUILTIN: AgentRegistry = AgentRegistry {
        agents: get_agent_definitions(),
    };
}

/// Read-only, ordered catalog of agent descriptors.
#[derive(Clone, Default)]
pub struct AgentRegistry {
    agents: Vec<AgentDescriptor>,
}

impl fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("agents", &self.ids())
            .finish()
    }
}

impl AgentRegistry {
    /// The process-wide registry of built-in personas.
    pub fn builtin() -> &'static AgentRegistry {
        &BUILTIN
    }

    /// Builds a registry from descriptors, keeping their order.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = AgentDescriptor>,
    ) -> Result<Self, AgentError> {
        let mut seen = HashSet::new();
        let mut agents = Vec::new();
        for descriptor in descriptors {
            if !seen.insert(descriptor.id.clone()) {
                return Err(AgentError::DuplicateId { id: descriptor.id });
            }
            agents.push(descriptor);
        }
        Ok(Self { agents })
    }

    pub fn list_agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    pub fn find_agent(&self, id: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_agent(id).is_some()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
