//! Conversational AI agents.
//!
//! Agent configurations are large and change often, so they are passed through as
//! JSON rather than modelled field by field.

use crate::client::validation::require_non_empty;
use crate::transport::{HttpTransport, Query, RequestSpec};
use crate::Result;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentListQuery {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
}

impl AgentListQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("page_size", self.page_size)
            .push_opt("search", self.search.as_ref())
    }
}

/// `/v1/convai/agents`.
pub struct Agents<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Agents<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: &AgentListQuery) -> Result<Value> {
        let spec = RequestSpec::get(&["v1", "convai", "agents"]).query(query.to_query());
        self.transport.execute(spec).await?.into_json()
    }

    pub async fn get(&self, agent_id: &str) -> Result<Value> {
        require_non_empty("agent_id", agent_id)?;
        self.transport
            .execute(RequestSpec::get(&["v1", "convai", "agents", agent_id]))
            .await?
            .into_json()
    }

    /// Returns the created agent, including its `agent_id`.
    pub async fn create(&self, config: &Value) -> Result<Value> {
        let spec = RequestSpec::post(&["v1", "convai", "agents", "create"]).json(config)?;
        self.transport.execute(spec).await?.into_json()
    }

    /// Partial update; only the fields present in `patch` change.
    pub async fn update(&self, agent_id: &str, patch: &Value) -> Result<Value> {
        require_non_empty("agent_id", agent_id)?;
        let spec = RequestSpec::patch(&["v1", "convai", "agents", agent_id]).json(patch)?;
        self.transport.execute(spec).await?.into_json()
    }

    pub async fn delete(&self, agent_id: &str) -> Result<Value> {
        require_non_empty("agent_id", agent_id)?;
        self.transport
            .execute(RequestSpec::delete(&["v1", "convai", "agents", agent_id]))
            .await?
            .into_json()
    }
}
