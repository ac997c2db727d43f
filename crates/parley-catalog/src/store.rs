//! In-memory store of user-created agents.
//!
//! There is no persistence layer: records live for the lifetime of the
//! process, keyed by owner. The platform remains the source of truth for
//! the agents themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// One user-created agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRecord {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(rename = "systemPrompt")]
    pub system_prompt: Option<String>,
    #[serde(rename = "firstMessage")]
    pub first_message: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// The agent's id on the external voice platform.
    #[serde(rename = "agentId")]
    pub platform_agent_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Thread-safe in-memory agent registry.
///
/// Uses `std::sync::RwLock` intentionally: all lock acquisitions are brief
/// HashMap operations that never span `.await` points.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    records: Arc<RwLock<HashMap<Uuid, AgentRecord>>>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: AgentRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records.insert(record.id, record);
    }

    /// The user's agents, newest first.
    pub fn agents_for_user(&self, user_id: &str) -> Vec<AgentRecord> {
        let records = self
            .records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut agents: Vec<_> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        agents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        agents
    }

    /// Finds one of the user's agents by platform id or record id.
    pub fn find_for_user(&self, user_id: &str, agent_id: &str) -> Option<AgentRecord> {
        let records = self
            .records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records
            .values()
            .find(|r| {
                r.user_id == user_id
                    && (r.platform_agent_id == agent_id || r.id.to_string() == agent_id)
            })
            .cloned()
    }

    /// Removes a record. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records.remove(&id).is_some()
    }
}
