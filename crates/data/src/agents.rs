//! Registered agent fixtures.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use samix_types::{Agent, AgentStatus};

/// Display names shared with the incident and trace fixtures.
pub(crate) const AGENT_NAMES: [&str; 5] = [
    "CustomerSupport-v2",
    "SalesAssistant-prod",
    "DocumentQA-main",
    "CodeReview-beta",
    "DataAnalyst-v1",
];

pub(crate) fn build(anchor: DateTime<Utc>) -> IndexMap<String, Agent> {
    let rows: [(&str, &str, &str, AgentStatus, u64, f64); 5] = [
        (
            "CustomerSupport-v2",
            "Handles tier-1 support conversations and order lookups.",
            "gpt-4-turbo",
            AgentStatus::Active,
            128_400,
            4.2,
        ),
        (
            "SalesAssistant-prod",
            "Qualifies inbound leads and drafts outreach replies.",
            "gpt-4-turbo",
            AgentStatus::Active,
            86_200,
            2.1,
        ),
        (
            "DocumentQA-main",
            "Answers questions over the internal knowledge base.",
            "claude-3-opus",
            AgentStatus::Active,
            64_750,
            3.8,
        ),
        (
            "CodeReview-beta",
            "Reviews pull requests against the engineering guidelines.",
            "gemini-pro",
            AgentStatus::Degraded,
            12_300,
            5.6,
        ),
        (
            "DataAnalyst-v1",
            "Runs ad-hoc analytics queries from natural language.",
            "llama-3-70b",
            AgentStatus::Active,
            31_900,
            1.2,
        ),
    ];

    let mut agents = IndexMap::with_capacity(rows.len());
    for (i, (name, description, model, status, executions, failure_rate)) in rows.into_iter().enumerate() {
        let id = format!("agent-{}", i + 1);
        let agent = Agent {
            id: id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            model_version: model.to_string(),
            status,
            last_active_at: anchor - Duration::minutes((i as i64 * 13) % 240),
            total_executions: executions,
            failure_rate,
        };
        agents.insert(id, agent);
    }
    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_anchor;

    #[test]
    fn agent_ids_line_up_with_incident_references() {
        let agents = build(fixture_anchor());
        for i in 1..=AGENT_NAMES.len() {
            assert!(agents.contains_key(&format!("agent-{i}")));
        }
    }
}
