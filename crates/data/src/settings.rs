//! Organization settings, model, and prompt fixtures.

use chrono::{DateTime, Duration, Utc};
use samix_types::{AgentStatus, ModelConfig, OrgSetting, PromptConfig};

pub(crate) fn build_models() -> Vec<ModelConfig> {
    vec![
        ModelConfig {
            name: "gpt-4-turbo".to_string(),
            provider: "OpenAI".to_string(),
            agents_using: 3,
            status: AgentStatus::Active,
        },
        ModelConfig {
            name: "claude-3-opus".to_string(),
            provider: "Anthropic".to_string(),
            agents_using: 2,
            status: AgentStatus::Active,
        },
        ModelConfig {
            name: "gemini-pro".to_string(),
            provider: "Google".to_string(),
            agents_using: 1,
            status: AgentStatus::Active,
        },
        ModelConfig {
            name: "llama-3-70b".to_string(),
            provider: "Meta".to_string(),
            agents_using: 1,
            status: AgentStatus::Inactive,
        },
    ]
}

pub(crate) fn build_prompts(anchor: DateTime<Utc>) -> Vec<PromptConfig> {
    vec![
        PromptConfig {
            name: "Customer Support System".to_string(),
            model: "gpt-4-turbo".to_string(),
            version: "v2.3".to_string(),
            updated_at: anchor - Duration::days(2),
        },
        PromptConfig {
            name: "Document Q&A System".to_string(),
            model: "claude-3-opus".to_string(),
            version: "v1.5".to_string(),
            updated_at: anchor - Duration::days(7),
        },
        PromptConfig {
            name: "Sales Assistant Persona".to_string(),
            model: "gpt-4-turbo".to_string(),
            version: "v3.0".to_string(),
            updated_at: anchor - Duration::days(3),
        },
        PromptConfig {
            name: "Code Review Instructions".to_string(),
            model: "gemini-pro".to_string(),
            version: "v1.0".to_string(),
            updated_at: anchor - Duration::days(14),
        },
    ]
}

pub(crate) fn build_org_settings() -> Vec<OrgSetting> {
    let rows: [(&str, &str, &str, bool); 6] = [
        (
            "ai_governance",
            "Enable AI Governance",
            "Monitor and govern all AI agent behavior across your organization",
            true,
        ),
        (
            "policy_enforcement",
            "Enable Policy Enforcement",
            "Automatically enforce AI policies and block violations in real-time",
            true,
        ),
        (
            "audit_logs",
            "Enable Audit Logs",
            "Keep detailed logs of all AI agent actions for compliance",
            true,
        ),
        (
            "alert_notifications",
            "Alert Notifications",
            "Receive notifications when incidents or violations occur",
            true,
        ),
        (
            "slack_integration",
            "Slack Integration",
            "Send governance alerts to a Slack channel",
            false,
        ),
        (
            "email_digest",
            "Email Digest",
            "Daily summary of incidents and policy activity",
            true,
        ),
    ];

    rows.into_iter()
        .map(|(key, label, description, enabled)| OrgSetting {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            enabled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_anchor;

    #[test]
    fn prompts_reference_configured_models() {
        let models = build_models();
        for prompt in build_prompts(fixture_anchor()) {
            assert!(models.iter().any(|m| m.name == prompt.model), "unknown model {}", prompt.model);
        }
    }
}
