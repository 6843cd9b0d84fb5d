//! Policy and guardrail fixtures.

use chrono::{DateTime, Duration, Utc};
use samix_types::{Guardrail, Policy, PolicyKind};

pub(crate) fn build_policies(anchor: DateTime<Utc>) -> Vec<Policy> {
    vec![
        Policy {
            id: "policy-1".to_string(),
            name: "PII Detection & Blocking".to_string(),
            description: "Prevents AI agents from outputting personally identifiable information including SSNs, credit cards, and addresses."
                .to_string(),
            enabled: true,
            kind: PolicyKind::Safety,
            violation_count: 23,
            last_triggered: Some(anchor - Duration::hours(2)),
        },
        Policy {
            id: "policy-2".to_string(),
            name: "Financial Advice Restriction".to_string(),
            description: "Blocks AI from providing specific financial, investment, or tax advice to users.".to_string(),
            enabled: true,
            kind: PolicyKind::Compliance,
            violation_count: 8,
            last_triggered: Some(anchor - Duration::hours(24)),
        },
        Policy {
            id: "policy-3".to_string(),
            name: "Content Safety Filter".to_string(),
            description: "Filters harmful, inappropriate, or offensive content from AI responses.".to_string(),
            enabled: true,
            kind: PolicyKind::Safety,
            violation_count: 156,
            last_triggered: Some(anchor - Duration::minutes(30)),
        },
        Policy {
            id: "policy-4".to_string(),
            name: "Latency Threshold Alert".to_string(),
            description: "Triggers alert when agent response time exceeds 5 seconds.".to_string(),
            enabled: true,
            kind: PolicyKind::Performance,
            violation_count: 42,
            last_triggered: Some(anchor - Duration::hours(4)),
        },
        Policy {
            id: "policy-5".to_string(),
            name: "Hallucination Detection".to_string(),
            description: "Uses secondary model to detect potential hallucinations in AI responses.".to_string(),
            enabled: false,
            kind: PolicyKind::Content,
            violation_count: 0,
            last_triggered: None,
        },
        Policy {
            id: "policy-6".to_string(),
            name: "GDPR Data Handling".to_string(),
            description: "Ensures AI agents comply with GDPR data handling and privacy requirements.".to_string(),
            enabled: true,
            kind: PolicyKind::Compliance,
            violation_count: 3,
            last_triggered: Some(anchor - Duration::days(7)),
        },
    ]
}

pub(crate) fn build_guardrails() -> Vec<Guardrail> {
    vec![
        Guardrail {
            id: "guard-1".to_string(),
            name: "Input Sanitization".to_string(),
            description: "Sanitizes and validates all user inputs before processing.".to_string(),
            enabled: true,
            triggers_today: 45,
        },
        Guardrail {
            id: "guard-2".to_string(),
            name: "Output Length Limit".to_string(),
            description: "Limits AI response length to prevent token overflow attacks.".to_string(),
            enabled: true,
            triggers_today: 12,
        },
        Guardrail {
            id: "guard-3".to_string(),
            name: "Prompt Injection Detection".to_string(),
            description: "Detects and blocks prompt injection attempts in user inputs.".to_string(),
            enabled: true,
            triggers_today: 7,
        },
        Guardrail {
            id: "guard-4".to_string(),
            name: "Rate Limiting".to_string(),
            description: "Limits requests per user to prevent abuse.".to_string(),
            enabled: true,
            triggers_today: 89,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_anchor;

    #[test]
    fn disabled_policies_have_no_trigger_timestamp() {
        let policies = build_policies(fixture_anchor());
        let disabled = policies.iter().find(|p| !p.enabled).expect("one disabled policy");
        assert!(disabled.last_triggered.is_none());
        assert_eq!(disabled.violation_count, 0);
    }

    #[test]
    fn guardrail_ids_are_unique() {
        let guardrails = build_guardrails();
        let mut ids: Vec<_> = guardrails.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), guardrails.len());
    }
}
