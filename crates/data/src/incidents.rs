//! Incident fixtures.
//!
//! The feed cycles deterministically through the failure taxonomy so every
//! kind, severity, and status shows up in the UI without a random source.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use samix_types::{Incident, IncidentKind, IncidentStatus, Severity};

use crate::agents::AGENT_NAMES;

const INCIDENT_COUNT: usize = 25;

fn titles_for(kind: IncidentKind) -> [&'static str; 3] {
    match kind {
        IncidentKind::Hallucination => [
            "Model generated fabricated product specifications",
            "Incorrect date references in customer response",
            "Fictional company policy cited in support chat",
        ],
        IncidentKind::RetrievalFailure => [
            "RAG failed to retrieve relevant documentation",
            "Vector search returned empty results",
            "Context window exceeded during retrieval",
        ],
        IncidentKind::PolicyViolation => [
            "PII detected in model output",
            "Unauthorized financial advice generated",
            "Content safety filter bypassed",
        ],
        IncidentKind::Timeout => [
            "LLM inference exceeded 30s threshold",
            "Tool execution timed out",
            "Agent workflow hung on external API",
        ],
        IncidentKind::ContextOverflow => [
            "Token limit exceeded in conversation",
            "Document chunking failed for large file",
            "History context truncation triggered",
        ],
    }
}

pub(crate) fn build(anchor: DateTime<Utc>) -> IndexMap<String, Incident> {
    let mut incidents = IndexMap::with_capacity(INCIDENT_COUNT);
    for i in 0..INCIDENT_COUNT {
        let kind = IncidentKind::ALL[i % IncidentKind::ALL.len()];
        let severity = Severity::ALL[(i * 3 + 1) % Severity::ALL.len()];
        let status = IncidentStatus::ALL[(i * 7 + 2) % IncidentStatus::ALL.len()];
        let agent_idx = (i * 2 + 3) % AGENT_NAMES.len();
        let titles = titles_for(kind);

        let last_seen = anchor - Duration::hours(((i * 11) % 160) as i64) - Duration::minutes(((i * 23) % 60) as i64);
        let first_seen = last_seen - Duration::days(((i * 5) % 28 + 1) as i64);

        let id = format!("INC-{:04}", i + 1);
        let incident = Incident {
            id: id.clone(),
            kind,
            title: titles[i % titles.len()].to_string(),
            description: format!(
                "Detailed analysis of the {} incident affecting production systems.",
                kind.as_str().replace('_', " ")
            ),
            agent_id: format!("agent-{}", agent_idx + 1),
            agent_name: AGENT_NAMES[agent_idx].to_string(),
            severity,
            status,
            first_seen,
            last_seen,
            event_count: ((i * 37) % 500 + 1) as u32,
            affected_users: ((i * 17) % 100 + 1) as u32,
            root_cause: Some(
                "Insufficient context provided to the model during the RAG retrieval phase, leading to hallucinated responses.".to_string(),
            ),
        };
        incidents.insert(id, incident);
    }
    incidents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_anchor;

    #[test]
    fn every_kind_and_severity_appears() {
        let incidents = build(fixture_anchor());
        for kind in IncidentKind::ALL {
            assert!(incidents.values().any(|i| i.kind == kind), "missing kind {kind}");
        }
        for severity in Severity::ALL {
            assert!(incidents.values().any(|i| i.severity == severity), "missing severity {severity}");
        }
    }

    #[test]
    fn ids_are_sequential_and_padded() {
        let incidents = build(fixture_anchor());
        let first = incidents.values().next().expect("non-empty fixtures");
        assert_eq!(first.id, "INC-0001");
        assert!(incidents.contains_key("INC-0025"));
    }
}
