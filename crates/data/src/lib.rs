//! Mock data store for the Samix governance dashboard.
//!
//! All collections are deterministic in-memory fixtures built once at
//! startup; there is no networking or persistence behind this crate. The
//! [`DataStore`] facade is the only surface the TUI and CLI consume, so the
//! fixture modules stay private.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use samix_types::{
    Agent, AgentReliability, Guardrail, Incident, IncidentBucket, IncidentStatus, Metric, ModelConfig, OrgSetting, Policy, PromptConfig,
    SeriesPoint, Severity, Trace,
};

mod agents;
mod dashboard;
mod incidents;
mod policies;
mod settings;
mod traces;

/// Read-only facade over every mock collection.
///
/// Keyed collections use insertion-ordered maps so table rendering and JSON
/// export keep a stable order across runs.
#[derive(Debug)]
pub struct DataStore {
    anchor: DateTime<Utc>,
    incidents: IndexMap<String, Incident>,
    traces: IndexMap<String, Trace>,
    agents: IndexMap<String, Agent>,
    policies: Vec<Policy>,
    guardrails: Vec<Guardrail>,
    models: Vec<ModelConfig>,
    prompts: Vec<PromptConfig>,
    org_settings: Vec<OrgSetting>,
    incident_metrics: Vec<Metric>,
    risk_metrics: Vec<Metric>,
    incidents_over_time: Vec<IncidentBucket>,
    failure_distribution: Vec<SeriesPoint>,
    top_failing_agents: Vec<SeriesPoint>,
    agent_reliability: Vec<AgentReliability>,
}

impl DataStore {
    /// Builds the store from the embedded fixtures.
    pub fn load() -> Self {
        let anchor = fixture_anchor();
        Self {
            anchor,
            incidents: incidents::build(anchor),
            traces: traces::build(anchor),
            agents: agents::build(anchor),
            policies: policies::build_policies(anchor),
            guardrails: policies::build_guardrails(),
            models: settings::build_models(),
            prompts: settings::build_prompts(anchor),
            org_settings: settings::build_org_settings(),
            incident_metrics: dashboard::incident_metrics(),
            risk_metrics: dashboard::risk_metrics(),
            incidents_over_time: dashboard::incidents_over_time(),
            failure_distribution: dashboard::failure_distribution(),
            top_failing_agents: dashboard::top_failing_agents(),
            agent_reliability: dashboard::agent_reliability(),
        }
    }

    /// Reference instant the fixtures are generated against. Relative ages
    /// in the UI are computed from this anchor so static data never reads
    /// as stale.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn incidents(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.values()
    }

    pub fn incident(&self, id: &str) -> Option<&Incident> {
        self.incidents.get(id)
    }

    pub fn incidents_by_status(&self, status: IncidentStatus) -> Vec<&Incident> {
        self.incidents.values().filter(|i| i.status == status).collect()
    }

    pub fn incidents_by_severity(&self, severity: Severity) -> Vec<&Incident> {
        self.incidents.values().filter(|i| i.severity == severity).collect()
    }

    pub fn traces(&self) -> impl Iterator<Item = &Trace> {
        self.traces.values()
    }

    pub fn trace(&self, id: &str) -> Option<&Trace> {
        self.traces.get(id)
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn guardrails(&self) -> &[Guardrail] {
        &self.guardrails
    }

    pub fn models(&self) -> &[ModelConfig] {
        &self.models
    }

    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    pub fn org_settings(&self) -> &[OrgSetting] {
        &self.org_settings
    }

    pub fn incident_metrics(&self) -> &[Metric] {
        &self.incident_metrics
    }

    pub fn risk_metrics(&self) -> &[Metric] {
        &self.risk_metrics
    }

    pub fn incidents_over_time(&self) -> &[IncidentBucket] {
        &self.incidents_over_time
    }

    pub fn failure_distribution(&self) -> &[SeriesPoint] {
        &self.failure_distribution
    }

    pub fn top_failing_agents(&self) -> &[SeriesPoint] {
        &self.top_failing_agents
    }

    pub fn agent_reliability(&self) -> &[AgentReliability] {
        &self.agent_reliability
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::load()
    }
}

/// Fixed instant all fixture timestamps derive from.
fn fixture_anchor() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 7, 21)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .map(|dt| dt.and_utc())
        .expect("fixture anchor is a valid timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_builds_with_unique_ids() {
        let store = DataStore::load();
        assert_eq!(store.incidents().count(), 25);
        assert!(store.traces().count() >= 20);
        assert_eq!(store.agents().count(), 5);
        // IndexMap keys are unique by construction; make sure ids agree
        for (id, incident) in &store.incidents {
            assert_eq!(id, &incident.id);
        }
        for (id, trace) in &store.traces {
            assert_eq!(id, &trace.id);
        }
    }

    #[test]
    fn fixtures_are_deterministic() {
        let a = DataStore::load();
        let b = DataStore::load();
        let left = serde_json::to_string(&a.incidents.values().collect::<Vec<_>>()).expect("serialize");
        let right = serde_json::to_string(&b.incidents.values().collect::<Vec<_>>()).expect("serialize");
        assert_eq!(left, right);
    }

    #[test]
    fn status_and_severity_filters_partition_the_feed() {
        let store = DataStore::load();
        let by_status: usize = IncidentStatus::ALL.iter().map(|s| store.incidents_by_status(*s).len()).sum();
        assert_eq!(by_status, store.incidents().count());
        let by_severity: usize = Severity::ALL.iter().map(|s| store.incidents_by_severity(*s).len()).sum();
        assert_eq!(by_severity, store.incidents().count());
    }

    #[test]
    fn timestamps_never_postdate_the_anchor() {
        let store = DataStore::load();
        for incident in store.incidents() {
            assert!(incident.first_seen <= incident.last_seen);
            assert!(incident.last_seen <= store.anchor());
        }
        for trace in store.traces() {
            assert!(trace.started_at <= trace.completed_at);
            assert!(trace.completed_at <= store.anchor());
        }
    }
}
