use samix_data::DataStore;
use samix_types::{IncidentStatus, RunStatus, Severity};

#[test]
fn lookups_resolve_known_ids() {
    let store = DataStore::load();
    let first = store.incidents().next().expect("incidents present");
    assert_eq!(store.incident(&first.id).map(|i| i.id.as_str()), Some(first.id.as_str()));

    let trace = store.traces().next().expect("traces present");
    assert_eq!(store.trace(&trace.id).map(|t| t.id.as_str()), Some(trace.id.as_str()));
}

#[test]
fn unknown_ids_return_none() {
    let store = DataStore::load();
    assert!(store.incident("INC-9999").is_none());
    assert!(store.trace("trace-999999").is_none());
}

#[test]
fn filters_select_matching_rows_only() {
    let store = DataStore::load();
    for incident in store.incidents_by_status(IncidentStatus::Open) {
        assert_eq!(incident.status, IncidentStatus::Open);
    }
    for incident in store.incidents_by_severity(Severity::Critical) {
        assert_eq!(incident.severity, Severity::Critical);
    }
}

#[test]
fn dashboard_collections_are_populated() {
    let store = DataStore::load();
    assert_eq!(store.incident_metrics().len(), 4);
    assert_eq!(store.risk_metrics().len(), 4);
    assert_eq!(store.incidents_over_time().len(), 7);
    assert_eq!(store.failure_distribution().len(), 5);
    assert_eq!(store.agent_reliability().len(), 5);
    assert!(!store.policies().is_empty());
    assert!(!store.guardrails().is_empty());
}

#[test]
fn trace_durations_cover_their_steps() {
    let store = DataStore::load();
    for trace in store.traces() {
        let step_total: u64 = trace.steps.iter().map(|s| s.duration_ms).sum();
        assert!(trace.duration_ms >= step_total);
        if trace.status == RunStatus::Success {
            assert!(trace.steps.iter().all(|s| s.status == RunStatus::Success));
        }
    }
}
