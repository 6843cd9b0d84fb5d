//! Dashboard metric and chart fixtures.

use samix_types::{AgentReliability, ChangeDirection, IncidentBucket, Metric, SeriesPoint};

fn metric(label: &str, value: f64, change_pct: Option<f64>, direction: Option<ChangeDirection>) -> Metric {
    Metric {
        label: label.to_string(),
        value,
        change_pct,
        direction,
    }
}

pub(crate) fn incident_metrics() -> Vec<Metric> {
    vec![
        metric("Open Incidents", 12.0, Some(-15.0), Some(ChangeDirection::Decrease)),
        metric("Critical Issues", 3.0, Some(50.0), Some(ChangeDirection::Increase)),
        metric("Avg Resolution Time", 4.2, Some(-20.0), Some(ChangeDirection::Decrease)),
        metric("Affected Agents", 4.0, Some(0.0), None),
    ]
}

pub(crate) fn risk_metrics() -> Vec<Metric> {
    vec![
        metric("Policy Violations (24h)", 7.0, Some(40.0), Some(ChangeDirection::Increase)),
        metric("Hallucination Rate", 2.3, Some(-10.0), Some(ChangeDirection::Decrease)),
        metric("Data Leakage Attempts", 0.0, Some(0.0), None),
        metric("Guardrail Triggers", 156.0, Some(12.0), Some(ChangeDirection::Increase)),
    ]
}

pub(crate) fn incidents_over_time() -> Vec<IncidentBucket> {
    let rows: [(&str, u32, u32, u32, u32); 7] = [
        ("Mon", 2, 3, 2, 1),
        ("Tue", 3, 4, 3, 2),
        ("Wed", 1, 2, 2, 1),
        ("Thu", 4, 5, 4, 2),
        ("Fri", 2, 3, 3, 1),
        ("Sat", 1, 1, 1, 1),
        ("Sun", 0, 1, 1, 1),
    ];
    rows.into_iter()
        .map(|(name, critical, high, medium, low)| IncidentBucket {
            name: name.to_string(),
            critical,
            high,
            medium,
            low,
        })
        .collect()
}

pub(crate) fn failure_distribution() -> Vec<SeriesPoint> {
    let rows: [(&str, f64); 5] = [
        ("Hallucination", 35.0),
        ("Retrieval Failure", 28.0),
        ("Policy Violation", 18.0),
        ("Timeout", 12.0),
        ("Context Overflow", 7.0),
    ];
    rows.into_iter()
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub(crate) fn top_failing_agents() -> Vec<SeriesPoint> {
    let rows: [(&str, f64); 5] = [
        ("CustomerSupport-v2", 23.0),
        ("DocumentQA-main", 18.0),
        ("SalesAssistant-prod", 12.0),
        ("CodeReview-beta", 8.0),
        ("DataAnalyst-v1", 5.0),
    ];
    rows.into_iter()
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub(crate) fn agent_reliability() -> Vec<AgentReliability> {
    let rows: [(&str, f64, f64, f64); 5] = [
        ("CustomerSupport-v2", 99.2, 95.8, 1.2),
        ("SalesAssistant-prod", 99.8, 97.2, 0.9),
        ("DocumentQA-main", 98.5, 94.1, 1.8),
        ("CodeReview-beta", 97.2, 91.5, 2.4),
        ("DataAnalyst-v1", 99.9, 98.7, 0.7),
    ];
    rows.into_iter()
        .map(|(name, uptime_pct, success_rate_pct, avg_latency_s)| AgentReliability {
            name: name.to_string(),
            uptime_pct,
            success_rate_pct,
            avg_latency_s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_series_covers_seven_days() {
        let buckets = incidents_over_time();
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].name, "Mon");
        assert_eq!(buckets[3].total(), 15);
    }

    #[test]
    fn distribution_percentages_sum_to_hundred() {
        let total: f64 = failure_distribution().iter().map(|p| p.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }
}
