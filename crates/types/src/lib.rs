//! Shared type definitions for the Samix governance dashboard.
//!
//! Domain types (incidents, traces, policies, dashboard metrics) are plain
//! serde-enabled data carried by `samix-data`; the `Msg`/`Effect` enums form
//! the message vocabulary of the TUI event loop.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod page;

pub use page::Page;

/// Severity ladder shared by incidents and dashboard rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities in display order, highest first.
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(ParseEnumError::new("severity", "critical, high, medium, low")),
        }
    }
}

/// Lifecycle state of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 3] = [IncidentStatus::Open, IncidentStatus::Investigating, IncidentStatus::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IncidentStatus::Open),
            "investigating" => Ok(IncidentStatus::Investigating),
            "resolved" => Ok(IncidentStatus::Resolved),
            _ => Err(ParseEnumError::new("status", "open, investigating, resolved")),
        }
    }
}

/// Failure category assigned to an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Hallucination,
    RetrievalFailure,
    PolicyViolation,
    Timeout,
    ContextOverflow,
}

impl IncidentKind {
    pub const ALL: [IncidentKind; 5] = [
        IncidentKind::Hallucination,
        IncidentKind::RetrievalFailure,
        IncidentKind::PolicyViolation,
        IncidentKind::Timeout,
        IncidentKind::ContextOverflow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::Hallucination => "hallucination",
            IncidentKind::RetrievalFailure => "retrieval_failure",
            IncidentKind::PolicyViolation => "policy_violation",
            IncidentKind::Timeout => "timeout",
            IncidentKind::ContextOverflow => "context_overflow",
        }
    }

    /// Human-readable label used in tables and charts.
    pub fn label(&self) -> &'static str {
        match self {
            IncidentKind::Hallucination => "Hallucination",
            IncidentKind::RetrievalFailure => "Retrieval Failure",
            IncidentKind::PolicyViolation => "Policy Violation",
            IncidentKind::Timeout => "Timeout",
            IncidentKind::ContextOverflow => "Context Overflow",
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitored AI-agent failure event, aggregated over its occurrences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub kind: IncidentKind,
    pub title: String,
    pub description: String,
    pub agent_id: String,
    pub agent_name: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub event_count: u32,
    pub affected_users: u32,
    #[serde(default)]
    pub root_cause: Option<String>,
}

/// Operational state of a registered agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
    Degraded,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
            AgentStatus::Degraded => "degraded",
        }
    }
}

/// A registered agent and its aggregate execution stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub model_version: String,
    pub status: AgentStatus,
    pub last_active_at: DateTime<Utc>,
    pub total_executions: u64,
    pub failure_rate: f64,
}

/// Outcome of a trace or of a single trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
    Warning,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Error => "error",
            RunStatus::Warning => "warning",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage category within an agent execution trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    UserInput,
    RagRetrieval,
    LlmCall,
    ToolCall,
    Output,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::UserInput => "User Input",
            StepKind::RagRetrieval => "RAG Retrieval",
            StepKind::LlmCall => "LLM Call",
            StepKind::ToolCall => "Tool Call",
            StepKind::Output => "Output",
        }
    }
}

/// One stage of an agent execution trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub id: String,
    pub kind: StepKind,
    pub name: String,
    pub duration_ms: u64,
    pub status: RunStatus,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A complete agent execution, from user input to final output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub id: String,
    pub agent_id: String,
    pub agent_name: String,
    pub model_version: String,
    pub status: RunStatus,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub steps: Vec<TraceStep>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Governance policy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Content,
    Safety,
    Compliance,
    Performance,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Content => "content",
            PolicyKind::Safety => "safety",
            PolicyKind::Compliance => "compliance",
            PolicyKind::Performance => "performance",
        }
    }
}

/// A governance policy evaluated against agent behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub kind: PolicyKind,
    pub violation_count: u32,
    #[serde(default)]
    pub last_triggered: Option<DateTime<Utc>>,
}

/// Direction of a period-over-period metric change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

/// A single headline number on a dashboard, with optional trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub change_pct: Option<f64>,
    #[serde(default)]
    pub direction: Option<ChangeDirection>,
}

/// One day of incident counts broken down by severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentBucket {
    pub name: String,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl IncidentBucket {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// A labeled value for single-series charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

/// Per-agent reliability rollup for the reliability dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReliability {
    pub name: String,
    pub uptime_pct: f64,
    pub success_rate_pct: f64,
    pub avg_latency_s: f64,
}

/// An always-on input/output guardrail, distinct from evaluated policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guardrail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub triggers_today: u32,
}

/// A model configured for use by one or more agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub provider: String,
    pub agents_using: u32,
    pub status: AgentStatus,
}

/// A versioned system prompt bound to a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    pub name: String,
    pub model: String,
    pub version: String,
    pub updated_at: DateTime<Utc>,
}

/// A single toggle on the organization settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSetting {
    pub key: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

/// Error returned when parsing one of the closed string enums fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what}; expected one of: {expected}")]
pub struct ParseEnumError {
    what: &'static str,
    expected: &'static str,
}

impl ParseEnumError {
    fn new(what: &'static str, expected: &'static str) -> Self {
        Self { what, expected }
    }
}

/// Messages that can be sent to update the application state.
///
/// Key and mouse input is routed directly to components; `Msg` carries the
/// remaining loop-driven events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (e.g., throbbers)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects reported by components for the runtime to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire-and-forget request to change the current route.
    Navigate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_round_trip_minimal() {
        let json = r#"{
            "id": "INC-0001",
            "kind": "retrieval_failure",
            "title": "Vector search returned empty results",
            "description": "Detailed analysis.",
            "agent_id": "agent-1",
            "agent_name": "DocumentQA-main",
            "severity": "high",
            "status": "open",
            "first_seen": "2025-05-01T08:30:00Z",
            "last_seen": "2025-05-03T12:00:00Z",
            "event_count": 42,
            "affected_users": 7
        }"#;

        let incident: Incident = serde_json::from_str(json).expect("deserialize Incident");
        assert_eq!(incident.kind, IncidentKind::RetrievalFailure);
        assert_eq!(incident.severity, Severity::High);
        assert!(incident.root_cause.is_none());

        let back = serde_json::to_string(&incident).expect("serialize Incident");
        let incident2: Incident = serde_json::from_str(&back).expect("round-trip deserialize");
        assert_eq!(incident2.id, incident.id);
        assert_eq!(incident2.status, IncidentStatus::Open);
    }

    #[test]
    fn severity_parses_and_rejects() {
        assert_eq!("critical".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("low".parse::<Severity>(), Ok(Severity::Low));
        assert!("urgent".parse::<Severity>().is_err());
    }

    #[test]
    fn status_display_matches_wire_format() {
        for status in IncidentStatus::ALL {
            let wire = serde_json::to_string(&status).expect("serialize status");
            assert_eq!(wire.trim_matches('"'), status.as_str());
        }
    }
}
