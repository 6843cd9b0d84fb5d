//! Agent execution trace fixtures.
//!
//! Every trace follows the same five-stage pipeline the tracing collector
//! records: user input, retrieval, inference, tool call, final output.
//! Step durations and statuses vary per trace index so error and warning
//! paths are represented.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use samix_types::{RunStatus, StepKind, Trace, TraceStep};

use crate::agents::AGENT_NAMES;

const TRACE_COUNT: usize = 24;
const MODEL_VERSIONS: [&str; 4] = ["gpt-4-turbo", "claude-3-opus", "gemini-pro", "llama-3-70b"];

fn steps_for(i: usize, started_at: DateTime<Utc>) -> Vec<TraceStep> {
    let retrieval_status = if i % 10 == 7 { RunStatus::Warning } else { RunStatus::Success };
    let llm_status = if i % 20 == 13 { RunStatus::Error } else { RunStatus::Success };
    let retrieval_ms = 120 + ((i * 31) % 200) as u64;
    let llm_ms = 800 + ((i * 117) % 1500) as u64;
    let tool_ms = 200 + ((i * 59) % 300) as u64;

    let mut at = started_at;
    let mut step = |idx: usize, kind: StepKind, name: &str, duration_ms: u64, status: RunStatus, input: Option<&str>, output: Option<&str>| {
        let s = TraceStep {
            id: format!("step-{idx}"),
            kind,
            name: name.to_string(),
            duration_ms,
            status,
            input: input.map(str::to_string),
            output: output.map(str::to_string),
            timestamp: at,
        };
        at = at + Duration::milliseconds(duration_ms as i64);
        s
    };

    vec![
        step(
            1,
            StepKind::UserInput,
            "User Query Received",
            5,
            RunStatus::Success,
            Some("What are the return policies for my recent order?"),
            None,
        ),
        step(
            2,
            StepKind::RagRetrieval,
            "Document Retrieval",
            retrieval_ms,
            retrieval_status,
            Some("Query embedding generated"),
            Some("Retrieved 5 relevant documents from knowledge base"),
        ),
        step(
            3,
            StepKind::LlmCall,
            "LLM Inference",
            llm_ms,
            llm_status,
            Some("Context + Query prompt constructed"),
            Some("Response generated successfully"),
        ),
        step(
            4,
            StepKind::ToolCall,
            "Order Lookup API",
            tool_ms,
            RunStatus::Success,
            Some("order_id: ORD-12345"),
            Some("Order details retrieved"),
        ),
        step(
            5,
            StepKind::Output,
            "Final Response",
            10,
            RunStatus::Success,
            None,
            Some("Based on your order from 3 days ago, you have 30 days to initiate a return..."),
        ),
    ]
}

pub(crate) fn build(anchor: DateTime<Utc>) -> IndexMap<String, Trace> {
    let mut traces = IndexMap::with_capacity(TRACE_COUNT);
    for i in 0..TRACE_COUNT {
        let started_at = anchor - Duration::minutes((30 + (i * 53) % 2880) as i64);
        let steps = steps_for(i, started_at);
        let duration_ms: u64 = steps.iter().map(|s| s.duration_ms).sum::<u64>() + 40;
        let status = if steps.iter().any(|s| s.status == RunStatus::Error) {
            RunStatus::Error
        } else if steps.iter().any(|s| s.status == RunStatus::Warning) {
            RunStatus::Warning
        } else {
            RunStatus::Success
        };
        let agent_idx = (i * 3 + 1) % AGENT_NAMES.len();

        let id = format!("trace-{:06}", i + 1);
        let trace = Trace {
            id: id.clone(),
            agent_id: format!("agent-{}", agent_idx + 1),
            agent_name: AGENT_NAMES[agent_idx].to_string(),
            model_version: MODEL_VERSIONS[(i * 7 + 2) % MODEL_VERSIONS.len()].to_string(),
            status,
            duration_ms,
            started_at,
            completed_at: started_at + Duration::milliseconds(duration_ms as i64),
            steps,
            user_id: Some(format!("user-{}", (i * 97) % 1000)),
        };
        traces.insert(id, trace);
    }
    traces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_anchor;

    #[test]
    fn traces_follow_the_five_stage_pipeline() {
        let traces = build(fixture_anchor());
        for trace in traces.values() {
            assert_eq!(trace.steps.len(), 5);
            assert_eq!(trace.steps[0].kind, StepKind::UserInput);
            assert_eq!(trace.steps[4].kind, StepKind::Output);
        }
    }

    #[test]
    fn trace_status_aggregates_step_statuses() {
        let traces = build(fixture_anchor());
        assert!(traces.values().any(|t| t.status == RunStatus::Error));
        assert!(traces.values().any(|t| t.status == RunStatus::Warning));
        assert!(traces.values().any(|t| t.status == RunStatus::Success));
        for trace in traces.values() {
            if trace.steps.iter().any(|s| s.status == RunStatus::Error) {
                assert_eq!(trace.status, RunStatus::Error);
            }
        }
    }

    #[test]
    fn step_timestamps_are_monotonic() {
        let traces = build(fixture_anchor());
        for trace in traces.values() {
            for pair in trace.steps.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
        }
    }
}
