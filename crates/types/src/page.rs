//! Route-to-page resolution.
//!
//! The dashboard's router is a plain path string; this module maps it onto
//! the closed set of pages the TUI can display. Detail routes carry the
//! addressed entity id; unknown paths resolve to [`Page::NotFound`] rather
//! than failing.

/// The content page addressed by the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Incident feed, also serving `/incidents` and `/violations`.
    Feed,
    IncidentDetail(String),
    /// Trace table, also serving `/decisions`.
    Traces,
    TraceDetail(String),
    Reliability,
    Risk,
    Policies,
    Guardrails,
    Settings,
    Models,
    NotFound,
}

impl Page {
    /// Resolves a path to a page. Unmatched paths are a valid outcome and
    /// map to [`Page::NotFound`].
    pub fn for_path(path: &str) -> Page {
        match path {
            "" | "/" | "/incidents" | "/violations" => Page::Feed,
            "/traces" | "/decisions" => Page::Traces,
            "/dashboard/reliability" | "/insights/failures" => Page::Reliability,
            "/dashboard/risk" | "/insights/drift" => Page::Risk,
            "/policies" => Page::Policies,
            "/guardrails" => Page::Guardrails,
            "/settings" | "/settings/audit" => Page::Settings,
            "/settings/models" | "/settings/agents" => Page::Models,
            other => {
                if let Some(id) = other.strip_prefix("/incident/").filter(|id| !id.is_empty()) {
                    Page::IncidentDetail(id.to_string())
                } else if let Some(id) = other.strip_prefix("/trace/").filter(|id| !id.is_empty()) {
                    Page::TraceDetail(id.to_string())
                } else {
                    Page::NotFound
                }
            }
        }
    }

    /// Header title for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Feed => "Issues",
            Page::IncidentDetail(_) => "Incident",
            Page::Traces => "Agent Traces",
            Page::TraceDetail(_) => "Trace",
            Page::Reliability => "Reliability",
            Page::Risk => "Risk",
            Page::Policies => "AI Policies",
            Page::Guardrails => "Guardrails",
            Page::Settings => "Settings",
            Page::Models => "Models & Prompts",
            Page::NotFound => "Not Found",
        }
    }

    /// The list route a detail page returns to, if any.
    pub fn parent_path(&self) -> Option<&'static str> {
        match self {
            Page::IncidentDetail(_) => Some("/"),
            Page::TraceDetail(_) => Some("/traces"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_pages() {
        assert_eq!(Page::for_path("/"), Page::Feed);
        assert_eq!(Page::for_path("/incidents"), Page::Feed);
        assert_eq!(Page::for_path("/violations"), Page::Feed);
        assert_eq!(Page::for_path("/decisions"), Page::Traces);
        assert_eq!(Page::for_path("/insights/drift"), Page::Risk);
        assert_eq!(Page::for_path("/settings/audit"), Page::Settings);
    }

    #[test]
    fn detail_routes_carry_ids() {
        assert_eq!(Page::for_path("/incident/INC-0004"), Page::IncidentDetail("INC-0004".into()));
        assert_eq!(Page::for_path("/trace/TRC-0002"), Page::TraceDetail("TRC-0002".into()));
        assert_eq!(Page::for_path("/incident/"), Page::NotFound);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Page::for_path("/nope"), Page::NotFound);
        assert_eq!(Page::for_path("/dashboard"), Page::NotFound);
        assert_eq!(Page::for_path("/settings/unknown"), Page::NotFound);
    }

    #[test]
    fn detail_pages_have_parents() {
        assert_eq!(Page::IncidentDetail("INC-0001".into()).parent_path(), Some("/"));
        assert_eq!(Page::TraceDetail("TRC-0001".into()).parent_path(), Some("/traces"));
        assert_eq!(Page::Feed.parent_path(), None);
    }
}
