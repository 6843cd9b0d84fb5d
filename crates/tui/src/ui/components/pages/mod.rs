//! Routed content pages.

pub mod feed;
pub mod guardrails;
pub mod incident_detail;
pub mod models;
pub mod not_found;
pub mod policies;
pub mod reliability;
pub mod risk;
pub mod settings;
pub mod trace_detail;
pub mod traces;

pub use feed::FeedComponent;
pub use guardrails::GuardrailsComponent;
pub use incident_detail::IncidentDetailComponent;
pub use models::ModelsComponent;
pub use not_found::NotFoundComponent;
pub use policies::PoliciesComponent;
pub use reliability::ReliabilityComponent;
pub use risk::RiskComponent;
pub use settings::SettingsComponent;
pub use trace_detail::TraceDetailComponent;
pub use traces::TracesComponent;
