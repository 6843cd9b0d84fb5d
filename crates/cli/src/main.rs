use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use samix_data::DataStore;
use samix_types::{Incident, IncidentStatus, Severity};

#[derive(Debug, Parser)]
#[command(name = "samix", version, about = "Terminal governance dashboard for AI agent incidents, traces, and policies")]
struct Cli {
    /// Raise log verbosity to debug
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one of the mock collections to stdout
    Export(ExportArgs),
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Collection to export
    #[arg(value_enum)]
    collection: Collection,

    /// Emit pretty JSON instead of an aligned table
    #[arg(long)]
    json: bool,

    /// Only incidents at this severity (incidents only)
    #[arg(long)]
    severity: Option<Severity>,

    /// Only incidents with this status (incidents only)
    #[arg(long)]
    status: Option<IncidentStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    Incidents,
    Traces,
    Policies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // No subcommand => TUI
    match cli.command {
        None => samix_tui::run().await,
        Some(Command::Export(args)) => run_export(&args),
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let store = DataStore::load();
    match args.collection {
        Collection::Incidents => {
            let incidents = select_incidents(&store, args.severity, args.status);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&incidents)?);
            } else {
                print!("{}", incident_table(&incidents));
            }
        }
        Collection::Traces => {
            let traces: Vec<_> = store.traces().collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&traces)?);
            } else {
                for trace in traces {
                    println!(
                        "{:<14} {:<22} {:<14} {:<8} {:>7}ms  {}",
                        trace.id,
                        trace.agent_name,
                        trace.model_version,
                        trace.status,
                        trace.duration_ms,
                        trace.started_at.format("%Y-%m-%d %H:%M"),
                    );
                }
            }
        }
        Collection::Policies => {
            let policies = store.policies();
            if args.json {
                println!("{}", serde_json::to_string_pretty(policies)?);
            } else {
                for policy in policies {
                    println!(
                        "{:<28} {:<12} {:<9} {:>4} violations",
                        policy.name,
                        policy.kind.as_str(),
                        if policy.enabled { "enabled" } else { "disabled" },
                        policy.violation_count,
                    );
                }
            }
        }
    }
    Ok(())
}

fn select_incidents<'a>(store: &'a DataStore, severity: Option<Severity>, status: Option<IncidentStatus>) -> Vec<&'a Incident> {
    store
        .incidents()
        .filter(|incident| severity.is_none_or(|s| incident.severity == s))
        .filter(|incident| status.is_none_or(|s| incident.status == s))
        .collect()
}

fn incident_table(incidents: &[&Incident]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<9} {:<9} {:<14} {:<18} {:<52} {:<20} {:>6}\n",
        "ID", "SEVERITY", "STATUS", "TYPE", "TITLE", "AGENT", "EVENTS"
    ));
    for incident in incidents {
        out.push_str(&format!(
            "{:<9} {:<9} {:<14} {:<18} {:<52} {:<20} {:>6}\n",
            incident.id,
            incident.severity,
            incident.status,
            incident.kind.as_str(),
            incident.title,
            incident.agent_name,
            incident.event_count,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_and_status_filters_apply() {
        let store = DataStore::load();
        let all = select_incidents(&store, None, None);
        assert_eq!(all.len(), store.incidents().count());

        let critical = select_incidents(&store, Some(Severity::Critical), None);
        assert!(!critical.is_empty());
        assert!(critical.iter().all(|i| i.severity == Severity::Critical));

        let open_critical = select_incidents(&store, Some(Severity::Critical), Some(IncidentStatus::Open));
        assert!(open_critical.len() <= critical.len());
    }

    #[test]
    fn incident_table_has_a_row_per_incident() {
        let store = DataStore::load();
        let incidents = select_incidents(&store, None, None);
        let table = incident_table(&incidents);
        // header plus one line per incident
        assert_eq!(table.lines().count(), incidents.len() + 1);
        assert!(table.starts_with("ID"));
    }

    #[test]
    fn cli_parses_export_flags() {
        let cli = Cli::parse_from(["samix", "export", "incidents", "--json", "--severity", "critical"]);
        match cli.command {
            Some(Command::Export(args)) => {
                assert_eq!(args.collection, Collection::Incidents);
                assert!(args.json);
                assert_eq!(args.severity, Some(Severity::Critical));
                assert_eq!(args.status, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
