use std::process::ExitCode;

use metro_planner::cli::{self, Invocation, USAGE};
use metro_planner::loader::load_graph;
use metro_planner::planner::{Planner, PlannerConfig};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Metro file read when `METRO_FILE` is not set.
const DEFAULT_METRO_FILE: &str = "metro.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match Invocation::parse(args.as_slice()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let path = std::env::var("METRO_FILE").unwrap_or_else(|_| DEFAULT_METRO_FILE.to_string());
    let config = walk_cost_from_env().map_or_else(PlannerConfig::default, PlannerConfig::new);

    let graph = match load_graph(&path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to load metro network: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(
        stations = graph.number_of_stations(),
        walk_cost_secs = config.walk_cost_secs,
        "Planner ready"
    );

    let planner = Planner::new(graph, config);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&planner, &invocation, &mut stdout) {
        eprintln!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Walking cost override from `METRO_WALK_COST_SECS`, if set and valid.
fn walk_cost_from_env() -> Option<u32> {
    let raw = std::env::var("METRO_WALK_COST_SECS").ok()?;
    match raw.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!(value = %raw, "Ignoring invalid METRO_WALK_COST_SECS");
            None
        }
    }
}
