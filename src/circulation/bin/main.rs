use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};
use clap::Parser;
use clap::builder::BoolishValueParser;
use circulation::circulation::controller::{run_scenario, Scenario};
use circulation::gateway::GatewayPublisherVia;
use circulation::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "simulate", version, about = "Replays a library circulation scenario and prints the report")]
struct Args {
    /// Scenario JSON file; read from stdin when omitted.
    path: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, env = "CIRCULATION_LOG_JSON", value_parser = BoolishValueParser::new())]
    json_logs: bool,
}

fn read_scenario(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_tracing(args.json_logs);

    let input = read_scenario(args.path.as_deref())?;
    let scenario: Scenario = serde_json::from_str(input.as_str())?;
    let report = run_scenario(scenario, GatewayPublisherVia::Logs)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
