//! Harvest Scenario Runner - Main Binary
//!
//! Replays a TOML scenario against the producer verification and
//! certification registries and reports every response.

use anyhow::Result;
use clap::{Parser, Subcommand};
use harvest_contracts::Simulator;
use harvest_sim::{RunReport, ScenarioConfig, ScenarioRunner};
use std::path::PathBuf;
use tracing::{error, info};

/// Harvest scenario runner CLI
#[derive(Parser)]
#[command(name = "harvest-sim")]
#[command(about = "Replay registry scenarios against simulated contracts")]
#[command(version)]
struct Cli {
    /// Path to scenario file
    #[arg(short, long, default_value = "scenario.toml", env = "HARVEST_SCENARIO")]
    scenario: PathBuf,

    /// Print one JSON object per step instead of text
    #[arg(long)]
    json: bool,

    /// Print the final registry state as JSON
    #[arg(long)]
    dump_state: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scenario (default)
    Run,

    /// Parse and validate the scenario without running it
    Check,

    /// List deployed contracts and their methods
    Methods,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("warn,harvest_sim={0},harvest_contracts={0}", log_level).into())
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.take().unwrap_or(Command::Run) {
        Command::Methods => {
            for (contract, methods) in Simulator::default().contracts() {
                println!("{}", contract);
                for method in methods {
                    println!("  {}", method);
                }
            }
            Ok(())
        }
        Command::Check => {
            let config = ScenarioConfig::load(&cli.scenario)?;
            config.validate()?;
            println!("{:?}: {} steps OK", cli.scenario, config.steps.len());
            Ok(())
        }
        Command::Run => run(&cli),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ScenarioConfig::load(&cli.scenario)?;
    config.validate()?;
    info!("Loaded scenario from {:?}", cli.scenario);

    let mut runner = ScenarioRunner::new(&config);
    let report = runner.run(&config).map_err(|e| {
        error!("Scenario aborted: {:#}", e);
        e
    })?;

    print_report(&report, cli.json)?;

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(&runner.simulator().snapshot())?);
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} steps did not match expectations",
            report.failure_count(),
            report.outcomes.len()
        );
    }

    Ok(())
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    for outcome in &report.outcomes {
        if json {
            println!("{}", serde_json::to_string(outcome)?);
            continue;
        }

        let status = match (&outcome.expected, outcome.passed()) {
            (None, _) => "    ",
            (Some(_), true) => "PASS",
            (Some(_), false) => "FAIL",
        };
        println!(
            "{} {} [sender={} height={}] -> {}",
            status, outcome.label, outcome.sender, outcome.block_height, outcome.response
        );
        if let (Some(expected), false) = (&outcome.expected, outcome.passed()) {
            println!("       expected {}", expected);
        }
    }

    Ok(())
}
