use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use poker_sim::holdem::{MonteCarloSim, Scenario};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "simulate")]
#[command(about = "Estimate win probabilities for a poker scenario")]
struct Cli {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Number of hands to simulate
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poker_sim=warn,simulate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let scenario = match Scenario::from_json_file(&cli.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.scenario.display(), e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        game_type = ?scenario.game_type,
        players = scenario.players.len(),
        iterations = cli.iterations,
        "Starting simulation"
    );

    let sim = MonteCarloSim::new(scenario);
    let report = match cli.seed {
        Some(seed) => sim.estimate_with_rng(cli.iterations, &mut StdRng::seed_from_u64(seed)),
        None => sim.estimate(cli.iterations),
    };

    match report {
        Ok(report) => {
            println!("Hands simulated: {}", report.iterations);
            for (label, p) in report.probabilities() {
                println!("{:>10}: {:6.2}%", label, p * 100.0);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
