//! Pulse Network Simulator CLI
//!
//! Builds a module network from a configuration file and runs one of two
//! queries over it.
//!
//! # Example
//!
//! ```bash
//! # Fixed-count query: low * high pulse totals after 1000 presses
//! pulsenet-sim modules.txt
//!
//! # Target-seek query: first press delivering a LOW pulse to rx
//! pulsenet-sim modules.txt --target rx
//!
//! # Same, simulating every press instead of extrapolating
//! pulsenet-sim modules.txt --target rx --brute-force
//! ```

use clap::Parser;
use pulsenet_simulation::SeekOutcome;
use pulsenet_simulator::{
    first_press_log, load_network, run_counts, run_seek, SimulatorConfig, SimulatorError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pulse Network Simulator
///
/// Deterministic discrete-event simulation of a directed signal network.
/// Single-threaded and fully reproducible for a given configuration.
#[derive(Parser, Debug)]
#[command(name = "pulsenet-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the module configuration file
    input: PathBuf,

    /// Number of trigger events for the fixed-count query
    #[arg(short = 'p', long, default_value = "1000")]
    presses: u64,

    /// Run the target-seek query for this module instead of counting
    #[arg(short = 't', long)]
    target: Option<String>,

    /// Press cap for the target-seek query
    #[arg(long, default_value = "100000000")]
    max_presses: u64,

    /// Simulate every press instead of using the periodic shortcut
    #[arg(long)]
    brute_force: bool,

    /// Print the pulse log of the first press before running the query
    #[arg(long)]
    log_pulses: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,pulsenet_simulator=info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, SimulatorError> {
    let network = load_network(&args.input)?;
    info!(modules = network.len(), "built network");

    if args.log_pulses {
        for line in first_press_log(network.clone()) {
            println!("{line}");
        }
    }

    let config = SimulatorConfig::default()
        .with_presses(args.presses)
        .with_max_presses(args.max_presses)
        .with_accelerate(!args.brute_force);

    match args.target {
        Some(target) => match run_seek(network, &target, &config)? {
            SeekOutcome::Found(press) => {
                println!("{press}");
                Ok(ExitCode::SUCCESS)
            }
            SeekOutcome::NotFound => {
                println!(
                    "no low pulse delivered to {target} within {} presses",
                    config.max_presses
                );
                Ok(ExitCode::SUCCESS)
            }
        },
        None => {
            println!("{}", run_counts(network, &config));
            Ok(ExitCode::SUCCESS)
        }
    }
}
