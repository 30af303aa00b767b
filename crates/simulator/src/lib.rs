//! Pulse network simulator front end.
//!
//! Thin adapter between the filesystem/CLI surface and the core crates:
//! reads a configuration file, filters blank lines, parses declaration
//! records, and runs either of the two queries over the built network.
//!
//! # Example
//!
//! ```ignore
//! use pulsenet_simulator::{load_network, run_counts, SimulatorConfig};
//!
//! let network = load_network(Path::new("modules.txt"))?;
//! let product = run_counts(network, &SimulatorConfig::default());
//! println!("{product}");
//! ```

mod config;

pub use config::SimulatorConfig;

use pulsenet_core::{ModuleDecl, Network, NetworkError};
use pulsenet_simulation::{SeekError, SeekOutcome, SimulationRunner};
use pulsenet_types::Pulse;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the simulator front end.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed or built.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The target-seek query could not start.
    #[error(transparent)]
    Seek(#[from] SeekError),
}

/// Parse declaration records from configuration text, skipping blank and
/// whitespace-only lines.
pub fn parse_declarations(text: &str) -> Result<Vec<ModuleDecl>, NetworkError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ModuleDecl::parse)
        .collect()
}

/// Read a configuration file and build the network.
pub fn load_network(path: &Path) -> Result<Network, SimulatorError> {
    let text = std::fs::read_to_string(path).map_err(|source| SimulatorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let decls = parse_declarations(&text)?;
    Ok(Network::from_decls(decls)?)
}

/// Fixed-count query: run `config.presses` trigger events and return the
/// product of total LOW and total HIGH pulse counts.
pub fn run_counts(network: Network, config: &SimulatorConfig) -> u64 {
    let mut runner = SimulationRunner::new(network);
    runner.run(config.presses);
    runner.pulse_product()
}

/// Target-seek query: the first press at which `target` receives a LOW
/// pulse, bounded by `config.max_presses`.
///
/// With acceleration enabled, the periodic shortcut is tried first and
/// the exhaustive search is used when the topology does not support it.
pub fn run_seek(
    network: Network,
    target: &str,
    config: &SimulatorConfig,
) -> Result<SeekOutcome, SimulatorError> {
    let mut runner = SimulationRunner::new(network);
    if config.accelerate {
        match runner.seek_low_periodic(target, config.max_presses) {
            Err(SeekError::NoFeedingConjunction(_)) => {
                runner.reset();
                Ok(runner.seek_low(target, config.max_presses)?)
            }
            other => Ok(other?),
        }
    } else {
        Ok(runner.seek_low(target, config.max_presses)?)
    }
}

/// Render the pulse log of a single press as `src -level-> dst` lines,
/// in processing order.
pub fn first_press_log(network: Network) -> Vec<String> {
    let mut runner = SimulationRunner::new(network);
    let mut log: Vec<Pulse> = Vec::new();
    runner.press_with(|pulse| log.push(*pulse));

    let net = runner.network();
    log.iter()
        .map(|p| {
            format!(
                "{} -{}-> {}",
                net.name(p.source),
                p.level,
                net.name(p.destination)
            )
        })
        .collect()
}
