//! Simulation driver: repeated trigger events over one network.

use crate::{Dispatcher, PulseStats};
use indexmap::IndexMap;
use num_integer::lcm;
use pulsenet_core::Network;
use pulsenet_types::{ModuleIndex, Pulse};
use thiserror::Error;
use tracing::{debug, info};

/// Result of a target-seek run.
///
/// `NotFound` is a normal outcome, not a fault: some configurations never
/// deliver a LOW pulse to the target, and the seek loop is bounded rather
/// than allowed to spin forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// The 1-indexed press at which the target first received a LOW pulse.
    Found(u64),
    /// The press cap was exhausted without observing the condition.
    NotFound,
}

/// Errors starting a target-seek run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekError {
    /// The target name does not resolve to any module in the network.
    #[error("unknown target module {0:?}")]
    UnknownTarget(String),

    /// The periodic shortcut requires the target to be fed by exactly
    /// one module, and that module to be a conjunction.
    #[error("target module {0:?} is not fed by a single conjunction")]
    NoFeedingConjunction(String),
}

/// Drives repeated trigger events ("button presses") over one network.
///
/// Owns the network and a [`Dispatcher`]; all state needed to reproduce a
/// run lives here, so independent runners never share anything.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    network: Network,
    /// Untouched copy of the network as built, for [`Self::reset`].
    pristine: Network,
    dispatcher: Dispatcher,
    presses: u64,
}

impl SimulationRunner {
    /// Create a runner over a freshly built network.
    pub fn new(network: Network) -> Self {
        Self {
            pristine: network.clone(),
            network,
            dispatcher: Dispatcher::new(),
            presses: 0,
        }
    }

    /// The network in its current (post-simulation) state.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Number of presses executed so far.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &PulseStats {
        self.dispatcher.stats()
    }

    /// Discard all simulation state, restoring the network as built.
    pub fn reset(&mut self) {
        self.network = self.pristine.clone();
        self.dispatcher = Dispatcher::new();
        self.presses = 0;
    }

    /// Execute one press (trigger + full drain).
    pub fn press(&mut self) {
        self.press_with(|_| {});
    }

    /// Execute one press, invoking `observer` for every processed pulse.
    pub fn press_with<F>(&mut self, observer: F)
    where
        F: FnMut(&Pulse),
    {
        self.presses += 1;
        self.dispatcher.settle(&mut self.network, observer);
    }

    /// Execute exactly `presses` settles, accumulating counters.
    pub fn run(&mut self, presses: u64) -> &PulseStats {
        for _ in 0..presses {
            self.press();
        }
        let stats = self.dispatcher.stats();
        info!(
            presses = self.presses,
            low = stats.low,
            high = stats.high,
            product = stats.product(),
            "completed fixed-count run"
        );
        stats
    }

    /// The fixed-count query result: total LOW times total HIGH.
    pub fn pulse_product(&self) -> u64 {
        self.dispatcher.stats().product()
    }

    /// Press until `target` receives a LOW pulse, up to `max_presses`
    /// total presses on this runner.
    ///
    /// Returns the 1-indexed press at which the condition was first
    /// observed, or [`SeekOutcome::NotFound`] once the cap is reached.
    ///
    /// # Errors
    ///
    /// [`SeekError::UnknownTarget`] when `target` names no module.
    pub fn seek_low(&mut self, target: &str, max_presses: u64) -> Result<SeekOutcome, SeekError> {
        let target_idx = self
            .network
            .resolve(target)
            .ok_or_else(|| SeekError::UnknownTarget(target.to_string()))?;

        while self.presses < max_presses {
            let mut hit = false;
            self.press_with(|pulse| {
                if pulse.destination == target_idx && pulse.level.is_low() {
                    hit = true;
                }
            });
            if hit {
                debug!(press = self.presses, target, "target received low pulse");
                return Ok(SeekOutcome::Found(self.presses));
            }
        }
        debug!(max_presses, target, "press cap exhausted");
        Ok(SeekOutcome::NotFound)
    }

    /// Periodic shortcut for the target-seek query.
    ///
    /// Requires the target to be fed exclusively by one conjunction.
    /// Watches each input of that conjunction for the first press at
    /// which it emits HIGH, then combines the observed periods with a
    /// least common multiple instead of simulating every press.
    ///
    /// This assumes each input goes HIGH with a stable period equal to
    /// its first occurrence, which holds for the counter-style networks
    /// this query targets but is not true of arbitrary configurations;
    /// validate against [`Self::seek_low`] on small inputs before
    /// trusting it on a new topology. A direct LOW delivery to the target
    /// observed while sampling wins over the extrapolation.
    ///
    /// # Errors
    ///
    /// [`SeekError::UnknownTarget`] when `target` names no module;
    /// [`SeekError::NoFeedingConjunction`] when the topology precondition
    /// does not hold.
    pub fn seek_low_periodic(
        &mut self,
        target: &str,
        max_presses: u64,
    ) -> Result<SeekOutcome, SeekError> {
        let target_idx = self
            .network
            .resolve(target)
            .ok_or_else(|| SeekError::UnknownTarget(target.to_string()))?;
        let feeder = self
            .network
            .sole_feeding_conjunction(target_idx)
            .ok_or_else(|| SeekError::NoFeedingConjunction(target.to_string()))?;
        let inputs = self.network.inputs_of(feeder);

        let mut first_high: IndexMap<ModuleIndex, u64> = IndexMap::new();
        while self.presses < max_presses {
            let press = self.presses + 1;
            let mut hit = false;
            self.press_with(|pulse| {
                if pulse.destination == feeder && pulse.level.is_high() {
                    first_high.entry(pulse.source).or_insert(press);
                }
                if pulse.destination == target_idx && pulse.level.is_low() {
                    hit = true;
                }
            });
            if hit {
                return Ok(SeekOutcome::Found(self.presses));
            }
            if first_high.len() == inputs.len() {
                let answer = combine_periods(first_high.values().copied());
                debug!(
                    press = self.presses,
                    target, answer, "all feeder inputs observed, extrapolating"
                );
                return Ok(SeekOutcome::Found(answer));
            }
        }
        Ok(SeekOutcome::NotFound)
    }
}

/// Fold independently observed periods into the first press at which they
/// all coincide.
fn combine_periods(periods: impl Iterator<Item = u64>) -> u64 {
    periods.fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_periods() {
        assert_eq!(combine_periods([2u64, 4].into_iter()), 4);
        assert_eq!(combine_periods([3u64, 4].into_iter()), 12);
        assert_eq!(combine_periods([7u64].into_iter()), 7);
        assert_eq!(combine_periods(std::iter::empty()), 1);
    }

    #[test]
    fn test_unknown_target() {
        let network = Network::parse(["broadcaster -> a"]).unwrap();
        let mut runner = SimulationRunner::new(network);
        assert_eq!(
            runner.seek_low("rx", 10),
            Err(SeekError::UnknownTarget("rx".to_string()))
        );
    }

    #[test]
    fn test_periodic_requires_feeding_conjunction() {
        // `a` is fed by the broadcaster, not a conjunction.
        let network = Network::parse(["broadcaster -> a", "%a -> out"]).unwrap();
        let mut runner = SimulationRunner::new(network);
        assert_eq!(
            runner.seek_low_periodic("a", 10),
            Err(SeekError::NoFeedingConjunction("a".to_string()))
        );
    }
}
