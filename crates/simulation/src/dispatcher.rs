//! FIFO pulse dispatcher.

use pulsenet_core::Network;
use pulsenet_types::{Level, Pulse, TRIGGER};
use std::collections::VecDeque;
use tracing::trace;

/// Pulse counters for one simulation.
///
/// An explicit context object rather than process-global state, so
/// independent simulations can run side by side in tests. Counters are
/// monotonic across the whole run and count every dequeued pulse,
/// regardless of the destination's kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PulseStats {
    /// Total LOW pulses processed.
    pub low: u64,
    /// Total HIGH pulses processed.
    pub high: u64,
}

impl PulseStats {
    /// Total pulses processed.
    pub fn total(&self) -> u64 {
        self.low + self.high
    }

    /// Product of LOW and HIGH totals, the fixed-count query result.
    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

/// Processes pulses in strict arrival order.
///
/// A settle begins when the trigger pulse is enqueued and ends when the
/// queue is empty. Each dequeued pulse is fully handled (counters
/// incremented, destination state updated, fan-out enqueued at the tail)
/// before the next pulse is dequeued. The queue is FIFO, never a stack.
#[derive(Debug, Default, Clone)]
pub struct Dispatcher {
    queue: VecDeque<Pulse>,
    stats: PulseStats,
}

impl Dispatcher {
    /// Create a dispatcher with an empty queue and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &PulseStats {
        &self.stats
    }

    /// Run one settle: inject the trigger pulse (LOW to the broadcaster)
    /// and drain the queue to empty.
    ///
    /// The observer is invoked exactly once per dequeued pulse, after the
    /// counters are incremented and before the destination module
    /// processes it. It must not alter queue semantics; it exists so the
    /// driver can watch for a target condition.
    pub fn settle<F>(&mut self, network: &mut Network, mut observer: F)
    where
        F: FnMut(&Pulse),
    {
        debug_assert!(self.queue.is_empty(), "settle starts from an empty queue");
        self.queue
            .push_back(Pulse::new(TRIGGER, network.broadcaster(), Level::Low));

        while let Some(pulse) = self.queue.pop_front() {
            match pulse.level {
                Level::Low => self.stats.low += 1,
                Level::High => self.stats.high += 1,
            }
            observer(&pulse);
            trace!(
                source = pulse.source,
                destination = pulse.destination,
                level = %pulse.level,
                "pulse"
            );

            let module = network.module_mut(pulse.destination);
            if let Some(level) = module.handle(pulse.level, pulse.source) {
                for &dest in &module.destinations {
                    self.queue
                        .push_back(Pulse::new(pulse.destination, dest, level));
                }
            }
        }
    }
}
