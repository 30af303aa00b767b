//! Configuration types for the simulator front end.

/// Configuration for one simulator invocation.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Number of trigger events for the fixed-count query.
    pub presses: u64,

    /// Press cap for the target-seek query. The seek terminates as
    /// not-found once this many presses have been simulated.
    pub max_presses: u64,

    /// Whether the target-seek query may use the periodic shortcut when
    /// the topology allows it.
    pub accelerate: bool,
}

impl SimulatorConfig {
    /// Set the fixed-count press total.
    pub fn with_presses(mut self, presses: u64) -> Self {
        self.presses = presses;
        self
    }

    /// Set the target-seek press cap.
    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }

    /// Enable or disable the periodic shortcut.
    pub fn with_accelerate(mut self, accelerate: bool) -> Self {
        self.accelerate = accelerate;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            presses: 1000,
            max_presses: 100_000_000,
            accelerate: true,
        }
    }
}
