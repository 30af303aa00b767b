//! Pulses in flight between modules.

use crate::{Level, ModuleIndex};

/// A single signal traveling from one module to another.
///
/// Pulses are created by a module's emission rule (or by the driver when
/// injecting a trigger), consumed exactly once by the dispatcher, and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// The module that emitted this pulse, or [`crate::TRIGGER`].
    pub source: ModuleIndex,
    /// The module that will receive this pulse.
    pub destination: ModuleIndex,
    /// The signal level.
    pub level: Level,
}

impl Pulse {
    /// Create a new pulse.
    pub fn new(source: ModuleIndex, destination: ModuleIndex, level: Level) -> Self {
        Self {
            source,
            destination,
            level,
        }
    }
}
