//! Per-module state machines.

use indexmap::IndexMap;
use pulsenet_types::{Level, ModuleIndex};

/// Type-specific behavior and state of a module.
///
/// A closed set of kinds, matched exhaustively in [`Module::handle`], so
/// an "unknown kind" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// Relays every incoming pulse unchanged to all destinations.
    Broadcaster,

    /// Binary memory, initially off. Inert on HIGH input; on LOW input it
    /// toggles and emits HIGH when now on, LOW when now off.
    FlipFlop {
        /// Current flip state.
        on: bool,
    },

    /// Remembers the last level received from each known input, then
    /// emits LOW when every remembered level is HIGH, else HIGH.
    ///
    /// NAND polarity: "all high" produces a LOW output.
    Conjunction {
        /// Last level seen from each input, keyed by arena index.
        /// The key set is fixed at network build time from the static
        /// edge list; only the levels change afterwards.
        remembered: IndexMap<ModuleIndex, Level>,
    },

    /// Accepts pulses and emits nothing. Used for destination names that
    /// are never declared as modules.
    Terminal,
}

/// A typed node in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique module name.
    pub name: String,
    /// Type-specific state.
    pub behavior: Behavior,
    /// Destination indices, in declared order.
    pub destinations: Vec<ModuleIndex>,
}

impl Module {
    /// Create a module with no destinations resolved yet.
    pub fn new(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            destinations: Vec::new(),
        }
    }

    /// Process an incoming pulse, returning the level to emit to every
    /// destination, or `None` when this module emits nothing.
    ///
    /// State updates happen before the emission level is computed, so the
    /// emission is a pure function of post-update state.
    pub fn handle(&mut self, level: Level, source: ModuleIndex) -> Option<Level> {
        match &mut self.behavior {
            Behavior::Broadcaster => Some(level),

            Behavior::FlipFlop { on } => match level {
                // HIGH is ignored entirely: no toggle, no emission.
                Level::High => None,
                Level::Low => {
                    *on = !*on;
                    Some(if *on { Level::High } else { Level::Low })
                }
            },

            Behavior::Conjunction { remembered } => {
                remembered.insert(source, level);
                if remembered.values().all(|l| l.is_high()) {
                    Some(Level::Low)
                } else {
                    Some(Level::High)
                }
            }

            Behavior::Terminal => None,
        }
    }

    /// Human-readable kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self.behavior {
            Behavior::Broadcaster => "broadcaster",
            Behavior::FlipFlop { .. } => "flip-flop",
            Behavior::Conjunction { .. } => "conjunction",
            Behavior::Terminal => "terminal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_flop(name: &str) -> Module {
        Module::new(name, Behavior::FlipFlop { on: false })
    }

    #[test]
    fn test_broadcaster_relays_level() {
        let mut m = Module::new("broadcaster", Behavior::Broadcaster);
        assert_eq!(m.handle(Level::Low, 0), Some(Level::Low));
        assert_eq!(m.handle(Level::High, 0), Some(Level::High));
    }

    #[test]
    fn test_flip_flop_toggles_on_low() {
        let mut m = flip_flop("a");
        // Alternating LOW inputs produce HIGH, LOW, HIGH, LOW, ...
        assert_eq!(m.handle(Level::Low, 0), Some(Level::High));
        assert_eq!(m.handle(Level::Low, 0), Some(Level::Low));
        assert_eq!(m.handle(Level::Low, 0), Some(Level::High));
        assert_eq!(m.handle(Level::Low, 0), Some(Level::Low));
    }

    #[test]
    fn test_flip_flop_inert_on_high() {
        let mut m = flip_flop("a");
        let before = m.clone();
        assert_eq!(m.handle(Level::High, 0), None);
        assert_eq!(m, before, "HIGH must not change flip state");
    }

    #[test]
    fn test_conjunction_nand_polarity() {
        let mut remembered = IndexMap::new();
        remembered.insert(0, Level::Low);
        remembered.insert(1, Level::Low);
        let mut m = Module::new("con", Behavior::Conjunction { remembered });

        // One input high: not all high, so HIGH out.
        assert_eq!(m.handle(Level::High, 0), Some(Level::High));
        // Both inputs high: LOW out.
        assert_eq!(m.handle(Level::High, 1), Some(Level::Low));
        // One drops back to low: HIGH out again.
        assert_eq!(m.handle(Level::Low, 0), Some(Level::High));
    }

    #[test]
    fn test_conjunction_input_order_does_not_change_level() {
        let mut forward = IndexMap::new();
        forward.insert(0, Level::Low);
        forward.insert(1, Level::Low);
        let mut reverse = IndexMap::new();
        reverse.insert(1, Level::Low);
        reverse.insert(0, Level::Low);

        let mut a = Module::new("con", Behavior::Conjunction { remembered: forward });
        let mut b = Module::new("con", Behavior::Conjunction { remembered: reverse });

        for (level, source) in [(Level::High, 1), (Level::High, 0), (Level::Low, 1)] {
            assert_eq!(a.handle(level, source), b.handle(level, source));
        }
    }

    #[test]
    fn test_terminal_emits_nothing() {
        let mut m = Module::new("sink", Behavior::Terminal);
        assert_eq!(m.handle(Level::Low, 0), None);
        assert_eq!(m.handle(Level::High, 0), None);
    }
}
