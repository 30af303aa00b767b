//! Core value types for the pulse network simulator.
//!
//! This crate provides the foundational types shared by the network
//! builder and the simulation runner:
//!
//! - [`Level`]: the binary signal level carried by a pulse
//! - [`Pulse`]: a single signal in flight between two modules
//! - [`ModuleIndex`]: index into the network's module arena

mod level;
mod pulse;

pub use level::Level;
pub use pulse::Pulse;

/// Index into the network's flat module arena.
///
/// Modules reference each other by index rather than by direct ownership,
/// which keeps the (cyclic) module graph representable without reference
/// cycles.
pub type ModuleIndex = u32;

/// Synthetic source index for the external trigger ("button press").
///
/// The trigger is not a real module: it never receives pulses and never
/// appears in a conjunction's input memory. It exists only as the source
/// of the LOW pulse injected into the broadcaster at the start of each
/// settle.
pub const TRIGGER: ModuleIndex = ModuleIndex::MAX;
