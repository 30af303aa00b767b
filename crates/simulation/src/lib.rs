//! Deterministic pulse simulation.
//!
//! This crate provides the dynamic half of the simulator: a strictly
//! FIFO-ordered pulse dispatcher and a driver for repeated trigger
//! events. Given the same configuration and press count, it produces
//! identical results every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Dispatcher (VecDeque<Pulse>, FIFO)             │ │
//! │  │     One settle = trigger pulse + drain to empty    │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Network: modules process pulses sequentially   │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Emissions → enqueued at the queue tail         │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! FIFO ordering is load-bearing: conjunction modules read all remembered
//! inputs synchronously when invoked, so a depth-first (stack-based)
//! drain would produce different intermediate emissions than the
//! reference behavior.

mod dispatcher;
mod runner;

pub use dispatcher::{Dispatcher, PulseStats};
pub use runner::{SeekError, SeekOutcome, SimulationRunner};
