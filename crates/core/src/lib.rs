//! Module state machines and network builder.
//!
//! This crate provides the static half of the simulator:
//!
//! - [`ModuleDecl`]: a parsed module declaration line
//! - [`Module`] / [`Behavior`]: per-module state machines
//! - [`Network`]: the owning arena of all modules, with name resolution
//! - [`NetworkError`]: failures while parsing or building a network
//!
//! # Architecture
//!
//! Modules are:
//! - **Synchronous**: no async, no `.await`
//! - **Deterministic**: same state + pulse = same emission
//! - **Pure-ish**: mutate self, but perform no I/O
//!
//! The module graph may contain cycles (a module's output can eventually
//! reach its own input), so the [`Network`] owns all modules in a flat
//! arena and relationships are expressed as [`pulsenet_types::ModuleIndex`]
//! values rather than direct references.

mod decl;
mod error;
mod module;
mod network;

pub use decl::{DeclKind, ModuleDecl, BROADCASTER};
pub use error::NetworkError;
pub use module::{Behavior, Module};
pub use network::Network;
