//! The module graph: a flat owning arena with name resolution.

use crate::{Behavior, DeclKind, Module, ModuleDecl, NetworkError, BROADCASTER};
use indexmap::IndexMap;
use pulsenet_types::{Level, ModuleIndex, TRIGGER};

/// Name reported for the synthetic trigger source in logs.
const TRIGGER_NAME: &str = "button";

/// All modules of one configuration, owned in a flat arena.
///
/// The graph may be cyclic, so modules reference each other by
/// [`ModuleIndex`] into the arena rather than by direct reference.
/// Construction is one-shot: the edge list (and every conjunction's input
/// set) is fixed once [`Network::from_decls`] returns.
#[derive(Debug, Clone)]
pub struct Network {
    /// Module arena. Declared modules first, in declaration order,
    /// followed by implicit terminals in first-reference order.
    modules: Vec<Module>,
    /// Name to arena index.
    index: IndexMap<String, ModuleIndex>,
    /// Index of the entry-point module.
    broadcaster: ModuleIndex,
}

impl Network {
    /// Parse declaration lines and build the network.
    ///
    /// Convenience over [`ModuleDecl::parse`] + [`Network::from_decls`].
    pub fn parse<'a, I>(lines: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let decls = lines
            .into_iter()
            .map(ModuleDecl::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_decls(decls)
    }

    /// Build a network from an ordered sequence of declarations.
    ///
    /// Any destination name that is never declared is materialized as a
    /// [`Behavior::Terminal`] module with no destinations. Every
    /// conjunction's input memory is seeded with one LOW entry per module
    /// whose destination list includes it.
    ///
    /// # Errors
    ///
    /// [`NetworkError::MissingBroadcaster`] when no module is named
    /// `broadcaster`.
    pub fn from_decls(decls: Vec<ModuleDecl>) -> Result<Self, NetworkError> {
        let mut modules = Vec::with_capacity(decls.len());
        let mut index = IndexMap::with_capacity(decls.len());

        for decl in &decls {
            let behavior = match decl.kind {
                DeclKind::Broadcaster => Behavior::Broadcaster,
                DeclKind::FlipFlop => Behavior::FlipFlop { on: false },
                DeclKind::Conjunction => Behavior::Conjunction {
                    remembered: IndexMap::new(),
                },
                DeclKind::Terminal => Behavior::Terminal,
            };
            index.insert(decl.name.clone(), modules.len() as ModuleIndex);
            modules.push(Module::new(decl.name.clone(), behavior));
        }

        // Materialize implicit terminals for undeclared destinations.
        for decl in &decls {
            for dest in &decl.destinations {
                if !index.contains_key(dest.as_str()) {
                    index.insert(dest.clone(), modules.len() as ModuleIndex);
                    modules.push(Module::new(dest.clone(), Behavior::Terminal));
                }
            }
        }

        // Resolve destination names to arena indices.
        for (i, decl) in decls.iter().enumerate() {
            modules[i].destinations = decl
                .destinations
                .iter()
                .map(|d| index[d.as_str()])
                .collect();
        }

        // Seed conjunction input memory from the graph's reverse edges.
        for src in 0..modules.len() {
            let dests = modules[src].destinations.clone();
            for dst in dests {
                if let Behavior::Conjunction { remembered } = &mut modules[dst as usize].behavior {
                    remembered.insert(src as ModuleIndex, Level::Low);
                }
            }
        }

        let broadcaster = index
            .get(BROADCASTER)
            .copied()
            .ok_or(NetworkError::MissingBroadcaster)?;

        Ok(Self {
            modules,
            index,
            broadcaster,
        })
    }

    /// Number of modules in the arena, implicit terminals included.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the network has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Index of the entry-point module.
    pub fn broadcaster(&self) -> ModuleIndex {
        self.broadcaster
    }

    /// Look up a module by name.
    pub fn resolve(&self, name: &str) -> Option<ModuleIndex> {
        self.index.get(name).copied()
    }

    /// The module at `idx`.
    pub fn module(&self, idx: ModuleIndex) -> &Module {
        &self.modules[idx as usize]
    }

    /// Mutable access to the module at `idx`.
    pub fn module_mut(&mut self, idx: ModuleIndex) -> &mut Module {
        &mut self.modules[idx as usize]
    }

    /// Name of the module at `idx`. The trigger sentinel renders as
    /// `"button"`.
    pub fn name(&self, idx: ModuleIndex) -> &str {
        if idx == TRIGGER {
            TRIGGER_NAME
        } else {
            &self.modules[idx as usize].name
        }
    }

    /// Iterate over all modules in arena order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Indices of all modules whose destination list includes `idx`, in
    /// arena order.
    pub fn inputs_of(&self, idx: ModuleIndex) -> Vec<ModuleIndex> {
        (0..self.modules.len() as ModuleIndex)
            .filter(|&src| self.modules[src as usize].destinations.contains(&idx))
            .collect()
    }

    /// The single conjunction feeding `idx`, when exactly one module
    /// feeds it and that module is a conjunction.
    ///
    /// This is the topology precondition for the periodic seek shortcut.
    pub fn sole_feeding_conjunction(&self, idx: ModuleIndex) -> Option<ModuleIndex> {
        let inputs = self.inputs_of(idx);
        match inputs.as_slice() {
            [only] => {
                let only = *only;
                matches!(
                    self.modules[only as usize].behavior,
                    Behavior::Conjunction { .. }
                )
                .then_some(only)
            }
            _ => None,
        }
    }
}
