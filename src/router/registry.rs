//! Command registry.
//!
//! A `Registry` maps command names to [`Command`] nodes. It backs both the
//! router's root commands and every node's subcommands. Lookups vastly
//! outnumber mutations, so the map is a sharded `DashMap`; clones share the
//! same underlying map.

use super::command::Command;
use crate::error::RegistryError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt;
use std::sync::Arc;

/// Concurrent name → command map.
#[derive(Clone, Default)]
pub struct Registry {
    commands: Arc<DashMap<String, Arc<Command>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-seeded with `initial`. Later duplicates lose.
    pub fn with_commands<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        let registry = Self::new();
        for command in initial {
            registry.register(command);
        }
        registry
    }

    /// Register a command under its name, unless the name is taken.
    ///
    /// A duplicate is ignored without signalling, so static registration code
    /// can run more than once.
    pub fn register(&self, command: impl Into<Arc<Command>>) {
        let command = command.into();
        if let Entry::Vacant(slot) = self.commands.entry(command.name.clone()) {
            slot.insert(command);
        }
    }

    /// Get a command by name.
    pub fn get(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Replace the command registered under `name`, returning the previous one.
    pub fn update(
        &self,
        name: &str,
        command: impl Into<Arc<Command>>,
    ) -> Result<Arc<Command>, RegistryError> {
        match self.commands.get_mut(name) {
            Some(mut entry) => Ok(std::mem::replace(entry.value_mut(), command.into())),
            None => Err(RegistryError::NotFound(name.to_string())),
        }
    }

    /// Remove a command, returning it if it existed.
    pub fn unregister(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.remove(name).map(|(_, command)| command)
    }

    /// All registered commands, in no particular order.
    pub fn list(&self) -> Vec<Arc<Command>> {
        self.commands.iter().map(|r| Arc::clone(r.value())).collect()
    }

    /// Number of registered commands.
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl FromIterator<Command> for Registry {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::with_commands(iter)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.commands.iter().map(|r| r.key().clone()).collect();
        names.sort();
        f.debug_struct("Registry").field("commands", &names).finish()
    }
}
