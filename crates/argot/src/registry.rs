//! Command registry.
//!
//! Maps command names to handlers. Each [`App`](crate::App) owns exactly one
//! registry; there is no process-wide command table.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::handler::Handler;

/// Name of the command used when no command is given, and as the dispatch
/// fallback.
pub const DEFAULT_COMMAND: &str = "default";

/// Mapping from unique command name to handler.
///
/// Registering a name that already exists replaces the previous handler.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Handler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any existing handler.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        let name = name.into();
        if self.commands.insert(name.clone(), Box::new(handler)).is_some() {
            debug!(command = %name, "replaced existing handler");
        } else {
            debug!(command = %name, "registered handler");
        }
    }

    /// Returns the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Handler> {
        self.commands.get(name).map(|handler| &**handler)
    }

    /// Returns true if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Returns the registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
