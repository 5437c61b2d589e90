//! Command routing core.
//!
//! This module contains the command tree, its registry, the resolvers that
//! find the addressed node, and the contexts that carry a dispatch through
//! its middleware chain.
//!
//! ## Dispatch
//!
//! ```text
//! event ─► root lookup ─► resolve (collect middlewares) ─► context ─► next()
//! ```
//!
//! Each stage may drop the event; a drop is silent because most events are
//! simply not for us. Once the chain runs, each handler decides whether to
//! continue by calling `ctx.next()`.

pub mod chain;
pub mod command;
pub mod context;
pub mod handler;
pub mod message;
pub mod registry;
pub mod resolve;
mod sync;

pub use chain::Chain;
pub use command::Command;
pub use context::{InteractionContext, MessageContext, OptionsMap};
pub use handler::{BoxedHandler, Handler, HandlerFn, handler_fn};
pub use message::MessageHandler;
pub use registry::Registry;
pub use resolve::{InteractionRoute, MessageRoute, resolve_interaction, resolve_message};

use crate::config::MessageConfig;
use crate::error::{HandlerResult, RegistryError};
use crate::platform::{IdentitySource, ResponseSink};
use crate::telemetry::spans;
use slashgate_model::Interaction;
use std::sync::Arc;
use tracing::{Instrument, debug, info, trace};

/// What happened to a dispatched event.
#[derive(Debug)]
pub enum Dispatch {
    /// The event did not address a runnable command.
    Dropped,
    /// A chain ran; carries what its first handler returned.
    Handled(HandlerResult),
}

impl Dispatch {
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped)
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Stores root commands and routes interactions to them.
///
/// Cloning is cheap and clones share the same commands.
#[derive(Debug, Clone, Default)]
pub struct Router {
    commands: Registry,
}

impl Router {
    /// Create a router from a set of predefined commands.
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        let commands = Registry::with_commands(initial);
        info!(count = commands.count(), "Router seeded");
        Self { commands }
    }

    /// The root command registry.
    pub fn commands(&self) -> &Registry {
        &self.commands
    }

    /// Register a root command; duplicates are ignored.
    pub fn register(&self, command: impl Into<Arc<Command>>) {
        self.commands.register(command);
    }

    pub fn get(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.get(name)
    }

    /// Replace a root command, returning the previous one.
    pub fn update(
        &self,
        name: &str,
        command: impl Into<Arc<Command>>,
    ) -> Result<Arc<Command>, RegistryError> {
        self.commands.update(name, command)
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.unregister(name)
    }

    pub fn list(&self) -> Vec<Arc<Command>> {
        self.commands.list()
    }

    pub fn count(&self) -> usize {
        self.commands.count()
    }

    /// Build a text command dispatcher over this router's commands.
    pub fn message_handler(
        &self,
        config: MessageConfig,
        identity: Arc<dyn IdentitySource>,
    ) -> MessageHandler {
        MessageHandler::new(self.clone(), config, identity)
    }

    /// Route an interaction and run its chain.
    ///
    /// Non-command interactions, unknown commands and unknown subcommand
    /// paths are dropped.
    pub async fn handle_interaction(
        &self,
        sink: Arc<dyn ResponseSink>,
        interaction: Interaction,
    ) -> Dispatch {
        let (command, options, chain) = {
            let Some(data) = interaction.command_data() else {
                trace!(kind = ?interaction.kind, "Ignoring non-command interaction");
                return Dispatch::Dropped;
            };

            let Some(root) = self.commands.get(&data.name) else {
                trace!(command = %data.name, "Dropping interaction for unknown command");
                return Dispatch::Dropped;
            };

            let Some(InteractionRoute {
                command,
                options,
                chain,
            }) = resolve_interaction(&root, &data.options)
            else {
                trace!(command = %data.name, "Dropping interaction for unknown subcommand");
                return Dispatch::Dropped;
            };

            (command, options.to_vec(), chain)
        };

        let span = spans::interaction(&command.name, &interaction.id);
        let name = command.name.clone();
        let mut ctx = InteractionContext::new(interaction, command, options, sink, Chain::new(chain));

        let result = ctx.next().instrument(span).await;
        if let Err(ref e) = result {
            debug!(command = %name, error = %e, error_kind = e.error_code(), "Command error");
        }
        Dispatch::Handled(result)
    }
}
