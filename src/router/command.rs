//! Command nodes.
//!
//! A [`Command`] is one node of a command tree. It may carry a handler for
//! the interaction path, a handler for the text path, both, or neither (a
//! pure namespace), plus node-local middlewares for each path. Subcommands
//! live in an owned child [`Registry`], so the tree is strictly top-down.

use super::context::{InteractionContext, MessageContext};
use super::handler::{BoxedHandler, Handler};
use super::registry::Registry;
use slashgate_model::{ApplicationCommand, CommandKind, CommandOptionSchema, OptionKind};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A command node.
#[derive(Clone)]
pub struct Command {
    /// Name, unique within the parent registry.
    pub name: String,
    /// Description exported with the schema.
    pub description: String,
    /// Command kind exported with the schema (root commands only).
    pub kind: CommandKind,
    /// Declared value options exported with the schema.
    pub options: Vec<CommandOptionSchema>,
    /// Arbitrary attached payload, never interpreted by the router.
    pub metadata: Option<Arc<dyn Any + Send + Sync>>,
    /// Terminal handler for interactions.
    pub handler: Option<BoxedHandler<InteractionContext>>,
    /// Middlewares run before an interaction handler.
    pub middlewares: Vec<BoxedHandler<InteractionContext>>,
    /// Terminal handler for text messages.
    pub message_handler: Option<BoxedHandler<MessageContext>>,
    /// Middlewares run before a message handler.
    pub message_middlewares: Vec<BoxedHandler<MessageContext>>,
    /// Subcommands.
    pub sub_commands: Option<Registry>,
}

impl Command {
    /// Create a bare command node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind: CommandKind::ChatInput,
            options: Vec::new(),
            metadata: None,
            handler: None,
            middlewares: Vec::new(),
            message_handler: None,
            message_middlewares: Vec::new(),
            sub_commands: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_kind(mut self, kind: CommandKind) -> Self {
        self.kind = kind;
        self
    }

    /// Declare a value option for the exported schema.
    pub fn with_option(mut self, option: CommandOptionSchema) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_metadata<T: Any + Send + Sync>(mut self, metadata: T) -> Self {
        self.metadata = Some(Arc::new(metadata));
        self
    }

    pub fn with_handler(mut self, handler: impl Handler<InteractionContext> + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Append an interaction middleware. Middlewares run in insertion order.
    pub fn with_middleware(mut self, middleware: impl Handler<InteractionContext> + 'static) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn with_message_handler(mut self, handler: impl Handler<MessageContext> + 'static) -> Self {
        self.message_handler = Some(Arc::new(handler));
        self
    }

    /// Append a message middleware. Middlewares run in insertion order.
    pub fn with_message_middleware(
        mut self,
        middleware: impl Handler<MessageContext> + 'static,
    ) -> Self {
        self.message_middlewares.push(Arc::new(middleware));
        self
    }

    /// Register a subcommand, creating the child registry on first use.
    ///
    /// Follows registry semantics: a second subcommand with the same name is
    /// ignored.
    pub fn with_sub_command(mut self, command: Command) -> Self {
        self.sub_commands
            .get_or_insert_with(Registry::new)
            .register(command);
        self
    }

    /// Attach an existing registry as this node's subcommands.
    pub fn with_sub_commands(mut self, registry: Registry) -> Self {
        self.sub_commands = Some(registry);
        self
    }

    /// Downcast the attached metadata.
    pub fn metadata<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.metadata.as_deref()?.downcast_ref()
    }

    /// Look up a direct subcommand. Absent children are not an error.
    pub fn sub_command(&self, name: &str) -> Option<Arc<Command>> {
        self.sub_commands.as_ref()?.get(name)
    }

    /// Whether this node has at least one subcommand.
    pub fn has_sub_commands(&self) -> bool {
        self.sub_commands.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Convert this node into the platform schema.
    ///
    /// Children become subcommands; children that have children of their own
    /// become subcommand groups. Anything nested deeper than group →
    /// subcommand is not representable and is left out. A node with
    /// subcommands exports them instead of its own value options.
    pub fn to_application_command(&self) -> ApplicationCommand {
        let options = if self.has_sub_commands() {
            self.child_schemas(1)
        } else {
            self.options.clone()
        };

        ApplicationCommand {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
            options,
        }
    }

    fn child_schemas(&self, depth: usize) -> Vec<CommandOptionSchema> {
        let Some(registry) = &self.sub_commands else {
            return Vec::new();
        };
        let mut children = registry.list();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
            .iter()
            .map(|child| child.to_option_schema(depth))
            .collect()
    }

    fn to_option_schema(&self, depth: usize) -> CommandOptionSchema {
        if depth < 2 && self.has_sub_commands() {
            CommandOptionSchema {
                kind: OptionKind::SubCommandGroup,
                name: self.name.clone(),
                description: self.description.clone(),
                required: false,
                options: self.child_schemas(depth + 1),
            }
        } else {
            CommandOptionSchema {
                kind: OptionKind::SubCommand,
                name: self.name.clone(),
                description: self.description.clone(),
                required: false,
                options: self.options.clone(),
            }
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("options", &self.options.len())
            .field("handler", &self.handler.is_some())
            .field("middlewares", &self.middlewares.len())
            .field("message_handler", &self.message_handler.is_some())
            .field("message_middlewares", &self.message_middlewares.len())
            .field("sub_commands", &self.sub_commands.as_ref().map(Registry::count))
            .finish()
    }
}
