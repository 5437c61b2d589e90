//! Per-dispatch invocation contexts.
//!
//! A context is created right before its chain starts and dropped when the
//! chain finishes or is abandoned. It is owned by exactly one dispatch; the
//! only control operation is [`next`](InteractionContext::next), which hands
//! the context to the following handler.
//!
//! Handlers can stash derived data for later handlers in `extensions`.

use super::chain::Chain;
use super::command::Command;
use crate::error::{HandlerError, HandlerResult};
use crate::platform::{OutgoingMessage, ResponseSink};
use http::Extensions;
use slashgate_model::{Interaction, InteractionOption, InteractionResponse, Message, OptionValue};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Options of the resolved command level, keyed by name.
pub type OptionsMap = HashMap<String, InteractionOption>;

/// Context passed to interaction handlers.
pub struct InteractionContext {
    /// The triggering interaction.
    pub interaction: Interaction,
    /// The resolved command node.
    pub command: Arc<Command>,
    /// Options supplied at the resolved level.
    pub options: OptionsMap,
    /// The same options in the order the platform sent them.
    pub options_raw: Vec<InteractionOption>,
    /// Data attached by earlier handlers.
    pub extensions: Extensions,
    sink: Arc<dyn ResponseSink>,
    chain: Chain<InteractionContext>,
}

impl InteractionContext {
    /// Create a context; `options` are the resolved level's options.
    pub fn new(
        interaction: Interaction,
        command: Arc<Command>,
        options: Vec<InteractionOption>,
        sink: Arc<dyn ResponseSink>,
        chain: Chain<InteractionContext>,
    ) -> Self {
        Self {
            interaction,
            command,
            options: make_options_map(&options),
            options_raw: options,
            extensions: Extensions::new(),
            sink,
            chain,
        }
    }

    /// Invoke the next handler in the chain.
    ///
    /// Past the end of the chain this does nothing and returns `Ok(())`.
    pub async fn next(&mut self) -> HandlerResult {
        match self.chain.advance() {
            Some(handler) => handler.handle(self).await,
            None => Ok(()),
        }
    }

    /// Handlers not yet invoked.
    pub fn remaining(&self) -> usize {
        self.chain.remaining()
    }

    /// Value of a named option, if supplied.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)?.value.as_ref()
    }

    /// Value of a named option, or [`HandlerError::MissingOption`].
    pub fn require_option(&self, name: &str) -> Result<&OptionValue, HandlerError> {
        self.option(name)
            .ok_or_else(|| HandlerError::MissingOption(name.to_string()))
    }

    /// Respond to the interaction.
    pub async fn respond(&self, response: InteractionResponse) -> HandlerResult {
        self.sink.respond(&self.interaction, response).await?;
        Ok(())
    }

    /// The response sink, for anything beyond [`respond`](Self::respond).
    pub fn sink(&self) -> &Arc<dyn ResponseSink> {
        &self.sink
    }
}

impl fmt::Debug for InteractionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionContext")
            .field("interaction", &self.interaction.id)
            .field("command", &self.command.name)
            .field("options", &self.options_raw)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

fn make_options_map(options: &[InteractionOption]) -> OptionsMap {
    options
        .iter()
        .map(|option| (option.name.clone(), option.clone()))
        .collect()
}

/// Context passed to message handlers.
pub struct MessageContext {
    /// The triggering message.
    pub message: Message,
    /// The resolved command node.
    pub command: Arc<Command>,
    /// Tokens left over after the command path was consumed.
    pub arguments: Vec<String>,
    /// Data attached by earlier handlers.
    pub extensions: Extensions,
    sink: Arc<dyn ResponseSink>,
    chain: Chain<MessageContext>,
}

impl MessageContext {
    pub fn new(
        message: Message,
        command: Arc<Command>,
        arguments: Vec<String>,
        sink: Arc<dyn ResponseSink>,
        chain: Chain<MessageContext>,
    ) -> Self {
        Self {
            message,
            command,
            arguments,
            extensions: Extensions::new(),
            sink,
            chain,
        }
    }

    /// Invoke the next handler in the chain.
    ///
    /// Past the end of the chain this does nothing and returns `Ok(())`.
    pub async fn next(&mut self) -> HandlerResult {
        match self.chain.advance() {
            Some(handler) => handler.handle(self).await,
            None => Ok(()),
        }
    }

    /// Handlers not yet invoked.
    pub fn remaining(&self) -> usize {
        self.chain.remaining()
    }

    /// Argument at position `index`.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Reply to the triggering message, optionally pinging its author.
    pub async fn reply(&self, content: impl Into<String>, mention: bool) -> HandlerResult {
        let outgoing = OutgoingMessage::new(content).reply_to(self.message.id.clone(), mention);
        self.sink
            .send_message(&self.message.channel_id, outgoing)
            .await?;
        Ok(())
    }

    /// Post a plain message in the triggering channel.
    pub async fn send(&self, content: impl Into<String>) -> HandlerResult {
        self.sink
            .send_message(&self.message.channel_id, OutgoingMessage::new(content))
            .await?;
        Ok(())
    }

    /// The response sink, for anything beyond replies.
    pub fn sink(&self) -> &Arc<dyn ResponseSink> {
        &self.sink
    }
}

impl fmt::Debug for MessageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContext")
            .field("message", &self.message.id)
            .field("command", &self.command.name)
            .field("arguments", &self.arguments)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
