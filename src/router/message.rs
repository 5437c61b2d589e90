//! Text command dispatch.
//!
//! A message is a command when its content starts with one of the configured
//! prefixes or, when enabled, with a mention of the bot (`<@ID>` or
//! `<@!ID>`). The prefix and any whitespace after it are stripped, the rest is
//! split on the delimiter, and the first token names the root command.

use super::chain::Chain;
use super::context::MessageContext;
use super::resolve::{MessageRoute, resolve_message};
use super::{Dispatch, Router};
use crate::config::MessageConfig;
use crate::platform::{IdentitySource, ResponseSink};
use crate::telemetry::spans;
use slashgate_model::Message;
use std::sync::Arc;
use tracing::{Instrument, debug, trace};

/// Strip the longest matching prefix and the whitespace after it.
///
/// `bot_id` enables the two mention forms for that id. Returns `None` when
/// nothing matches.
pub fn strip_prefix<'c>(content: &'c str, prefixes: &[String], bot_id: Option<&str>) -> Option<&'c str> {
    let mentions = bot_id
        .map(|id| [format!("<@{id}>"), format!("<@!{id}>")])
        .into_iter()
        .flatten();

    let matched = prefixes
        .iter()
        .cloned()
        .chain(mentions)
        .filter(|p| !p.is_empty() && content.starts_with(p.as_str()))
        .max_by_key(String::len)?;

    Some(content[matched.len()..].trim_start())
}

/// Split the text after the prefix into tokens, skipping empty ones.
///
/// An empty delimiter splits on whitespace.
pub fn tokenize<'c>(rest: &'c str, delimiter: &str) -> Vec<&'c str> {
    if delimiter.is_empty() {
        return rest.split_whitespace().collect();
    }
    rest.split(delimiter).filter(|t| !t.is_empty()).collect()
}

/// Dispatches message events to text command handlers.
pub struct MessageHandler {
    router: Router,
    config: MessageConfig,
    identity: Arc<dyn IdentitySource>,
}

impl MessageHandler {
    /// Create a handler over `router`'s commands.
    pub fn new(router: Router, config: MessageConfig, identity: Arc<dyn IdentitySource>) -> Self {
        Self {
            router,
            config,
            identity,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &MessageConfig {
        &self.config
    }

    /// Route a message and run its chain.
    ///
    /// Messages that are not commands, or address unknown commands, or resolve
    /// to a node without a message handler are dropped.
    pub async fn handle(&self, sink: Arc<dyn ResponseSink>, message: Message) -> Dispatch {
        let bot_id = if self.config.mention_prefix {
            self.identity.current_user_id()
        } else {
            None
        };

        let (command, arguments, chain) = {
            let Some(rest) =
                strip_prefix(&message.content, &self.config.prefixes, bot_id.as_deref())
            else {
                return Dispatch::Dropped;
            };

            let tokens = tokenize(rest, &self.config.delimiter);
            let Some((name, tail)) = tokens.split_first() else {
                return Dispatch::Dropped;
            };

            let Some(root) = self.router.get(name) else {
                trace!(command = %name, "Dropping message for unknown command");
                return Dispatch::Dropped;
            };

            let Some(MessageRoute {
                command,
                arguments,
                chain,
            }) = resolve_message(&root, tail)
            else {
                trace!(command = %name, "Dropping message for command without message handler");
                return Dispatch::Dropped;
            };

            let arguments: Vec<String> = arguments.iter().map(|s| (*s).to_owned()).collect();
            (command, arguments, chain)
        };

        let span = spans::message(&command.name, &message.channel_id, &message.author.id);
        let name = command.name.clone();
        let mut ctx = MessageContext::new(message, command, arguments, sink, Chain::new(chain));

        let result = ctx.next().instrument(span).await;
        if let Err(ref e) = result {
            debug!(command = %name, error = %e, error_kind = e.error_code(), "Message command error");
        }
        Dispatch::Handled(result)
    }
}
