//! Command tree resolution.
//!
//! Both resolvers walk down from a root node, collecting middlewares in
//! traversal order, and stop at the addressed leaf. They differ in how they
//! treat an unknown child name:
//!
//! - Interactions come from a declared schema, so an unknown subcommand or
//!   group means the event is not ours: resolution fails.
//! - Text tokens are free-form, so an unknown token is taken as the first
//!   argument of the node reached so far.

use super::command::Command;
use super::context::{InteractionContext, MessageContext};
use super::handler::BoxedHandler;
use slashgate_model::{InteractionOption, OptionKind};
use std::sync::Arc;

/// Outcome of resolving an interaction's option path.
pub struct InteractionRoute<'o> {
    /// The resolved node.
    pub command: Arc<Command>,
    /// Options supplied at the resolved level.
    pub options: &'o [InteractionOption],
    /// Middlewares from root to leaf, then the leaf's handler if it has one.
    pub chain: Vec<BoxedHandler<InteractionContext>>,
}

/// Resolve the node addressed by an interaction.
///
/// `options` are the interaction's top-level options. A leading option of
/// kind subcommand or subcommand group is an addressing token; anything
/// else means the current node is the target.
///
/// Groups only contribute their middlewares, never their handler. A leaf
/// without a handler yields a middleware-only chain.
pub fn resolve_interaction<'o>(
    root: &Arc<Command>,
    options: &'o [InteractionOption],
) -> Option<InteractionRoute<'o>> {
    let mut chain: Vec<BoxedHandler<InteractionContext>> = root.middlewares.clone();
    let mut current = Arc::clone(root);
    let mut options = options;

    loop {
        let Some(selector) = options.first().filter(|o| o.kind.is_addressing()) else {
            chain.extend(current.handler.clone());
            return Some(InteractionRoute {
                command: current,
                options,
                chain,
            });
        };

        let child = current.sub_command(&selector.name)?;
        chain.extend(child.middlewares.iter().cloned());

        match selector.kind {
            OptionKind::SubCommandGroup => {
                current = child;
                options = selector.options.as_slice();
            }
            _ => {
                chain.extend(child.handler.clone());
                return Some(InteractionRoute {
                    command: child,
                    options: selector.options.as_slice(),
                    chain,
                });
            }
        }
    }
}

/// Outcome of resolving a tokenized message.
pub struct MessageRoute<'t, S> {
    /// The resolved node.
    pub command: Arc<Command>,
    /// Tokens not consumed by the command path.
    pub arguments: &'t [S],
    /// Message middlewares from root to leaf, then the leaf's message handler.
    pub chain: Vec<BoxedHandler<MessageContext>>,
}

/// Resolve the node addressed by message tokens.
///
/// `tokens` are the tokens after the root command name. Each token naming a
/// child descends into it; the first token that doesn't stops the descent
/// and, with everything after it, becomes the arguments. Every node on the
/// path contributes its message middlewares exactly once, root first.
///
/// Returns `None` when the resolved node has no message handler.
pub fn resolve_message<'t, S: AsRef<str>>(
    root: &Arc<Command>,
    tokens: &'t [S],
) -> Option<MessageRoute<'t, S>> {
    let mut chain: Vec<BoxedHandler<MessageContext>> = Vec::new();
    let mut current = Arc::clone(root);
    let mut rest = tokens;

    while let Some((token, tail)) = rest.split_first() {
        let Some(child) = current.sub_command(token.as_ref()) else {
            break;
        };
        chain.extend(current.message_middlewares.iter().cloned());
        current = child;
        rest = tail;
    }

    let handler = current.message_handler.clone()?;
    chain.extend(current.message_middlewares.iter().cloned());
    chain.push(handler);

    Some(MessageRoute {
        command: current,
        arguments: rest,
        chain,
    })
}
