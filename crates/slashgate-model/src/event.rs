//! Gateway event envelope.

use crate::{Interaction, Message, User};
use serde::{Deserialize, Serialize};

/// The subset of gateway events the dispatcher consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "d", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEvent {
    /// Session established; carries the bot's own user.
    Ready {
        /// The bot user.
        user: User,
    },
    /// A user invoked something that produced an interaction.
    InteractionCreate(Interaction),
    /// A message was posted in a visible channel.
    MessageCreate(Message),
}
