//! Free-text chat messages.

use serde::{Deserialize, Serialize};

/// A platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id (snowflake).
    pub id: String,
    /// Display username.
    pub username: String,
    /// Whether the account is a bot.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Create a human user.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            bot: false,
        }
    }

    /// The plain mention form, `<@ID>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// A message posted in a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message id.
    pub id: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Guild the channel belongs to, absent for direct messages.
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Message author.
    pub author: User,
    /// Raw text content.
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Create a message with the given content.
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        author: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            guild_id: None,
            author,
            content: content.into(),
        }
    }
}
