//! Collaborator interfaces.
//!
//! The dispatch core never talks to the platform itself. Handlers reply
//! through a [`ResponseSink`], the message dispatcher learns the bot's own id
//! from an [`IdentitySource`], and schema sync pushes through a
//! [`CommandSyncer`]. Gateway clients (or test fakes) implement these.

use crate::error::{ResponseError, SyncError};
use async_trait::async_trait;
use parking_lot::RwLock;
use slashgate_model::{ApplicationCommand, Interaction, InteractionResponse, User};

/// A plain-text message to post in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Message content.
    pub content: String,
    /// Message this one replies to.
    pub reply_to: Option<String>,
    /// Whether a reply pings the author of the referenced message.
    pub mention_author: bool,
}

impl OutgoingMessage {
    /// A standalone message.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            reply_to: None,
            mention_author: false,
        }
    }

    /// Turn this into a reply to `message_id`.
    pub fn reply_to(mut self, message_id: impl Into<String>, mention_author: bool) -> Self {
        self.reply_to = Some(message_id.into());
        self.mention_author = mention_author;
        self
    }
}

/// Outbound side of the platform, used only by handlers.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    /// Respond to an interaction.
    async fn respond(
        &self,
        interaction: &Interaction,
        response: InteractionResponse,
    ) -> Result<(), ResponseError>;

    /// Post a message to a channel.
    async fn send_message(
        &self,
        channel_id: &str,
        message: OutgoingMessage,
    ) -> Result<(), ResponseError>;
}

/// Supplies the bot's own platform identity.
pub trait IdentitySource: Send + Sync {
    /// The bot user, once known.
    fn current_user(&self) -> Option<User>;

    /// The bot user id, once known.
    fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|u| u.id)
    }
}

/// Identity cache filled from the gateway's ready event.
#[derive(Debug, Default)]
pub struct CurrentUser {
    user: RwLock<Option<User>>,
}

impl CurrentUser {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that already knows the bot user.
    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Replace the cached user.
    pub fn set(&self, user: User) {
        *self.user.write() = Some(user);
    }
}

impl IdentitySource for CurrentUser {
    fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }
}

/// Target of a schema sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope<'a> {
    /// Visible in every guild and in direct messages.
    Global,
    /// Visible in a single guild only; updates apply immediately.
    Guild(&'a str),
}

impl<'a> SyncScope<'a> {
    /// Global when `guild_id` is `None`, otherwise that guild.
    pub fn from_guild(guild_id: Option<&'a str>) -> Self {
        match guild_id {
            Some(id) => Self::Guild(id),
            None => Self::Global,
        }
    }
}

/// Transport for replacing the platform's command schema.
#[async_trait]
pub trait CommandSyncer: Send + Sync {
    /// Replace every command in `scope` with `commands`, returning what the
    /// platform stored.
    async fn bulk_overwrite(
        &self,
        application_id: &str,
        scope: SyncScope<'_>,
        commands: Vec<ApplicationCommand>,
    ) -> Result<Vec<ApplicationCommand>, SyncError>;
}
