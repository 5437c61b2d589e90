//! Structured command interactions.
//!
//! An interaction carries the invoked command name plus a tree of options.
//! When a subcommand is addressed, the top level holds exactly one option of
//! kind [`OptionKind::SubCommand`] or [`OptionKind::SubCommandGroup`] whose
//! own `options` continue the path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of interaction delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InteractionKind {
    /// Liveness probe.
    Ping,
    /// A command was invoked.
    ApplicationCommand,
    /// A button or select menu was used.
    MessageComponent,
    /// The user is typing into an autocomplete option.
    Autocomplete,
    /// A modal dialog was submitted.
    ModalSubmit,
}

u8_discriminants!(InteractionKind {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    Autocomplete = 4,
    ModalSubmit = 5,
});

/// Kind of an option, both in interactions and in the declared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OptionKind {
    /// Selects a plain subcommand.
    SubCommand,
    /// Selects a group that contains further subcommands.
    SubCommandGroup,
    /// Free text.
    String,
    /// Signed integer.
    Integer,
    /// True/false.
    Boolean,
    /// User id.
    User,
    /// Channel id.
    Channel,
    /// Role id.
    Role,
    /// User or role id.
    Mentionable,
    /// Floating point number.
    Number,
    /// Uploaded file id.
    Attachment,
}

u8_discriminants!(OptionKind {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
});

impl OptionKind {
    /// Whether this option addresses a node in the command tree rather than
    /// carrying a value.
    #[inline]
    pub fn is_addressing(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }
}

/// A scalar option value.
///
/// Snowflake-typed options (user, channel, role) arrive as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl OptionValue {
    /// Borrow the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// One node of the option tree supplied with an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOption {
    /// Option name as declared in the schema.
    pub name: String,
    /// Option kind.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Value for non-addressing options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    /// Nested options for subcommands and groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<InteractionOption>,
    /// Whether this option currently has autocomplete focus.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
}

impl InteractionOption {
    /// Build a value-carrying option.
    pub fn value(name: impl Into<String>, kind: OptionKind, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            kind,
            value: Some(value),
            options: Vec::new(),
            focused: false,
        }
    }

    /// Build a subcommand selector with its own options.
    pub fn sub_command(name: impl Into<String>, options: Vec<InteractionOption>) -> Self {
        Self {
            name: name.into(),
            kind: OptionKind::SubCommand,
            value: None,
            options,
            focused: false,
        }
    }

    /// Build a subcommand group selector wrapping exactly one inner selector.
    pub fn group(name: impl Into<String>, inner: InteractionOption) -> Self {
        Self {
            name: name.into(),
            kind: OptionKind::SubCommandGroup,
            value: None,
            options: vec![inner],
            focused: false,
        }
    }
}

/// Payload of an [`InteractionKind::ApplicationCommand`] interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandData {
    /// Platform id of the invoked command.
    #[serde(default)]
    pub id: String,
    /// Name of the invoked root command.
    pub name: String,
    /// Top-level options.
    #[serde(default)]
    pub options: Vec<InteractionOption>,
}

/// An interaction as delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction id.
    pub id: String,
    /// Application the interaction is addressed to.
    #[serde(default)]
    pub application_id: String,
    /// Interaction kind.
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    /// Command payload, present for command invocations.
    #[serde(default)]
    pub data: Option<CommandData>,
    /// Guild the interaction happened in, if any.
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Channel the interaction happened in.
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Continuation token used to respond.
    #[serde(default)]
    pub token: String,
}

impl Interaction {
    /// Build a command interaction with the given name and top-level options.
    pub fn command(
        id: impl Into<String>,
        name: impl Into<String>,
        options: Vec<InteractionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            application_id: String::new(),
            kind: InteractionKind::ApplicationCommand,
            data: Some(CommandData {
                id: String::new(),
                name: name.into(),
                options,
            }),
            guild_id: None,
            channel_id: None,
            token: String::new(),
        }
    }

    /// Command payload, only for command invocations.
    pub fn command_data(&self) -> Option<&CommandData> {
        match self.kind {
            InteractionKind::ApplicationCommand => self.data.as_ref(),
            _ => None,
        }
    }
}

/// How the platform should treat an interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[allow(missing_docs)]
pub enum ResponseKind {
    Pong,
    ChannelMessageWithSource,
    DeferredChannelMessageWithSource,
    DeferredUpdateMessage,
    UpdateMessage,
}

u8_discriminants!(ResponseKind {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredUpdateMessage = 6,
    UpdateMessage = 7,
});

/// A response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    /// Response kind.
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// Message content, when the kind carries a message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Only visible to the invoking user.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ephemeral: bool,
}

impl InteractionResponse {
    /// A plain message shown in the channel the command was used in.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::ChannelMessageWithSource,
            content: Some(content.into()),
            ephemeral: false,
        }
    }

    /// Acknowledge now, follow up later.
    pub fn deferred() -> Self {
        Self {
            kind: ResponseKind::DeferredChannelMessageWithSource,
            content: None,
            ephemeral: false,
        }
    }

    /// Mark the response as visible only to the invoking user.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}
