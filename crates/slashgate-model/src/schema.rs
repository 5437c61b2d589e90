//! Declarative command schema.
//!
//! This is what gets bulk-overwritten on the platform during a sync. Only two
//! levels of nesting are representable: a root command may hold subcommand
//! groups, and a group may hold subcommands.

use crate::OptionKind;
use serde::{Deserialize, Serialize};

/// Where a command shows up in the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CommandKind {
    /// Typed as `/name` in the chat input.
    #[default]
    ChatInput,
    /// Right-click menu on a user.
    User,
    /// Right-click menu on a message.
    Message,
}

u8_discriminants!(CommandKind {
    ChatInput = 1,
    User = 2,
    Message = 3,
});

/// A declared option (parameter, subcommand or group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOptionSchema {
    /// Option kind.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Option name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the option must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Nested options of a subcommand or group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSchema>,
}

impl CommandOptionSchema {
    /// Declare a value option.
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
            options: Vec::new(),
        }
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A root command as declared to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    /// Platform-assigned id, absent before the first sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Command name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Command kind.
    #[serde(rename = "type", default)]
    pub kind: CommandKind,
    /// Top-level options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSchema>,
}
