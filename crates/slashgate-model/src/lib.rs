//! # slashgate-model
//!
//! Plain data types describing what a chat platform delivers to a bot and
//! what the bot declares back to it.
//!
//! - [`interaction`]: structured command invocations and their option trees
//! - [`message`]: free-text chat messages and their authors
//! - [`schema`]: the declarative command schema pushed during sync
//! - [`event`]: the envelope a gateway hands to the dispatcher
//!
//! Everything here is transport-agnostic and (de)serializable with serde, so
//! the same types work against a live gateway, a recorded fixture or a test.

#![deny(clippy::all)]
#![warn(missing_docs)]

/// Implements `TryFrom<u8>` / `From<Enum> for u8` for a fieldless enum with
/// explicit discriminants, so serde can use `try_from = "u8", into = "u8"`.
macro_rules! u8_discriminants {
    ($name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl TryFrom<u8> for $name {
            type Error = $crate::UnknownDiscriminant;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::UnknownDiscriminant {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $value,)+
                }
            }
        }
    };
}

pub mod event;
pub mod interaction;
pub mod message;
pub mod schema;

pub use event::GatewayEvent;
pub use interaction::{
    CommandData, Interaction, InteractionKind, InteractionOption, InteractionResponse,
    OptionKind, OptionValue, ResponseKind,
};
pub use message::{Message, User};
pub use schema::{ApplicationCommand, CommandKind, CommandOptionSchema};

/// Error returned when a numeric discriminant does not map to a known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} discriminant: {value}")]
pub struct UnknownDiscriminant {
    /// Name of the enum being decoded.
    pub kind: &'static str,
    /// The rejected value.
    pub value: u8,
}
