//! slashgate - command tree routing for chat-platform bots.
//!
//! Resolves slash-command interactions and prefixed text messages to nested
//! commands and runs them through explicitly-advanced middleware chains.
//!
//! ```ignore
//! use futures_util::FutureExt;
//! use slashgate::{Command, Router, handler_fn, InteractionContext};
//! use slashgate_model::InteractionResponse;
//!
//! let router = Router::new([Command::new("ping")
//!     .with_description("Get bot ping")
//!     .with_handler(handler_fn(|ctx: &mut InteractionContext| {
//!         async move { ctx.respond(InteractionResponse::message("pong")).await }.boxed()
//!     }))]);
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod platform;
pub mod router;
pub mod telemetry;

pub use bot::Bot;
pub use error::{HandlerError, HandlerResult, RegistryError, ResponseError, SyncError};
pub use router::{
    Command, Dispatch, Handler, InteractionContext, MessageContext, Registry, Router, handler_fn,
};
pub use slashgate_model as model;
