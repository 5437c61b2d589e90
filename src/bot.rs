//! Bot facade tying the router to a platform connection.

use crate::config::{MessageConfig, SyncConfig};
use crate::error::SyncError;
use crate::platform::{CommandSyncer, CurrentUser, IdentitySource, ResponseSink};
use crate::router::{Dispatch, MessageHandler, Router};
use slashgate_model::{ApplicationCommand, GatewayEvent};
use std::sync::Arc;
use tracing::info;

/// A router bundled with the sink its handlers reply through and the bot's
/// own identity.
pub struct Bot {
    router: Router,
    sink: Arc<dyn ResponseSink>,
    identity: Arc<CurrentUser>,
    messages: Option<MessageHandler>,
}

impl Bot {
    /// Create a bot with an empty router. Message commands start disabled.
    pub fn new(sink: Arc<dyn ResponseSink>) -> Self {
        Self::with_router(Router::default(), sink)
    }

    /// Create a bot around an existing router.
    pub fn with_router(router: Router, sink: Arc<dyn ResponseSink>) -> Self {
        Self {
            router,
            sink,
            identity: Arc::new(CurrentUser::new()),
            messages: None,
        }
    }

    /// Enable text commands with the given prefix configuration.
    pub fn with_message_commands(mut self, config: MessageConfig) -> Self {
        let identity: Arc<dyn IdentitySource> = self.identity.clone();
        self.messages = Some(self.router.message_handler(config, identity));
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The identity cache filled by [`GatewayEvent::Ready`].
    pub fn identity(&self) -> &Arc<CurrentUser> {
        &self.identity
    }

    /// Handle one gateway event.
    ///
    /// Safe to call concurrently from many tasks; each call owns its
    /// dispatch.
    pub async fn handle_event(&self, event: GatewayEvent) -> Dispatch {
        match event {
            GatewayEvent::Ready { user } => {
                info!(user = %user.username, id = %user.id, "Ready");
                self.identity.set(user);
                Dispatch::Dropped
            }
            GatewayEvent::InteractionCreate(interaction) => {
                self.router
                    .handle_interaction(self.sink.clone(), interaction)
                    .await
            }
            GatewayEvent::MessageCreate(message) => match &self.messages {
                Some(handler) => handler.handle(self.sink.clone(), message).await,
                None => Dispatch::Dropped,
            },
        }
    }

    /// Sync the router's schema using the configured target.
    pub async fn sync(
        &self,
        syncer: &dyn CommandSyncer,
        config: &SyncConfig,
    ) -> Result<Vec<ApplicationCommand>, SyncError> {
        self.router
            .sync(
                syncer,
                self.identity.as_ref(),
                config.application_id.as_deref(),
                config.guild_id.as_deref(),
            )
            .await
    }
}
