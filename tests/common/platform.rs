//! Recording platform fakes.

use async_trait::async_trait;
use parking_lot::Mutex;
use slashgate::platform::{CommandSyncer, OutgoingMessage, ResponseSink, SyncScope};
use slashgate::{ResponseError, SyncError};
use slashgate_model::{ApplicationCommand, Interaction, InteractionResponse};
use std::sync::Arc;

/// Something a handler sent through the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Response {
        interaction_id: String,
        content: Option<String>,
    },
    Message {
        channel_id: String,
        message: OutgoingMessage,
    },
}

/// Sink that records everything and can be told to fail.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Sent>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    /// Contents of everything sent, in order.
    pub fn contents(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .map(|s| match s {
                Sent::Response { content, .. } => content.clone().unwrap_or_default(),
                Sent::Message { message, .. } => message.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn respond(
        &self,
        interaction: &Interaction,
        response: InteractionResponse,
    ) -> Result<(), ResponseError> {
        if self.fail {
            return Err(ResponseError::Closed);
        }
        self.sent.lock().push(Sent::Response {
            interaction_id: interaction.id.clone(),
            content: response.content,
        });
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: &str,
        message: OutgoingMessage,
    ) -> Result<(), ResponseError> {
        if self.fail {
            return Err(ResponseError::Closed);
        }
        self.sent.lock().push(Sent::Message {
            channel_id: channel_id.to_string(),
            message,
        });
        Ok(())
    }
}

/// One recorded bulk overwrite.
#[derive(Debug, Clone)]
pub struct Overwrite {
    pub application_id: String,
    pub guild_id: Option<String>,
    pub commands: Vec<ApplicationCommand>,
}

/// Syncer that records each call and echoes the commands back.
#[derive(Default)]
pub struct RecordingSyncer {
    calls: Mutex<Vec<Overwrite>>,
}

#[allow(dead_code)]
impl RecordingSyncer {
    pub fn calls(&self) -> Vec<Overwrite> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CommandSyncer for RecordingSyncer {
    async fn bulk_overwrite(
        &self,
        application_id: &str,
        scope: SyncScope<'_>,
        commands: Vec<ApplicationCommand>,
    ) -> Result<Vec<ApplicationCommand>, SyncError> {
        let guild_id = match scope {
            SyncScope::Global => None,
            SyncScope::Guild(id) => Some(id.to_string()),
        };
        self.calls.lock().push(Overwrite {
            application_id: application_id.to_string(),
            guild_id,
            commands: commands.clone(),
        });
        Ok(commands)
    }
}
