//! Handlers that record when they run.

use async_trait::async_trait;
use parking_lot::Mutex;
use slashgate::{Handler, HandlerResult, InteractionContext, MessageContext};
use std::sync::Arc;

/// Shared invocation log.
#[derive(Clone, Default)]
pub struct Log(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    /// A middleware: logs `label`, then continues.
    pub fn middleware(&self, label: &str) -> Record {
        Record {
            label: label.to_string(),
            log: self.clone(),
            advance: true,
        }
    }

    /// A terminal handler: logs `label` and stops.
    pub fn terminal(&self, label: &str) -> Record {
        Record {
            label: label.to_string(),
            log: self.clone(),
            advance: false,
        }
    }

    /// A gate: logs `label` and stops without continuing.
    pub fn gate(&self, label: &str) -> Record {
        self.terminal(label)
    }
}

/// Logs its label when run and optionally advances the chain.
pub struct Record {
    label: String,
    log: Log,
    advance: bool,
}

#[async_trait]
impl Handler<InteractionContext> for Record {
    async fn handle(&self, ctx: &mut InteractionContext) -> HandlerResult {
        self.log.push(self.label.clone());
        if self.advance {
            ctx.next().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Handler<MessageContext> for Record {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        self.log.push(self.label.clone());
        if self.advance {
            ctx.next().await?;
        }
        Ok(())
    }
}
