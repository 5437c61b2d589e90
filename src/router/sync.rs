//! Command schema export and sync.

use super::Router;
use crate::error::SyncError;
use crate::platform::{CommandSyncer, IdentitySource, SyncScope};
use slashgate_model::ApplicationCommand;
use tracing::info;

impl Router {
    /// The platform schema of every root command, sorted by name.
    pub fn schema(&self) -> Vec<ApplicationCommand> {
        let mut commands: Vec<ApplicationCommand> = self
            .list()
            .iter()
            .map(|command| command.to_application_command())
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    /// Replace the platform's commands with this router's schema.
    ///
    /// `application_id` falls back to the bot's own user id. When neither is
    /// known the sync fails with [`SyncError::MissingApplicationId`].
    pub async fn sync(
        &self,
        syncer: &dyn CommandSyncer,
        identity: &dyn IdentitySource,
        application_id: Option<&str>,
        guild_id: Option<&str>,
    ) -> Result<Vec<ApplicationCommand>, SyncError> {
        let application_id = match application_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => identity
                .current_user_id()
                .ok_or(SyncError::MissingApplicationId)?,
        };

        let commands = self.schema();
        let scope = SyncScope::from_guild(guild_id);
        info!(
            application = %application_id,
            scope = ?scope,
            count = commands.len(),
            "Syncing commands"
        );
        syncer.bulk_overwrite(&application_id, scope, commands).await
    }
}
