//! Moderation log coordinator
//!
//! Orchestrates one logged moderation action as an explicit state
//! machine: configured? -> known action? -> allocate case number ->
//! build entry -> dispatch -> persist record. Dispatch failure is
//! isolated so the case record survives a failed channel post; every
//! other failure aborts the remaining steps. Nothing is ever propagated
//! back to the trigger.

use chrono::Utc;
use tracing::{debug, info, instrument};

use modlog_core::{
    ActionCatalog, ActionExtras, LogEntry, LogError, ModerationCase, Snowflake, Subject,
};

use super::context::ServiceContext;
use super::entry::LogEntryBuilder;
use super::sequencer::CaseSequencer;

/// One moderation action to be logged
#[derive(Debug, Clone)]
pub struct LogActionRequest {
    pub guild_id: Snowflake,
    /// Raw action identifier, resolved against the catalog
    pub action: String,
    /// The moderator who performed the action
    pub actor: Subject,
    /// The user (or channel, for clear) the action was taken on
    pub target: Subject,
    pub reason: Option<String>,
    pub extras: ActionExtras,
}

/// Moderation log coordinator
pub struct ModerationLogService {
    ctx: ServiceContext,
    sequencer: CaseSequencer,
}

impl ModerationLogService {
    /// Create a new ModerationLogService
    pub fn new(ctx: ServiceContext) -> Self {
        let sequencer = CaseSequencer::new(ctx.config_store_arc());
        Self { ctx, sequencer }
    }

    /// Log one moderation action
    ///
    /// This is the sole error boundary: failures are reported to the
    /// operational error sink and never returned, so the chat
    /// interaction that triggered the action is unaffected.
    #[instrument(skip(self, request), fields(guild_id = %request.guild_id, action = %request.action))]
    pub async fn log_action(&self, request: LogActionRequest) {
        if let Err(error) = self.try_log(request).await {
            self.ctx.error_sink().report(&error);
        }
    }

    async fn try_log(&self, request: LogActionRequest) -> Result<(), LogError> {
        // Step 1: logging is opt-in; absent or channel-less config is a
        // silent no-op.
        let Some(config) = self.ctx.config_store().get_config(request.guild_id).await? else {
            debug!("no moderation log config, skipping");
            return Ok(());
        };
        let Some(channel_id) = config.log_channel_id else {
            debug!("moderation logging disabled, skipping");
            return Ok(());
        };

        // Step 2: unknown actions are a configuration defect; abort
        // before any side effect.
        let definition = ActionCatalog::resolve(&request.action)
            .ok_or_else(|| LogError::UnknownAction(request.action.clone()))?;

        // Step 3: allocate the case number before dispatch so the footer
        // can display it. From here on the number stays consumed no
        // matter what fails.
        let case_number = self.sequencer.next_case_number(request.guild_id).await?;

        // Step 4: build the entry.
        let fields = LogEntryBuilder::build_fields(
            definition,
            &request.actor,
            &request.target,
            request.reason.as_deref(),
            &request.extras,
        )?;
        let entry = LogEntry {
            title: self.ctx.labels().label(&config.locale, definition.label_key),
            severity: definition.severity,
            fields,
            case_number,
            timestamp: Utc::now(),
        };

        // Step 5: dispatch. Failure is reported but must not prevent the
        // case record from being persisted.
        let message_id = match self.ctx.dispatcher().send_entry(channel_id, &entry).await {
            Ok(id) => Some(id),
            Err(error) => {
                let error = match error {
                    LogError::Dispatch(_) => error,
                    other => LogError::Dispatch(other.to_string()),
                };
                self.ctx.error_sink().report(&error);
                None
            }
        };

        // Step 6: persist the case record. If this fails the case number
        // stays consumed with no durable record, an accepted and logged
        // inconsistency.
        let case = ModerationCase::new(request.guild_id, case_number, message_id);
        self.ctx
            .case_store()
            .create(&case)
            .await
            .map_err(|error| match error {
                LogError::RecordPersist(_) => error,
                other => LogError::RecordPersist(other.to_string()),
            })?;

        info!(case_number, "moderation action logged");
        Ok(())
    }
}
