//! Log entry builder
//!
//! Produces the ordered field list for one moderation action by starting
//! from the base field set (User, User ID, Reason, Responsible Moderator,
//! Moderator ID) and applying the action's field shape.

use modlog_core::{ActionDefinition, ActionExtras, FieldShape, LogError, LogField, Subject};

/// Placeholder used when the moderator gave no reason
pub const NO_REASON: &str = "No reason given";

/// Builds the display fields of a log entry
pub struct LogEntryBuilder;

impl LogEntryBuilder {
    /// Build the ordered field list for the given action
    ///
    /// Fails fast with `MalformedExtras` when the action's shape requires
    /// an extras field the caller did not supply; a field is never
    /// silently omitted.
    pub fn build_fields(
        definition: &ActionDefinition,
        actor: &Subject,
        target: &Subject,
        reason: Option<&str>,
        extras: &ActionExtras,
    ) -> Result<Vec<LogField>, LogError> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(NO_REASON);

        let mut fields = vec![
            LogField::inline("User", &target.display),
            LogField::inline("User ID", target.id.to_string()),
            LogField::block("Reason", reason),
            LogField::inline("Responsible Moderator", &actor.display),
            LogField::inline("Moderator ID", actor.id.to_string()),
        ];

        match definition.shape {
            FieldShape::Base => {}
            FieldShape::PrependRole => {
                let role = required(extras.role_name.as_deref(), definition, "role_name")?;
                fields.insert(0, LogField::block("Role", role));
            }
            FieldShape::InsertChannelBeforeModerator => {
                let channel = required(extras.channel.as_deref(), definition, "channel")?;
                // Immediately before the Responsible Moderator / Moderator
                // ID pair
                let at = fields.len() - 2;
                fields.insert(at, LogField::block("Channel", channel));
            }
            FieldShape::ReplaceWithChannel => {
                let cleared = extras.cleared.ok_or(LogError::MalformedExtras {
                    action: definition.action.id(),
                    field: "cleared",
                })?;
                // The target is the channel here, not a user
                fields.splice(
                    0..3,
                    [
                        LogField::inline("Channel", &target.display),
                        LogField::inline("Channel ID", target.id.to_string()),
                        LogField::block("Cleared", cleared.to_string()),
                    ],
                );
            }
            FieldShape::ReplaceModeratorWithReporter => {
                let at = fields.len() - 2;
                fields.splice(
                    at..,
                    [
                        LogField::inline("Reporter", &actor.display),
                        LogField::inline("Reporter ID", actor.id.to_string()),
                    ],
                );
            }
        }

        Ok(fields)
    }
}

fn required<'a>(
    value: Option<&'a str>,
    definition: &ActionDefinition,
    field: &'static str,
) -> Result<&'a str, LogError> {
    value.ok_or(LogError::MalformedExtras {
        action: definition.action.id(),
        field,
    })
}
