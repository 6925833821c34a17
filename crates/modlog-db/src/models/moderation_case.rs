//! Moderation case database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the moderation_cases table
///
/// (guild_id, number) carries a unique constraint.
#[derive(Debug, Clone, FromRow)]
pub struct ModerationCaseModel {
    pub guild_id: i64,
    pub number: i64,
    /// NULL when the log entry could not be posted to the channel
    pub message_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
