//! Guild log configuration database model

use sqlx::FromRow;

/// Database model for the guild_log_config table
#[derive(Debug, Clone, FromRow)]
pub struct GuildLogConfigModel {
    pub guild_id: i64,
    /// NULL when the guild has not opted into moderation logging
    pub log_channel_id: Option<i64>,
    pub next_case_number: i64,
    pub locale: String,
}
