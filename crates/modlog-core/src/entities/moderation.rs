//! Moderation case and per-guild log configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A user or channel referenced by a log entry
///
/// `display` is the rendered form (a mention string or name); `id` is the
/// raw snowflake shown in the paired ID field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Snowflake,
    pub display: String,
}

impl Subject {
    pub fn new(id: Snowflake, display: impl Into<String>) -> Self {
        Self {
            id,
            display: display.into(),
        }
    }
}

/// Durable record of one logged moderation action
///
/// Created exactly once per action that reaches persistence; never
/// updated or deleted by this system. `message_id` is None when the
/// channel dispatch failed but the case was still recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationCase {
    pub guild_id: Snowflake,
    /// Per-guild case number, unique and monotonically increasing
    pub number: i64,
    pub message_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl ModerationCase {
    /// Create a new ModerationCase stamped with the current time
    pub fn new(guild_id: Snowflake, number: i64, message_id: Option<Snowflake>) -> Self {
        Self {
            guild_id,
            number,
            message_id,
            created_at: Utc::now(),
        }
    }
}

/// Per-guild moderation log configuration
///
/// Owned by the guild configuration aggregate; this system reads it and
/// advances the counter, nothing more. A `None` log channel means the
/// guild has not opted into moderation logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildLogConfig {
    pub guild_id: Snowflake,
    pub log_channel_id: Option<Snowflake>,
    /// Next case number to allocate; starts at 1
    pub next_case_number: i64,
    /// Guild locale used for label lookup
    pub locale: String,
}

impl GuildLogConfig {
    /// Default locale for guilds that never set one
    pub const DEFAULT_LOCALE: &'static str = "en_us";

    /// Create a config with logging enabled for the given channel
    pub fn enabled(guild_id: Snowflake, log_channel_id: Snowflake) -> Self {
        Self {
            guild_id,
            log_channel_id: Some(log_channel_id),
            next_case_number: 1,
            locale: Self::DEFAULT_LOCALE.to_string(),
        }
    }

    /// Create a config with logging disabled
    pub fn disabled(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            log_channel_id: None,
            next_case_number: 1,
            locale: Self::DEFAULT_LOCALE.to_string(),
        }
    }

    /// Check whether moderation logging is enabled
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.log_channel_id.is_some()
    }
}
