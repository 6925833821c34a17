//! Ports consumed by the moderation log
//!
//! The domain defines what it needs from configuration storage, case
//! persistence, channel delivery, localization, and operational error
//! reporting; infrastructure crates provide the implementations.

use async_trait::async_trait;

use crate::entities::{GuildLogConfig, LogEntry, ModerationCase};
use crate::error::LogError;
use crate::value_objects::Snowflake;

/// Result type for port operations
pub type PortResult<T> = Result<T, LogError>;

/// Access to per-guild moderation log configuration
#[async_trait]
pub trait ModerationConfigStore: Send + Sync {
    /// Fetch the guild's log configuration, if any exists
    async fn get_config(&self, guild_id: Snowflake) -> PortResult<Option<GuildLogConfig>>;

    /// Atomically advance the guild's case counter, returning the new
    /// counter value
    ///
    /// Concurrent calls for the same guild must each observe a distinct
    /// value; the read-increment-write must be a single atomic operation
    /// against the durable store. For a guild with no prior counter the
    /// first call returns 2 (counter started at 1, one number consumed).
    async fn increment_case_number(&self, guild_id: Snowflake) -> PortResult<i64>;
}

/// Persistence for moderation case records
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Persist a case record; records are never updated or deleted
    async fn create(&self, case: &ModerationCase) -> PortResult<()>;
}

/// Delivery of rendered log entries to a guild channel
#[async_trait]
pub trait LogDispatcher: Send + Sync {
    /// Send the entry to the channel, returning the posted message id
    async fn send_entry(&self, channel_id: Snowflake, entry: &LogEntry) -> PortResult<Snowflake>;
}

/// Opaque localized string lookup for action labels
pub trait LabelResolver: Send + Sync {
    fn label(&self, locale: &str, key: &str) -> String;
}

/// Fire-and-forget sink for operational failures
///
/// The coordinator never surfaces errors to its trigger; everything goes
/// through here.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &LogError);
}
