//! PostgreSQL implementation of ModerationConfigStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modlog_core::traits::{ModerationConfigStore, PortResult};
use modlog_core::value_objects::Snowflake;
use modlog_core::GuildLogConfig;

use crate::models::GuildLogConfigModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ModerationConfigStore
#[derive(Clone)]
pub struct PgModerationConfigStore {
    pool: PgPool,
}

impl PgModerationConfigStore {
    /// Create a new PgModerationConfigStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<GuildLogConfigModel> for GuildLogConfig {
    fn from(model: GuildLogConfigModel) -> Self {
        GuildLogConfig {
            guild_id: Snowflake::new(model.guild_id),
            log_channel_id: model.log_channel_id.map(Snowflake::new),
            next_case_number: model.next_case_number,
            locale: model.locale,
        }
    }
}

#[async_trait]
impl ModerationConfigStore for PgModerationConfigStore {
    #[instrument(skip(self))]
    async fn get_config(&self, guild_id: Snowflake) -> PortResult<Option<GuildLogConfig>> {
        let result = sqlx::query_as::<_, GuildLogConfigModel>(
            r"
            SELECT guild_id, log_channel_id, next_case_number, locale
            FROM guild_log_config
            WHERE guild_id = $1
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GuildLogConfig::from))
    }

    #[instrument(skip(self))]
    async fn increment_case_number(&self, guild_id: Snowflake) -> PortResult<i64> {
        // Single-statement upsert keeps the read-increment-write atomic
        // across concurrent invocations and process instances. A guild
        // with no prior row starts its counter at 1, so the inserted
        // value is 2: one number consumed, 2 is next.
        let new_counter = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO guild_log_config (guild_id, next_case_number)
            VALUES ($1, 2)
            ON CONFLICT (guild_id)
            DO UPDATE SET next_case_number = guild_log_config.next_case_number + 1
            RETURNING next_case_number
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(new_counter)
    }
}
