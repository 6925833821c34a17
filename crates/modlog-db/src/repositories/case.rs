//! PostgreSQL implementation of CaseStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modlog_core::traits::{CaseStore, PortResult};
use modlog_core::value_objects::Snowflake;
use modlog_core::ModerationCase;

use crate::models::ModerationCaseModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CaseStore
#[derive(Clone)]
pub struct PgCaseStore {
    pool: PgPool,
}

impl PgCaseStore {
    /// Create a new PgCaseStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up a case by guild and number, for audit reference
    #[instrument(skip(self))]
    pub async fn find(
        &self,
        guild_id: Snowflake,
        number: i64,
    ) -> PortResult<Option<ModerationCase>> {
        let result = sqlx::query_as::<_, ModerationCaseModel>(
            r"
            SELECT guild_id, number, message_id, created_at
            FROM moderation_cases
            WHERE guild_id = $1 AND number = $2
            ",
        )
        .bind(guild_id.into_inner())
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ModerationCase::from))
    }
}

impl From<ModerationCaseModel> for ModerationCase {
    fn from(model: ModerationCaseModel) -> Self {
        ModerationCase {
            guild_id: Snowflake::new(model.guild_id),
            number: model.number,
            message_id: model.message_id.map(Snowflake::new),
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl CaseStore for PgCaseStore {
    #[instrument(skip(self, case), fields(guild_id = %case.guild_id, number = case.number))]
    async fn create(&self, case: &ModerationCase) -> PortResult<()> {
        sqlx::query(
            r"
            INSERT INTO moderation_cases (guild_id, number, message_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(case.guild_id.into_inner())
        .bind(case.number)
        .bind(case.message_id.map(Snowflake::into_inner))
        .bind(case.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
