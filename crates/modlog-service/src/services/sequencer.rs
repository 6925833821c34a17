//! Case sequencer
//!
//! Allocates per-guild case numbers through the configuration store's
//! atomic counter. Uniqueness under concurrency is the store's single
//! atomic read-increment-write; the sequencer only translates counter
//! values into allocated numbers and classifies failures.

use std::sync::Arc;

use tracing::instrument;

use modlog_core::traits::ModerationConfigStore;
use modlog_core::{LogError, Snowflake};

/// Allocates monotonically increasing case numbers per guild
pub struct CaseSequencer {
    config_store: Arc<dyn ModerationConfigStore>,
}

impl CaseSequencer {
    /// Create a new CaseSequencer
    pub fn new(config_store: Arc<dyn ModerationConfigStore>) -> Self {
        Self { config_store }
    }

    /// Allocate the next case number for the guild
    ///
    /// Once returned, a number is never reissued, even if the caller's
    /// subsequent steps fail: the sequence is gap-tolerant, not gap-free.
    /// Any store failure is fatal to the invocation and surfaces as
    /// `SequencerPersist`; the caller must not dispatch or record a case
    /// against an unconfirmed number.
    #[instrument(skip(self))]
    pub async fn next_case_number(&self, guild_id: Snowflake) -> Result<i64, LogError> {
        let new_counter = self
            .config_store
            .increment_case_number(guild_id)
            .await
            .map_err(|e| match e {
                LogError::SequencerPersist(_) => e,
                other => LogError::SequencerPersist(other.to_string()),
            })?;

        // The store returns the post-increment counter; the number just
        // consumed is one less. A fresh guild's first counter write is 2,
        // so the first allocated case number is 1.
        Ok(new_counter - 1)
    }
}
