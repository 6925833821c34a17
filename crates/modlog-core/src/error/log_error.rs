//! Moderation log error taxonomy
//!
//! Every failure the coordinator can observe is one of these variants.
//! A missing or disabled guild configuration is not an error; the
//! coordinator exits silently in that case.

use thiserror::Error;

/// Failures arising while logging a moderation action
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogError {
    /// The action identifier has no catalog entry (configuration defect)
    #[error("moderation logging is not present for {0} action")]
    UnknownAction(String),

    /// The caller omitted an extras field the action's shape requires
    #[error("missing extras field '{field}' for {action} action")]
    MalformedExtras {
        action: &'static str,
        field: &'static str,
    },

    /// The case counter could not be durably advanced
    #[error("case counter update failed: {0}")]
    SequencerPersist(String),

    /// The rendered entry could not be delivered to the log channel
    #[error("log entry dispatch failed: {0}")]
    Dispatch(String),

    /// The case record could not be persisted
    #[error("case record persistence failed: {0}")]
    RecordPersist(String),

    /// Infrastructure failure outside the steps above (config fetch)
    #[error("database error: {0}")]
    Database(String),
}

impl LogError {
    /// Stable error code for operational sinks
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownAction(_) => "UNKNOWN_ACTION",
            Self::MalformedExtras { .. } => "MALFORMED_EXTRAS",
            Self::SequencerPersist(_) => "SEQUENCER_PERSIST_ERROR",
            Self::Dispatch(_) => "DISPATCH_ERROR",
            Self::RecordPersist(_) => "RECORD_PERSIST_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Whether this error aborts the rest of the invocation
    ///
    /// Dispatch failures are isolated: the case record is persisted even
    /// when the channel post failed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Dispatch(_))
    }
}
