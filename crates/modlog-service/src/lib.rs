//! # modlog-service
//!
//! Application layer for the moderation log: the log-entry builder, the
//! case sequencer, and the coordinator that ties configuration lookup,
//! entry dispatch, and case persistence together.

pub mod services;

pub use services::{
    CaseSequencer, LogActionRequest, LogEntryBuilder, ModerationLogService, ServiceContext,
    TracingErrorSink, NO_REASON,
};
