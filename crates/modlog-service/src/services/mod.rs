//! Moderation log services
//!
//! The coordinator in [`mod_log`] is the single entry point; [`entry`]
//! and [`sequencer`] are its two internal steps, kept separate so each
//! transition of the state machine is independently testable.

pub mod context;
pub mod entry;
pub mod mod_log;
pub mod sequencer;
pub mod sink;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use entry::{LogEntryBuilder, NO_REASON};
pub use mod_log::{LogActionRequest, ModerationLogService};
pub use sequencer::CaseSequencer;
pub use sink::TracingErrorSink;
