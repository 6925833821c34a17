//! # modlog-core
//!
//! Domain layer for the moderation audit log: entities, value objects,
//! port traits, and the error taxonomy. This crate has zero dependencies
//! on infrastructure (database, chat client, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActionCatalog, ActionDefinition, ActionExtras, FieldShape, GuildLogConfig, LogEntry,
    LogField, ModAction, ModerationCase, Severity, Subject,
};
pub use error::LogError;
pub use traits::{
    CaseStore, ErrorSink, LabelResolver, LogDispatcher, ModerationConfigStore, PortResult,
};
pub use value_objects::{Snowflake, SnowflakeParseError};
