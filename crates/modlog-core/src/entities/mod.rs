//! Domain entities - core business objects

mod action;
mod log_entry;
mod moderation;

pub use action::{ActionCatalog, ActionDefinition, ActionExtras, FieldShape, ModAction, Severity};
pub use log_entry::{LogEntry, LogField};
pub use moderation::{GuildLogConfig, ModerationCase, Subject};
