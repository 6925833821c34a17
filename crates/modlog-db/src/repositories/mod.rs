//! PostgreSQL implementations of the moderation log ports

mod case;
mod config;
mod error;

pub use case::PgCaseStore;
pub use config::PgModerationConfigStore;
pub use error::map_db_error;
