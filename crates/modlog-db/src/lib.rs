//! # modlog-db
//!
//! Database layer implementing the moderation log ports with PostgreSQL
//! via SQLx: connection pool management, `FromRow` models, and the store
//! implementations.
//!
//! The case counter lives in `guild_log_config.next_case_number` and is
//! only ever advanced through a single atomic upsert, so concurrent
//! allocations across process instances never observe the same number.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgCaseStore, PgModerationConfigStore};
