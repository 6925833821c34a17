//! Database models - SQLx-compatible structs for PostgreSQL tables

mod guild_config;
mod moderation_case;

pub use guild_config::GuildLogConfigModel;
pub use moderation_case::ModerationCaseModel;
