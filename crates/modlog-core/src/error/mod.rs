//! Error types for the moderation log

mod log_error;

pub use log_error::LogError;
