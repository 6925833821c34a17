//! Log entry - the rendered representation of one moderation action

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::action::Severity;

/// One display field of a log entry
///
/// Field order is part of the contract with the dispatcher's rendering
/// surface and must be preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl LogField {
    /// Create a field rendered inline with its neighbors
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    /// Create a field rendered on its own row
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// A fully built log entry, ready for dispatch
///
/// Built fresh per moderation action and discarded after dispatch; only
/// the case record is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Localized action label, used as the entry title
    pub title: String,
    pub severity: Severity,
    pub fields: Vec<LogField>,
    pub case_number: i64,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Footer line identifying the case for later reference
    #[must_use]
    pub fn footer_text(&self) -> String {
        format!("Case Number: {}", self.case_number)
    }
}
