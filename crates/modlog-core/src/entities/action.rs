//! Moderation action catalog
//!
//! Every moderation action the log understands is a variant of
//! [`ModAction`], and each variant maps to one immutable
//! [`ActionDefinition`] in a static table. Adding an action is a data
//! change: a new variant plus a new table row.

use serde::{Deserialize, Serialize};

/// Closed enumeration of moderation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModAction {
    AddRole,
    RemoveRole,
    RemoveAllRoles,
    Ban,
    SoftBan,
    Kick,
    Unban,
    Mute,
    Unmute,
    Deafen,
    Undeafen,
    TextMute,
    TextUnmute,
    Clear,
    Report,
    Warn,
    ClearWarn,
}

/// Severity of an action, mapped to an embed color by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// How an action reshapes the base field list
///
/// Base fields, in order: User, User ID, Reason, Responsible Moderator,
/// Moderator ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Base fields only
    Base,
    /// Prepend a Role field (add-role, remove-role)
    PrependRole,
    /// Insert a Channel field immediately before the moderator pair
    /// (text-mute, text-unmute)
    InsertChannelBeforeModerator,
    /// Replace User / User ID / Reason with Channel / Channel ID /
    /// Cleared (clear)
    ReplaceWithChannel,
    /// Replace the moderator pair with Reporter / Reporter ID (report)
    ReplaceModeratorWithReporter,
}

/// Immutable definition of one moderation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDefinition {
    pub action: ModAction,
    /// Localization key resolved externally to the entry title
    pub label_key: &'static str,
    pub severity: Severity,
    pub shape: FieldShape,
}

/// Action-specific contextual data not covered by actor/target/reason
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionExtras {
    /// Role name for add-role / remove-role
    pub role_name: Option<String>,
    /// Channel display value for text-mute / text-unmute
    pub channel: Option<String>,
    /// Number of messages removed, for clear
    pub cleared: Option<u64>,
}

impl ActionExtras {
    /// Extras carrying no action-specific data
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn role(name: impl Into<String>) -> Self {
        Self {
            role_name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn channel(channel: impl Into<String>) -> Self {
        Self {
            channel: Some(channel.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn cleared(count: u64) -> Self {
        Self {
            cleared: Some(count),
            ..Self::default()
        }
    }
}

impl ModAction {
    /// All known actions, in catalog order
    pub const ALL: [ModAction; 17] = [
        Self::AddRole,
        Self::RemoveRole,
        Self::RemoveAllRoles,
        Self::Ban,
        Self::SoftBan,
        Self::Kick,
        Self::Unban,
        Self::Mute,
        Self::Unmute,
        Self::Deafen,
        Self::Undeafen,
        Self::TextMute,
        Self::TextUnmute,
        Self::Clear,
        Self::Report,
        Self::Warn,
        Self::ClearWarn,
    ];

    /// Canonical lowercase identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AddRole => "add-role",
            Self::RemoveRole => "remove-role",
            Self::RemoveAllRoles => "remove-all-roles",
            Self::Ban => "ban",
            Self::SoftBan => "soft-ban",
            Self::Kick => "kick",
            Self::Unban => "unban",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Deafen => "deafen",
            Self::Undeafen => "undeafen",
            Self::TextMute => "text-mute",
            Self::TextUnmute => "text-unmute",
            Self::Clear => "clear",
            Self::Report => "report",
            Self::Warn => "warn",
            Self::ClearWarn => "clear-warn",
        }
    }

    /// Parse an action identifier, case-insensitively
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.id().eq_ignore_ascii_case(id))
    }

    /// The catalog definition for this action
    #[must_use]
    pub fn definition(self) -> &'static ActionDefinition {
        // ALL and CATALOG are kept in the same order
        &CATALOG[Self::ALL.iter().position(|a| *a == self).unwrap_or(0)]
    }
}

impl std::fmt::Display for ModAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

const fn def(
    action: ModAction,
    label_key: &'static str,
    severity: Severity,
    shape: FieldShape,
) -> ActionDefinition {
    ActionDefinition {
        action,
        label_key,
        severity,
        shape,
    }
}

/// The static action catalog, indexed in `ModAction::ALL` order
static CATALOG: [ActionDefinition; 17] = [
    def(ModAction::AddRole, "addRole", Severity::Success, FieldShape::PrependRole),
    def(ModAction::RemoveRole, "removeRole", Severity::Danger, FieldShape::PrependRole),
    def(ModAction::RemoveAllRoles, "removeAllRole", Severity::Danger, FieldShape::Base),
    def(ModAction::Ban, "guildBanAdd", Severity::Danger, FieldShape::Base),
    def(ModAction::SoftBan, "userSoftBan", Severity::Danger, FieldShape::Base),
    def(ModAction::Kick, "kick", Severity::Danger, FieldShape::Base),
    def(ModAction::Unban, "guildBanRemove", Severity::Success, FieldShape::Base),
    def(ModAction::Mute, "voiceMuteAdd", Severity::Warning, FieldShape::Base),
    def(ModAction::Unmute, "voiceMuteRemove", Severity::Success, FieldShape::Base),
    def(ModAction::Deafen, "deafAdd", Severity::Warning, FieldShape::Base),
    def(ModAction::Undeafen, "deafRemove", Severity::Success, FieldShape::Base),
    def(ModAction::TextMute, "textMuteAdd", Severity::Warning, FieldShape::InsertChannelBeforeModerator),
    def(ModAction::TextUnmute, "textMuteRemove", Severity::Success, FieldShape::InsertChannelBeforeModerator),
    def(ModAction::Clear, "messageClear", Severity::Danger, FieldShape::ReplaceWithChannel),
    def(ModAction::Report, "userReport", Severity::Warning, FieldShape::ReplaceModeratorWithReporter),
    def(ModAction::Warn, "userWarnAdd", Severity::Warning, FieldShape::Base),
    def(ModAction::ClearWarn, "userWarnRemove", Severity::Success, FieldShape::Base),
];

/// Lookup facade over the static catalog
pub struct ActionCatalog;

impl ActionCatalog {
    /// Resolve an action identifier to its definition
    ///
    /// Matching is case-insensitive. Unknown identifiers return `None`;
    /// the caller decides whether that is an error.
    #[must_use]
    pub fn resolve(action_id: &str) -> Option<&'static ActionDefinition> {
        ModAction::parse(action_id).map(ModAction::definition)
    }
}
