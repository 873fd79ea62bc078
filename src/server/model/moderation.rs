//! Moderation requests and their outcomes.

use std::fmt;

/// The moderation action a request asks for, with its target member where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick { member_id: u64 },
    Ban { member_id: u64 },
    Leave,
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kick { .. } => write!(f, "kick"),
            Self::Ban { .. } => write!(f, "ban"),
            Self::Leave => write!(f, "leave"),
        }
    }
}

/// A single moderation action against a guild or one of its members.
///
/// Built per request from validated identifiers and consumed by one bridged unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationRequest {
    pub guild_id: u64,
    pub action: ModerationAction,
}

impl ModerationRequest {
    pub fn kick(guild_id: u64, member_id: u64) -> Self {
        Self {
            guild_id,
            action: ModerationAction::Kick { member_id },
        }
    }

    pub fn ban(guild_id: u64, member_id: u64) -> Self {
        Self {
            guild_id,
            action: ModerationAction::Ban { member_id },
        }
    }

    pub fn leave(guild_id: u64) -> Self {
        Self {
            guild_id,
            action: ModerationAction::Leave,
        }
    }
}

/// Successful result of a moderation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationOutcome {
    Kicked,
    Banned,
    Left,
}

impl ModerationOutcome {
    /// Plain-text body returned when there is no page to redirect back to.
    pub fn confirmation(self) -> &'static str {
        match self {
            Self::Kicked => "Successfully kicked user...",
            Self::Banned => "Successfully banned user...",
            Self::Left => "Successfully left guild...",
        }
    }
}
