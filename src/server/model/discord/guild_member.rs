//! Discord guild member snapshot.

use serenity::all::Member;

use super::{badge::Badge, presence::PresenceStatus};

/// A guild member as last seen by the gateway.
///
/// Role ids are kept as received; resolving names and ordering them is done against the
/// owning [`GuildSnapshot`](super::GuildSnapshot) so role renames apply without touching
/// every member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSnapshot {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Discord username.
    pub username: String,
    /// Name shown in the guild: nickname, then global name, then username.
    pub display_name: String,
    pub is_bot: bool,
    /// Guild avatar, user avatar or the default avatar, in that order of preference.
    pub avatar_url: String,
    pub banner_url: Option<String>,
    pub status: PresenceStatus,
    /// Explicitly assigned roles; never contains the guild's everyone role.
    pub role_ids: Vec<u64>,
    pub badges: Vec<Badge>,
}

impl MemberSnapshot {
    /// Converts a serenity member into a snapshot with the given presence.
    ///
    /// # Arguments
    /// - `member` - Member from a guild create or member event
    /// - `status` - Presence status, `Offline` when no presence is known
    ///
    /// # Returns
    /// - `MemberSnapshot` - Owned copy of the member's display data
    pub fn from_serenity(member: &Member, status: PresenceStatus) -> Self {
        let user = &member.user;

        Self {
            user_id: user.id.get(),
            username: user.name.clone(),
            display_name: member.display_name().to_string(),
            is_bot: user.bot,
            avatar_url: member.face(),
            banner_url: user.banner_url(),
            status,
            role_ids: member.roles.iter().map(|id| id.get()).collect(),
            badges: user.public_flags.map(Badge::from_flags).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::UserPublicFlags;
    use test_utils::serenity::member::{create_test_member, TestMember};

    use super::*;

    /// Tests conversion of a member with a nickname, roles and flags.
    ///
    /// Expected: nickname used as display name, roles and badges carried over
    #[test]
    fn converts_serenity_member() {
        let member = create_test_member(TestMember {
            nick: Some("Ace"),
            role_ids: &[11, 12],
            public_flags: (UserPublicFlags::HOUSE_BALANCE).bits(),
            ..TestMember::new(1, 2, "alice")
        });

        let snapshot = MemberSnapshot::from_serenity(&member, PresenceStatus::Idle);

        assert_eq!(snapshot.user_id, 2);
        assert_eq!(snapshot.username, "alice");
        assert_eq!(snapshot.display_name, "Ace");
        assert!(!snapshot.is_bot);
        assert_eq!(snapshot.status, PresenceStatus::Idle);
        assert_eq!(snapshot.role_ids, vec![11, 12]);
        assert_eq!(snapshot.badges, vec![Badge::HypeSquadBalance]);
    }

    /// Tests that a member without a custom avatar gets the default one.
    ///
    /// Expected: avatar URL points at Discord's default avatars
    #[test]
    fn falls_back_to_default_avatar() {
        let member = create_test_member(TestMember::new(1, 2, "alice"));

        let snapshot = MemberSnapshot::from_serenity(&member, PresenceStatus::Offline);

        assert!(snapshot.avatar_url.contains("/embed/avatars/"));
        assert_eq!(snapshot.banner_url, None);
        assert_eq!(snapshot.display_name, "alice");
    }
}
