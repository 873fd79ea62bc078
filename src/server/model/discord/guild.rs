use indexmap::IndexMap;
use serenity::all::Guild;

use super::{guild_member::MemberSnapshot, presence::PresenceStatus, role::RoleSnapshot};

/// A guild as last seen by the gateway, with its roles and members.
///
/// Snapshots are immutable once published to the cache; updates produce a modified copy.
/// Members keep their insertion order: the order received at guild creation, with
/// later joins appended.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: u64,
    pub roles: IndexMap<u64, RoleSnapshot>,
    pub members: IndexMap<u64, MemberSnapshot>,
}

impl GuildSnapshot {
    /// Converts a guild delivered by `guild_create` into a snapshot.
    ///
    /// Members are ordered by user id since the gateway delivers them unordered. Presence
    /// status is taken from the guild's presence list; members without one are offline.
    pub fn from_serenity(guild: &Guild) -> Self {
        let mut roles: Vec<RoleSnapshot> = guild.roles.values().map(RoleSnapshot::from_serenity).collect();
        roles.sort_by_key(|role| (role.position, role.role_id));

        let mut members: Vec<MemberSnapshot> = guild
            .members
            .values()
            .map(|member| {
                let status = guild
                    .presences
                    .get(&member.user.id)
                    .map(|presence| PresenceStatus::from(presence.status))
                    .unwrap_or_default();
                MemberSnapshot::from_serenity(member, status)
            })
            .collect();
        members.sort_by_key(|member| member.user_id);

        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
            owner_id: guild.owner_id.get(),
            roles: roles.into_iter().map(|role| (role.role_id, role)).collect(),
            members: members
                .into_iter()
                .map(|member| (member.user_id, member))
                .collect(),
        }
    }

    pub fn member(&self, member_id: u64) -> Option<&MemberSnapshot> {
        self.members.get(&member_id)
    }

    /// The guild's implicit everyone role, which shares the guild's id.
    pub fn everyone_role(&self) -> Option<&RoleSnapshot> {
        self.roles.get(&self.guild_id)
    }

    /// Resolves a member's roles, lowest position first, excluding the everyone role.
    ///
    /// Role ids the guild no longer knows are skipped.
    pub fn member_roles(&self, member: &MemberSnapshot) -> Vec<&RoleSnapshot> {
        let mut roles: Vec<&RoleSnapshot> = member
            .role_ids
            .iter()
            .filter(|id| **id != self.guild_id)
            .filter_map(|id| self.roles.get(id))
            .collect();
        roles.sort_by_key(|role| (role.position, role.role_id));
        roles
    }

    /// Whether the member holds guild-wide administrator permission.
    ///
    /// The owner always does; anyone else needs a role, including everyone, that
    /// grants it.
    pub fn is_administrator(&self, member: &MemberSnapshot) -> bool {
        member.user_id == self.owner_id
            || self.everyone_role().is_some_and(RoleSnapshot::is_administrator)
            || self
                .member_roles(member)
                .into_iter()
                .any(RoleSnapshot::is_administrator)
    }
}
