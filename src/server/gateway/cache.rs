//! Copy-on-write cache of guild snapshots.
//!
//! The gateway executor is the only writer: event handlers and completed moderation
//! operations publish a modified copy of the cache. Request threads load the current
//! snapshot without locking and keep reading it even while a newer one is published.

use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;

use crate::server::model::discord::{GuildSnapshot, MemberSnapshot, PresenceStatus, RoleSnapshot};

/// One published version of the cache.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    /// Guilds in the order the bot joined or first saw them.
    pub guilds: IndexMap<u64, Arc<GuildSnapshot>>,
}

#[derive(Debug, Default)]
pub struct GuildCache {
    snapshot: ArcSwap<CacheSnapshot>,
}

impl GuildCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guilds(&self) -> Vec<Arc<GuildSnapshot>> {
        self.snapshot.load().guilds.values().cloned().collect()
    }

    pub fn guild(&self, guild_id: u64) -> Option<Arc<GuildSnapshot>> {
        self.snapshot.load().guilds.get(&guild_id).cloned()
    }

    /// Inserts a guild, or replaces it in place when already cached.
    pub fn upsert_guild(&self, guild: GuildSnapshot) {
        let guild = Arc::new(guild);
        self.modify(|cache| {
            cache.guilds.insert(guild.guild_id, guild.clone());
            true
        });
    }

    /// Removes a guild, keeping the order of the others.
    ///
    /// # Returns
    /// - `true` - The guild was cached and has been removed
    /// - `false` - The guild was not cached
    pub fn remove_guild(&self, guild_id: u64) -> bool {
        self.modify(|cache| cache.guilds.shift_remove(&guild_id).is_some())
    }

    pub fn rename_guild(&self, guild_id: u64, name: &str) -> bool {
        self.modify_guild(guild_id, |guild| {
            guild.name = name.to_string();
            true
        })
    }

    /// Appends a new member, or replaces an existing one in place.
    ///
    /// Member updates from the gateway carry no presence, so a replaced member keeps its
    /// previously known status.
    pub fn upsert_member(&self, guild_id: u64, member: MemberSnapshot) -> bool {
        self.upsert_members(guild_id, std::slice::from_ref(&member), true)
    }

    /// Appends or replaces a batch of members in one published snapshot.
    ///
    /// With `keep_status`, replaced members keep their previously known status; otherwise
    /// the status carried by each snapshot wins.
    pub fn upsert_members(&self, guild_id: u64, members: &[MemberSnapshot], keep_status: bool) -> bool {
        self.modify_guild(guild_id, |guild| {
            for member in members {
                let mut member = member.clone();
                if let Some(existing) = guild.members.get(&member.user_id).filter(|_| keep_status) {
                    member.status = existing.status;
                }
                guild.members.insert(member.user_id, member);
            }
            true
        })
    }

    /// Removes a member, keeping the order of the others.
    pub fn remove_member(&self, guild_id: u64, member_id: u64) -> bool {
        self.modify_guild(guild_id, |guild| {
            guild.members.shift_remove(&member_id).is_some()
        })
    }

    /// Inserts or replaces a role, keeping the table ordered by position.
    pub fn upsert_role(&self, guild_id: u64, role: RoleSnapshot) -> bool {
        self.modify_guild(guild_id, |guild| {
            guild.roles.insert(role.role_id, role.clone());
            guild
                .roles
                .sort_by(|_, a, _, b| (a.position, a.role_id).cmp(&(b.position, b.role_id)));
            true
        })
    }

    /// Removes a role and strips it from every member holding it.
    pub fn remove_role(&self, guild_id: u64, role_id: u64) -> bool {
        self.modify_guild(guild_id, |guild| {
            if guild.roles.shift_remove(&role_id).is_none() {
                return false;
            }
            for member in guild.members.values_mut() {
                member.role_ids.retain(|id| *id != role_id);
            }
            true
        })
    }

    pub fn set_presence(&self, guild_id: u64, member_id: u64, status: PresenceStatus) -> bool {
        self.modify_guild(guild_id, |guild| match guild.members.get_mut(&member_id) {
            Some(member) if member.status != status => {
                member.status = status;
                true
            }
            _ => false,
        })
    }

    /// Applies `change` to a copy of one guild and publishes it if anything changed.
    fn modify_guild(&self, guild_id: u64, mut change: impl FnMut(&mut GuildSnapshot) -> bool) -> bool {
        self.modify(|cache| match cache.guilds.get_mut(&guild_id) {
            Some(guild) => {
                let mut updated = GuildSnapshot::clone(guild);
                if !change(&mut updated) {
                    return false;
                }
                *guild = Arc::new(updated);
                true
            }
            None => false,
        })
    }

    /// Applies `change` to a copy of the cache and publishes it if anything changed.
    fn modify(&self, mut change: impl FnMut(&mut CacheSnapshot) -> bool) -> bool {
        let mut changed = false;
        self.snapshot.rcu(|current| {
            let mut next = CacheSnapshot::clone(current);
            changed = change(&mut next);
            if changed {
                Arc::new(next)
            } else {
                Arc::clone(current)
            }
        });
        changed
    }
}
