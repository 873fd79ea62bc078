//! Role event handlers for keeping cached guild roles current.
//!
//! Member snapshots reference roles by id, so role changes only touch the guild's role
//! table. A deleted role is also stripped from every member that held it.

use dioxus_logger::tracing;
use serenity::all::{GuildId, Role, RoleId};

use crate::server::{gateway::GatewayClient, model::discord::RoleSnapshot};

/// Handles the guild_role_create event when a role is created in a guild.
pub fn handle_guild_role_create(gateway: &GatewayClient, new: Role) {
    upsert_role(gateway, &new);
}

/// Handles the guild_role_update event (name, position, permissions, etc.).
pub fn handle_guild_role_update(gateway: &GatewayClient, new: Role) {
    upsert_role(gateway, &new);
}

/// Handles the guild_role_delete event when a role is removed from a guild.
pub fn handle_guild_role_delete(gateway: &GatewayClient, guild_id: GuildId, role_id: RoleId) {
    if gateway.cache().remove_role(guild_id.get(), role_id.get()) {
        tracing::debug!("Deleted role {} in guild {}", role_id, guild_id);
    }
}

fn upsert_role(gateway: &GatewayClient, role: &Role) {
    let guild_id = role.guild_id.get();

    if gateway
        .cache()
        .upsert_role(guild_id, RoleSnapshot::from_serenity(role))
    {
        tracing::debug!("Cached role {} in guild {}", role.name, guild_id);
    } else {
        tracing::warn!("Received role event for uncached guild {}", guild_id);
    }
}

#[cfg(test)]
mod tests {
    use test_utils::serenity::role::create_test_guild_role;

    use crate::server::gateway::testing::{guild, member, ready_gateway, role, FakeBackend};

    use super::*;

    /// Tests that created and updated roles land in the guild's role table.
    ///
    /// Expected: role cached, then renamed in place
    #[test]
    fn caches_created_and_updated_roles() {
        let gateway = ready_gateway(FakeBackend::new(), vec![guild(1, "Guild", &[])]);

        handle_guild_role_create(&gateway, create_test_guild_role(1, 50, "Mods", 2));
        handle_guild_role_update(&gateway, create_test_guild_role(1, 50, "Moderators", 2));

        let cached = gateway.get_guild(1).unwrap();
        assert_eq!(cached.roles[&50].name, "Moderators");
    }

    /// Tests that deleting a role strips it from members holding it.
    ///
    /// Expected: role gone from the table and from the member's role ids
    #[test]
    fn deletes_role_from_members() {
        let mut holder = member(2, "alice");
        holder.role_ids = vec![50];
        let mut cached = guild(1, "Guild", &[holder]);
        let mods = role(50, "Mods", 2);
        cached.roles.insert(mods.role_id, mods);
        let gateway = ready_gateway(FakeBackend::new(), vec![cached]);

        handle_guild_role_delete(&gateway, GuildId::new(1), RoleId::new(50));

        let updated = gateway.get_guild(1).unwrap();
        assert!(!updated.roles.contains_key(&50));
        assert!(updated.member(2).unwrap().role_ids.is_empty());
    }
}
