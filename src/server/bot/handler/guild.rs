//! Guild event handlers for keeping the guild cache in sync.
//!
//! `guild_create` fires on startup for every guild the bot is already in, when the bot
//! joins a new guild and when a guild comes back after an outage. Each delivery carries
//! the full guild including roles, members and presences, so the cached snapshot is
//! replaced wholesale.
//!
//! Discord only inlines members for small guilds. For large ones the handler asks the
//! shard for the full member list, which arrives as `guild_members_chunk` events.

use dioxus_logger::tracing;
use serenity::all::{ChunkGuildFilter, Context, Guild, GuildId, PartialGuild, UnavailableGuild};

use crate::server::{gateway::GatewayClient, model::discord::GuildSnapshot};

/// Handles the guild_create event by caching a fresh snapshot of the guild.
///
/// # Arguments
/// - `gateway` - Gateway client whose cache is updated
/// - `guild` - Full guild data including roles, members and presences
pub fn handle_guild_create(gateway: &GatewayClient, guild: Guild) {
    let snapshot = GuildSnapshot::from_serenity(&guild);

    tracing::debug!(
        "Caching guild {} ({}) with {} members and {} roles",
        snapshot.name,
        snapshot.guild_id,
        snapshot.members.len(),
        snapshot.roles.len()
    );

    gateway.cache().upsert_guild(snapshot);
}

/// Whether the guild_create delivery is missing members that must be requested.
pub fn needs_member_chunks(guild: &Guild) -> bool {
    guild.large || guild.member_count > guild.members.len() as u64
}

/// Requests every member of the guild, with presences, from the gateway.
///
/// The members arrive as `guild_members_chunk` events on the same shard.
pub fn request_member_chunks(ctx: &Context, guild_id: GuildId) {
    tracing::debug!("Requesting member chunks for guild {}", guild_id);
    ctx.shard
        .chunk_guild(guild_id, None, true, ChunkGuildFilter::None, None);
}

/// Handles the guild_update event by applying the guild's new name.
pub fn handle_guild_update(gateway: &GatewayClient, guild: PartialGuild) {
    if !gateway.cache().rename_guild(guild.id.get(), &guild.name) {
        tracing::debug!("Received guild_update for uncached guild {}", guild.id);
    }
}

/// Handles the guild_delete event.
///
/// An unavailable guild is an outage, not a departure; it stays cached with its last
/// known contents and is refreshed by the `guild_create` that follows recovery. Only a
/// guild the bot actually left or was removed from is dropped.
pub fn handle_guild_delete(gateway: &GatewayClient, incomplete: UnavailableGuild) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable, keeping cached data", guild_id);
        return;
    }

    if gateway.cache().remove_guild(guild_id) {
        tracing::info!("Removed guild {} from cache", guild_id);
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::OnlineStatus;
    use test_utils::serenity::{
        guild::{create_test_guild_with, TestGuild},
        member::TestMember,
        role::create_test_role,
    };

    use crate::server::{
        gateway::testing::{guild, ready_gateway, FakeBackend},
        model::discord::PresenceStatus,
    };

    use super::*;

    fn unavailable_guild(guild_id: u64, unavailable: bool) -> UnavailableGuild {
        serde_json::from_value(serde_json::json!({
            "id": guild_id.to_string(),
            "unavailable": unavailable,
        }))
        .unwrap()
    }

    /// Tests that a created guild is cached with its members and presences.
    ///
    /// Expected: guild listed, member present with the delivered status
    #[test]
    fn caches_created_guild() {
        let gateway = ready_gateway(FakeBackend::new(), Vec::new());
        let created = create_test_guild_with(TestGuild {
            roles: vec![create_test_role(10, "@everyone", 0, 0)],
            members: vec![TestMember::new(10, 2, "alice")],
            presences: vec![(2, OnlineStatus::Online)],
            ..TestGuild::new(10, "Guild", 2)
        });

        handle_guild_create(&gateway, created);

        let cached = gateway.get_guild(10).unwrap();
        assert_eq!(cached.name, "Guild");
        assert_eq!(cached.member(2).unwrap().status, PresenceStatus::Online);
    }

    /// Tests that a second guild_create replaces the earlier snapshot.
    ///
    /// Expected: only the members of the latest delivery remain
    #[test]
    fn replaces_existing_guild() {
        let gateway = ready_gateway(FakeBackend::new(), Vec::new());
        handle_guild_create(
            &gateway,
            create_test_guild_with(TestGuild {
                members: vec![TestMember::new(10, 2, "alice"), TestMember::new(10, 3, "bob")],
                ..TestGuild::new(10, "Guild", 2)
            }),
        );

        handle_guild_create(
            &gateway,
            create_test_guild_with(TestGuild {
                members: vec![TestMember::new(10, 2, "alice")],
                ..TestGuild::new(10, "Renamed", 2)
            }),
        );

        let cached = gateway.get_guild(10).unwrap();
        assert_eq!(cached.name, "Renamed");
        assert_eq!(cached.members.len(), 1);
        assert_eq!(gateway.list_guilds().len(), 1);
    }

    /// Tests that a guild delivered with only part of its members asks for the rest.
    ///
    /// Expected: false when every member is inline, true for a partial or large guild
    #[test]
    fn detects_partial_member_list() {
        let complete = create_test_guild_with(TestGuild {
            members: vec![TestMember::new(10, 2, "alice")],
            ..TestGuild::new(10, "Guild", 2)
        });
        let mut partial = complete.clone();
        partial.member_count = 250;
        let mut large = complete.clone();
        large.large = true;

        assert!(!needs_member_chunks(&complete));
        assert!(needs_member_chunks(&partial));
        assert!(needs_member_chunks(&large));
    }

    /// Tests that an outage keeps the guild cached.
    ///
    /// Expected: guild still listed
    #[test]
    fn keeps_unavailable_guild() {
        let gateway = ready_gateway(FakeBackend::new(), vec![guild(10, "Guild", &[])]);

        handle_guild_delete(&gateway, unavailable_guild(10, true));

        assert!(gateway.get_guild(10).is_ok());
    }

    /// Tests that leaving a guild removes it from the cache.
    ///
    /// Expected: guild no longer listed
    #[test]
    fn removes_departed_guild() {
        let gateway = ready_gateway(FakeBackend::new(), vec![guild(10, "Guild", &[])]);

        handle_guild_delete(&gateway, unavailable_guild(10, false));

        assert!(gateway.get_guild(10).is_err());
        assert!(gateway.list_guilds().is_empty());
    }
}
