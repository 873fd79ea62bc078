//! Member event handlers for keeping cached member lists current.

use std::collections::HashMap;

use dioxus_logger::tracing;
use serenity::all::{GuildId, GuildMemberUpdateEvent, GuildMembersChunkEvent, Member, User};

use crate::server::{
    gateway::GatewayClient,
    model::discord::{MemberSnapshot, PresenceStatus},
};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// New members have no presence yet and are cached as offline until a presence update
/// arrives.
pub fn handle_guild_member_addition(gateway: &GatewayClient, new_member: Member) {
    let guild_id = new_member.guild_id.get();
    let snapshot = MemberSnapshot::from_serenity(&new_member, PresenceStatus::Offline);

    if gateway.cache().upsert_member(guild_id, snapshot) {
        tracing::debug!("Member {} joined guild {}", new_member.user.name, guild_id);
    } else {
        tracing::warn!(
            "Received guild_member_addition for uncached guild {}",
            guild_id
        );
    }
}

/// Handles the guild_member_removal event when a member leaves, is kicked or is banned.
pub fn handle_guild_member_removal(gateway: &GatewayClient, guild_id: GuildId, user: User) {
    if gateway.cache().remove_member(guild_id.get(), user.id.get()) {
        tracing::debug!("Member {} left guild {}", user.name, guild_id);
    }
}

/// Handles the guild_member_update event (roles, nickname, avatar, etc.).
///
/// The member's cached presence is kept; presence changes arrive separately. When
/// serenity has no full member to hand over, the snapshot is built from the event.
///
/// # Arguments
/// - `gateway` - Gateway client whose cache is updated
/// - `new` - Full updated member, when serenity could assemble one
/// - `event` - Raw update event
pub fn handle_guild_member_update(
    gateway: &GatewayClient,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let member = new.unwrap_or_else(|| member_from_update(&event));
    update_member(gateway, &member);
}

/// Handles a guild_members_chunk event answering a member request for a large guild.
///
/// Members are merged in user id order. When the chunk carries presences they are
/// authoritative, and members without one are offline; otherwise cached statuses are
/// kept.
pub fn handle_guild_members_chunk(gateway: &GatewayClient, chunk: GuildMembersChunkEvent) {
    let guild_id = chunk.guild_id.get();
    let presences: Option<HashMap<u64, PresenceStatus>> =
        chunk.presences.as_ref().map(|presences| {
            presences
                .iter()
                .map(|presence| (presence.user.id.get(), PresenceStatus::from(presence.status)))
                .collect()
        });

    let mut members: Vec<MemberSnapshot> = chunk
        .members
        .values()
        .map(|member| {
            let status = presences
                .as_ref()
                .and_then(|presences| presences.get(&member.user.id.get()).copied())
                .unwrap_or_default();
            MemberSnapshot::from_serenity(member, status)
        })
        .collect();
    members.sort_by_key(|member| member.user_id);

    if gateway
        .cache()
        .upsert_members(guild_id, &members, presences.is_none())
    {
        tracing::debug!(
            "Cached {} members from chunk {}/{} of guild {}",
            members.len(),
            chunk.chunk_index + 1,
            chunk.chunk_count,
            guild_id
        );
    } else {
        tracing::warn!("Received guild_members_chunk for uncached guild {}", guild_id);
    }
}

fn member_from_update(event: &GuildMemberUpdateEvent) -> Member {
    let mut member = Member::default();
    member.guild_id = event.guild_id;
    member.user = event.user.clone();
    member.nick = event.nick.clone();
    member.roles = event.roles.clone();
    member.avatar = event.avatar;
    member.joined_at = Some(event.joined_at);
    member
}

fn update_member(gateway: &GatewayClient, member: &Member) {
    let guild_id = member.guild_id.get();
    let snapshot = MemberSnapshot::from_serenity(member, PresenceStatus::Offline);
    if !gateway.cache().upsert_member(guild_id, snapshot) {
        tracing::warn!("Received guild_member_update for uncached guild {}", guild_id);
    }
}
