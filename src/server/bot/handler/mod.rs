use serenity::all::{
    Context, Guild, GuildId, GuildMemberUpdateEvent, GuildMembersChunkEvent, Member,
    PartialGuild, Presence, Ready, ResumedEvent, Role, RoleId, ShardStageUpdateEvent,
    UnavailableGuild, User,
};
use serenity::{async_trait, prelude::EventHandler};

use crate::server::gateway::GatewayClient;

pub mod guild;
pub mod member;
pub mod presence;
pub mod ready;
pub mod role;

/// Discord bot event handler
pub struct Handler {
    pub gateway: GatewayClient,
}

impl Handler {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        ready::handle_ready(&self.gateway, ready);
    }

    /// Called when a shard resumes its session after a reconnect
    async fn resume(&self, _ctx: Context, _event: ResumedEvent) {
        ready::handle_resume(&self.gateway);
    }

    /// Called when a shard's connection stage changes
    async fn shard_stage_update(&self, _ctx: Context, event: ShardStageUpdateEvent) {
        ready::handle_shard_stage_update(&self.gateway, event);
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let guild_id = guild.id;
        let needs_chunks = guild::needs_member_chunks(&guild);

        guild::handle_guild_create(&self.gateway, guild);

        if needs_chunks {
            guild::request_member_chunks(&ctx, guild_id);
        }
    }

    /// Called when a guild's settings change
    async fn guild_update(&self, _ctx: Context, _old: Option<Guild>, new: PartialGuild) {
        guild::handle_guild_update(&self.gateway, new);
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(&self, _ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        guild::handle_guild_delete(&self.gateway, incomplete);
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, _ctx: Context, new: Role) {
        role::handle_guild_role_create(&self.gateway, new);
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, _ctx: Context, _old: Option<Role>, new: Role) {
        role::handle_guild_role_update(&self.gateway, new);
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        _removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(&self.gateway, guild_id, removed_role_id);
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.gateway, new_member);
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.gateway, guild_id, user);
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        _ctx: Context,
        _old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.gateway, new, event);
    }

    /// Called with a batch of members requested for a large guild
    async fn guild_members_chunk(&self, _ctx: Context, chunk: GuildMembersChunkEvent) {
        member::handle_guild_members_chunk(&self.gateway, chunk);
    }

    /// Called when a member's status changes
    async fn presence_update(&self, _ctx: Context, new_data: Presence) {
        presence::handle_presence_update(&self.gateway, new_data);
    }
}
