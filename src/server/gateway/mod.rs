//! Gateway client: the dashboard's view of Discord.
//!
//! [`GatewayClient`] owns the guild cache, the connection state and the moderation
//! backend. Cache reads are lock-free and may be called from any thread; they return the
//! last known snapshot even while the connection is down. Moderation operations are
//! asynchronous and only ever run on the gateway executor, reached through the bridge.

pub mod backend;
pub mod cache;
pub mod connection;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod test;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    error::gateway::GatewayError,
    model::{
        discord::{GuildSnapshot, MemberSnapshot},
        moderation::{ModerationAction, ModerationOutcome, ModerationRequest},
    },
};

use self::{backend::ModerationBackend, cache::GuildCache, connection::Connection};

/// Cheaply cloneable handle to the single gateway client.
#[derive(Clone)]
pub struct GatewayClient {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    cache: GuildCache,
    connection: Connection,
    backend: Arc<dyn ModerationBackend>,
}

impl GatewayClient {
    /// Creates a disconnected client with an empty cache.
    pub fn new(backend: Arc<dyn ModerationBackend>) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                cache: GuildCache::new(),
                connection: Connection::new(),
                backend,
            }),
        }
    }

    pub fn cache(&self) -> &GuildCache {
        &self.inner.cache
    }

    pub fn connection(&self) -> &Connection {
        &self.inner.connection
    }

    /// Every cached guild, in the order the bot first saw them.
    pub fn list_guilds(&self) -> Vec<Arc<GuildSnapshot>> {
        self.inner.cache.guilds()
    }

    /// Looks up a cached guild.
    ///
    /// # Returns
    /// - `Ok(Arc<GuildSnapshot>)` - The guild as last seen
    /// - `Err(GatewayError::GuildNotFound)` - The bot is not in this guild
    pub fn get_guild(&self, guild_id: u64) -> Result<Arc<GuildSnapshot>, GatewayError> {
        self.inner
            .cache
            .guild(guild_id)
            .ok_or(GatewayError::GuildNotFound(guild_id))
    }

    /// Looks up a cached member of a cached guild.
    ///
    /// # Returns
    /// - `Ok(MemberSnapshot)` - The member as last seen
    /// - `Err(GatewayError::GuildNotFound)` - The bot is not in this guild
    /// - `Err(GatewayError::MemberNotFound)` - No such member in the guild
    pub fn get_member(&self, guild_id: u64, member_id: u64) -> Result<MemberSnapshot, GatewayError> {
        self.get_guild(guild_id)?
            .member(member_id)
            .cloned()
            .ok_or(GatewayError::MemberNotFound {
                guild_id,
                member_id,
            })
    }

    /// Runs a moderation request. Must be awaited on the gateway executor.
    pub async fn execute(
        &self,
        request: ModerationRequest,
        reason: &str,
    ) -> Result<ModerationOutcome, GatewayError> {
        match request.action {
            ModerationAction::Kick { member_id } => self.kick(request.guild_id, member_id, reason).await,
            ModerationAction::Ban { member_id } => self.ban(request.guild_id, member_id, reason).await,
            ModerationAction::Leave => self.leave_guild(request.guild_id).await,
        }
    }

    /// Kicks a member and drops them from the cache.
    ///
    /// # Returns
    /// - `Ok(ModerationOutcome::Kicked)` - Discord accepted the kick
    /// - `Err(GatewayError::NotConnected)` - The connection is not ready
    /// - `Err(GatewayError::GuildNotFound | MemberNotFound)` - Target not cached
    /// - `Err(GatewayError::Forbidden)` - Discord denied the kick
    pub async fn kick(
        &self,
        guild_id: u64,
        member_id: u64,
        reason: &str,
    ) -> Result<ModerationOutcome, GatewayError> {
        self.ensure_ready()?;
        self.get_member(guild_id, member_id)?;

        self.inner
            .backend
            .kick(guild_id, member_id, reason)
            .await
            .inspect_err(|e| log_failure("kick", guild_id, e))?;

        self.inner.cache.remove_member(guild_id, member_id);
        tracing::info!("Kicked member {} from guild {}", member_id, guild_id);

        Ok(ModerationOutcome::Kicked)
    }

    /// Bans a member and drops them from the cache.
    ///
    /// Fails the same ways as [`kick`](Self::kick).
    pub async fn ban(
        &self,
        guild_id: u64,
        member_id: u64,
        reason: &str,
    ) -> Result<ModerationOutcome, GatewayError> {
        self.ensure_ready()?;
        self.get_member(guild_id, member_id)?;

        self.inner
            .backend
            .ban(guild_id, member_id, reason)
            .await
            .inspect_err(|e| log_failure("ban", guild_id, e))?;

        self.inner.cache.remove_member(guild_id, member_id);
        tracing::info!("Banned member {} from guild {}", member_id, guild_id);

        Ok(ModerationOutcome::Banned)
    }

    /// Leaves a guild and drops it from the cache, so leaving again is `GuildNotFound`.
    pub async fn leave_guild(&self, guild_id: u64) -> Result<ModerationOutcome, GatewayError> {
        self.ensure_ready()?;
        self.get_guild(guild_id)?;

        self.inner
            .backend
            .leave_guild(guild_id)
            .await
            .inspect_err(|e| log_failure("leave", guild_id, e))?;

        self.inner.cache.remove_guild(guild_id);
        tracing::info!("Left guild {}", guild_id);

        Ok(ModerationOutcome::Left)
    }

    fn ensure_ready(&self) -> Result<(), GatewayError> {
        if self.inner.connection.is_ready() {
            Ok(())
        } else {
            Err(GatewayError::NotConnected)
        }
    }
}

fn log_failure(action: &str, guild_id: u64, err: &GatewayError) {
    match err {
        GatewayError::Forbidden(reason) => {
            tracing::warn!("Discord denied {} in guild {}: {}", action, guild_id, reason)
        }
        err => tracing::error!("Failed to {} in guild {}: {}", action, guild_id, err),
    }
}
