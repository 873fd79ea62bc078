use dioxus_logger::tracing;

use crate::server::{
    bridge::Bridge,
    error::AppError,
    gateway::GatewayClient,
    model::moderation::{ModerationOutcome, ModerationRequest},
    util::parse::parse_snowflake,
};

/// Validates moderation requests and runs them on the gateway executor.
///
/// Every method blocks the calling thread on the bridge and must be called from a
/// blocking context, never from an async task.
pub struct ModerationService<'a> {
    gateway: &'a GatewayClient,
    bridge: &'a Bridge,
    reason: &'a str,
}

impl<'a> ModerationService<'a> {
    /// # Arguments
    /// - `gateway` - Client whose cache validates targets and whose backend runs the action
    /// - `bridge` - Hand-off to the gateway executor
    /// - `reason` - Audit log reason attached to kicks and bans
    pub fn new(gateway: &'a GatewayClient, bridge: &'a Bridge, reason: &'a str) -> Self {
        Self {
            gateway,
            bridge,
            reason,
        }
    }

    /// Kicks a member.
    ///
    /// Identifiers are validated and looked up in the cache before anything is
    /// submitted to the bridge.
    ///
    /// # Returns
    /// - `Ok(ModerationOutcome::Kicked)` - Discord accepted the kick
    /// - `Err(AppError::BadRequest)` - Missing or malformed identifier
    /// - `Err(AppError::GatewayErr(_))` - Unknown target (404), denied (403), not
    ///   connected (503), or a bridge failure (504/503/500)
    pub fn kick(
        &self,
        guild_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<ModerationOutcome, AppError> {
        let (guild_id, member_id) = self.validate_member(guild_id, member_id)?;

        self.run(ModerationRequest::kick(guild_id, member_id))
    }

    /// Bans a member. Fails the same ways as [`kick`](Self::kick).
    pub fn ban(
        &self,
        guild_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<ModerationOutcome, AppError> {
        let (guild_id, member_id) = self.validate_member(guild_id, member_id)?;

        self.run(ModerationRequest::ban(guild_id, member_id))
    }

    /// Makes the bot leave a guild.
    pub fn leave(&self, guild_id: &str) -> Result<ModerationOutcome, AppError> {
        let guild_id = parse_snowflake(Some(guild_id), "Guild")?;
        self.gateway.get_guild(guild_id)?;

        self.run(ModerationRequest::leave(guild_id))
    }

    fn validate_member(
        &self,
        guild_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<(u64, u64), AppError> {
        let guild_id = parse_snowflake(guild_id, "Guild")?;
        let member_id = parse_snowflake(member_id, "Member")?;
        self.gateway.get_member(guild_id, member_id)?;

        Ok((guild_id, member_id))
    }

    fn run(&self, request: ModerationRequest) -> Result<ModerationOutcome, AppError> {
        tracing::debug!(
            "Submitting {} for guild {} to the gateway executor",
            request.action,
            request.guild_id
        );

        let gateway = self.gateway.clone();
        let reason = self.reason.to_string();

        Ok(self
            .bridge
            .submit(async move { gateway.execute(request, &reason).await })?)
    }
}
