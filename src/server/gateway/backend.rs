//! Remote moderation primitives.
//!
//! [`ModerationBackend`] is the boundary between the gateway client and Discord's REST
//! API. The production implementation wraps serenity's `Http` client; tests substitute
//! a fake that can grant, deny or stall each action.

use std::sync::Arc;

use serenity::{
    all::{GuildId, UserId},
    http::{Http, HttpError},
    model::ModelError,
};

use crate::server::error::gateway::GatewayError;

/// Discord's status code for a request the bot lacks permission for.
const HTTP_FORBIDDEN: u16 = 403;

/// Mutating Discord operations used by the dashboard.
///
/// Every method runs on the gateway executor. A permission denial is reported as
/// `GatewayError::Forbidden` carrying Discord's reason; anything else as
/// `GatewayError::Discord`.
#[serenity::async_trait]
pub trait ModerationBackend: Send + Sync {
    async fn kick(&self, guild_id: u64, member_id: u64, reason: &str) -> Result<(), GatewayError>;

    async fn ban(&self, guild_id: u64, member_id: u64, reason: &str) -> Result<(), GatewayError>;

    async fn leave_guild(&self, guild_id: u64) -> Result<(), GatewayError>;
}

/// Backend that calls Discord through serenity's HTTP client.
pub struct SerenityBackend {
    http: Arc<Http>,
}

impl SerenityBackend {
    /// Creates a backend authenticated with the bot token.
    pub fn new(token: &str) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
        }
    }
}

#[serenity::async_trait]
impl ModerationBackend for SerenityBackend {
    async fn kick(&self, guild_id: u64, member_id: u64, reason: &str) -> Result<(), GatewayError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(member_id), reason)
            .await
            .map_err(classify)
    }

    async fn ban(&self, guild_id: u64, member_id: u64, reason: &str) -> Result<(), GatewayError> {
        // Keep the member's message history.
        GuildId::new(guild_id)
            .ban_with_reason(&self.http, UserId::new(member_id), 0, reason)
            .await
            .map_err(classify)
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), GatewayError> {
        GuildId::new(guild_id).leave(&self.http).await.map_err(classify)
    }
}

/// Separates permission denials from other Discord failures.
fn classify(err: serenity::Error) -> GatewayError {
    match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == HTTP_FORBIDDEN =>
        {
            GatewayError::Forbidden(response.error.message.clone())
        }
        serenity::Error::Model(ModelError::InvalidPermissions { .. })
        | serenity::Error::Model(ModelError::Hierarchy) => GatewayError::Forbidden(err.to_string()),
        _ => err.into(),
    }
}
