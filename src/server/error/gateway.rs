use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::bridge::BridgeError;

/// Errors raised by the gateway client's cache reads and moderation operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The guild is not present in the gateway cache.
    ///
    /// Results in a 404 Not Found response.
    #[error("Guild not found")]
    GuildNotFound(u64),

    /// The member is not present in the cached guild.
    ///
    /// Results in a 404 Not Found response.
    #[error("Member not found")]
    MemberNotFound {
        /// Guild that was searched
        guild_id: u64,
        /// Member that was not found
        member_id: u64,
    },

    /// Discord refused the action because the bot lacks permission.
    ///
    /// This is an expected outcome, not a defect. Results in a 403 Forbidden
    /// response carrying Discord's reason.
    #[error("This was not allowed, {0}")]
    Forbidden(String),

    /// A mutating operation was attempted while the gateway connection is not ready.
    ///
    /// Results in a 503 Service Unavailable response.
    #[error("The bot is not connected to Discord")]
    NotConnected,

    /// Any other Discord API failure.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The operation could not be handed to or observed from the gateway executor.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Manual conversion from serenity::Error, boxing it to keep the enum small.
impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::Discord(Box::new(err))
    }
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::GuildNotFound(_) | Self::MemberNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
            Self::Discord(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Bridge(err) => err.status_code(),
        }
    }
}

/// Converts gateway errors into HTTP responses.
///
/// Bridge failures delegate to `BridgeError::into_response()`. Discord API failures
/// other than permission denials are logged and returned as a generic 500.
///
/// # Returns
/// - 403 Forbidden - For `Forbidden`, with the denial reason in the body
/// - 404 Not Found - For `GuildNotFound` / `MemberNotFound`
/// - 503 Service Unavailable - For `NotConnected`
/// - 500 Internal Server Error - For `Discord`
/// - Variable - For `Bridge`, delegated to `BridgeError::into_response()`
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Bridge(err) => err.into_response(),
            Self::Discord(err) => {
                tracing::error!("Discord API error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            err => (err.status_code(), err.to_string()).into_response(),
        }
    }
}
