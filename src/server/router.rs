use axum::{
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::server::{
    controller::{
        moderation::{ban_member, kick_member, leave_guild},
        page::{home, team_page},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
    token::MIN_SESSION_SECRET_LEN,
};

/// Sessions expire after a week without requests.
const SESSION_INACTIVITY_DAYS: i64 = 7;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/team", get(team_page))
        .route("/kick", post(kick_member))
        .route("/ban", post(ban_member))
        .route("/leave/{guild_id}", get(leave_guild))
}

/// Builds the complete application: routes, state, signed cookie sessions and request
/// tracing.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session_secret` - Secret the session cookie is signed with, at least 64 bytes
///
/// # Returns
/// - `Ok(Router)` - Ready to serve
/// - `Err(AppError::ConfigErr)` - The secret is too short to derive a signing key
pub fn build_app(state: AppState, session_secret: &str) -> Result<Router, AppError> {
    let key = Key::try_from(session_secret.as_bytes()).map_err(|_| {
        ConfigError::InvalidSessionSecret {
            required: MIN_SESSION_SECRET_LEN,
            found: session_secret.len(),
        }
    })?;

    let session = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(key);

    Ok(router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod test;
