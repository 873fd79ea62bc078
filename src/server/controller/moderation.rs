use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::{FlashSession, ReturnToSession},
    model::moderation::ModerationOutcome,
    service::moderation::ModerationService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct MemberActionForm {
    pub guild_id: Option<String>,
    pub member_id: Option<String>,
}

/// Kicks a guild member.
///
/// # Returns
/// - `303 See Other` - Kicked; back to the page the action was issued from
/// - `200 OK` - Kicked, no page recorded; plain-text confirmation
/// - `400 Bad Request` - Missing or malformed id
/// - `403 Forbidden` - Discord denied the kick
/// - `404 Not Found` - Unknown guild or member
/// - `503 Service Unavailable` / `504 Gateway Timeout` - Gateway not usable in time
pub async fn kick_member(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MemberActionForm>,
) -> Result<Response, AppError> {
    let outcome = run_moderation(state, move |service| {
        service.kick(form.guild_id.as_deref(), form.member_id.as_deref())
    })
    .await;

    respond(&session, outcome).await
}

/// Bans a guild member. Responds like [`kick_member`].
pub async fn ban_member(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MemberActionForm>,
) -> Result<Response, AppError> {
    let outcome = run_moderation(state, move |service| {
        service.ban(form.guild_id.as_deref(), form.member_id.as_deref())
    })
    .await;

    respond(&session, outcome).await
}

/// Makes the bot leave a guild.
///
/// # Returns
/// - `303 See Other` - Left; redirect to the guild list
/// - `400 Bad Request` - Malformed id
/// - `403 Forbidden` - Discord denied leaving
/// - `404 Not Found` - Unknown guild
pub async fn leave_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<Response, AppError> {
    let outcome = run_moderation(state, move |service| service.leave(&guild_id)).await;

    match outcome {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err) => flash_and_fail(&session, err).await,
    }
}

/// Runs a moderation call on the blocking pool, where waiting on the bridge is allowed.
async fn run_moderation<F>(state: AppState, action: F) -> Result<ModerationOutcome, AppError>
where
    F: FnOnce(&ModerationService<'_>) -> Result<ModerationOutcome, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let service =
            ModerationService::new(&state.gateway, &state.bridge, &state.moderation_reason);
        action(&service)
    })
    .await?
}

async fn respond(
    session: &Session,
    outcome: Result<ModerationOutcome, AppError>,
) -> Result<Response, AppError> {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => return flash_and_fail(session, err).await,
    };

    match ReturnToSession::new(session).take_url().await? {
        Some(url) => Ok(Redirect::to(&url).into_response()),
        None => Ok(outcome.confirmation().into_response()),
    }
}

/// Records the error for the next page render and responds with it.
async fn flash_and_fail(session: &Session, err: AppError) -> Result<Response, AppError> {
    FlashSession::new(session).set_error(&err.user_message()).await?;
    Err(err)
}
