use axum::{
    extract::{OriginalUri, Query, State},
    response::Html,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        error::AppError,
        middleware::session::{FlashSession, ReturnToSession},
        service::guild::GuildService,
        state::AppState,
    },
    view,
};

#[derive(Deserialize)]
pub struct TeamQuery {
    pub guild_id: Option<String>,
    pub search_query: Option<String>,
}

/// Renders the list of guilds the bot is in.
///
/// Records the page as the return-to URL and shows any flashed error.
///
/// # Returns
/// - `200 OK` - HTML page
/// - `500 Internal Server Error` - Session store failure
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<Html<String>, AppError> {
    ReturnToSession::new(&session).set_url(&uri.to_string()).await?;
    let error = FlashSession::new(&session).take_error().await?;

    let guilds = GuildService::new(&state.gateway).list_guilds();

    Ok(Html(view::render_home(guilds, error)))
}

/// Renders the member list of one guild, optionally filtered by display name.
///
/// # Returns
/// - `200 OK` - HTML page
/// - `400 Bad Request` - Malformed guild id
/// - `404 Not Found` - Guild id missing or unknown; the error is also flashed
pub async fn team_page(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<TeamQuery>,
) -> Result<Html<String>, AppError> {
    let service = GuildService::new(&state.gateway);

    let team = match service.get_team(query.guild_id.as_deref(), query.search_query.as_deref()) {
        Ok(team) => team,
        Err(err) => {
            FlashSession::new(&session).set_error(&err.user_message()).await?;
            return Err(err);
        }
    };

    ReturnToSession::new(&session).set_url(&uri.to_string()).await?;
    let error = FlashSession::new(&session).take_error().await?;

    Ok(Html(view::render_team(service.list_guilds(), team, error)))
}
