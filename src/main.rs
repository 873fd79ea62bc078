mod model;
mod server;
mod view;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::AppError,
    executor::GatewayExecutor,
    gateway::{backend::SerenityBackend, GatewayClient},
    router, startup,
    state::AppState,
    token::TokenStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let tokens = TokenStore::new(&config.secrets_path);
    let bot_token = tokens.bot_token().await?;
    let session_secret = tokens.session_secret().await?;

    let backend = Arc::new(SerenityBackend::new(&bot_token));
    let gateway = GatewayClient::new(backend);

    let executor = GatewayExecutor::start()?;
    let bridge = executor.bridge(config.bridge_timeout);

    tracing::info!("Starting Discord bot");
    let bot = startup::connect_gateway(bridge.clone(), bot_token, gateway.clone()).await?;

    let app = router::build_app(
        AppState::new(gateway.clone(), bridge.clone(), &config.moderation_reason),
        &session_secret,
    )?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Stopping Discord bot");
    startup::disconnect_gateway(bridge, bot, gateway).await;
    tokio::task::spawn_blocking(move || executor.shutdown()).await?;

    Ok(())
}
