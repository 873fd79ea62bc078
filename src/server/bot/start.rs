use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, ShardManager};

use crate::server::{
    bot::handler::Handler,
    error::gateway::GatewayError,
    gateway::{connection::ConnectionState, GatewayClient},
};

/// Handle to the running bot, used to shut its shards down.
pub struct BotHandle {
    shard_manager: Arc<ShardManager>,
}

impl BotHandle {
    /// Closes every shard; the client task then exits and marks the connection closed.
    ///
    /// Must be awaited on the gateway executor.
    pub async fn shutdown(&self) {
        self.shard_manager.shutdown_all().await;
        tracing::info!("Discord bot shut down");
    }
}

/// Builds the bot client and starts it in the background on the current runtime.
///
/// Must be awaited on the gateway executor so the client and its event handler run
/// there. Returns once the client is built; the connection is then `Connecting` and
/// becomes `Ready` when Discord's ready event arrives.
///
/// # Arguments
/// - `token` - Bot token
/// - `gateway` - Gateway client whose cache and connection state the bot maintains
///
/// # Returns
/// - `Ok(BotHandle)` - The client is starting
/// - `Err(GatewayError::Discord)` - The client could not be built
pub async fn connect(token: String, gateway: GatewayClient) -> Result<BotHandle, GatewayError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(gateway.clone()))
        .await?;
    let shard_manager = client.shard_manager.clone();

    gateway.connection().transition(ConnectionState::Connecting);
    tracing::info!("Starting Discord bot...");

    tokio::spawn(async move {
        if let Err(e) = client.start().await {
            tracing::error!("Discord bot error: {}", e);
        }
        gateway.connection().close();
    });

    Ok(BotHandle { shard_manager })
}
