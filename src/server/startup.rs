//! Bootstrap and teardown of the Discord side of the application.
//!
//! The bot is started through the bridge so that its client, shards and event handler
//! live on the gateway executor rather than on the HTTP runtime.

use dioxus_logger::tracing;

use crate::server::{
    bot::{self, start::BotHandle},
    bridge::Bridge,
    error::{gateway::GatewayError, AppError},
    gateway::GatewayClient,
};

/// Starts the Discord bot on the gateway executor.
///
/// Blocks a pool thread until the client is built; connecting and the initial guild
/// deliveries continue in the background.
///
/// # Arguments
/// - `bridge` - Hand-off to the gateway executor
/// - `token` - Bot token
/// - `gateway` - Gateway client the bot keeps up to date
///
/// # Returns
/// - `Ok(BotHandle)` - Bot starting on the executor
/// - `Err(AppError)` - The client could not be built or the executor is unavailable
pub async fn connect_gateway(
    bridge: Bridge,
    token: String,
    gateway: GatewayClient,
) -> Result<BotHandle, AppError> {
    let handle = tokio::task::spawn_blocking(move || {
        bridge.submit(bot::start::connect(token, gateway))
    })
    .await??;

    Ok(handle)
}

/// Shuts the bot's shards down on the gateway executor and marks the connection closed.
///
/// Failures are logged; shutdown continues regardless.
pub async fn disconnect_gateway(bridge: Bridge, handle: BotHandle, gateway: GatewayClient) {
    let result = tokio::task::spawn_blocking(move || {
        bridge.submit(async move {
            handle.shutdown().await;
            Ok::<(), GatewayError>(())
        })
    })
    .await;

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Failed to shut down Discord bot cleanly: {}", e),
        Err(e) => tracing::error!("Discord bot shutdown task failed: {}", e),
    }

    gateway.connection().close();
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
