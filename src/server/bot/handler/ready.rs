//! Connection lifecycle event handlers.
//!
//! These handlers drive the gateway client's connection state. Moderation requests are
//! only accepted while the state is `Ready`, so a shard dropping its session makes the
//! dashboard answer 503 until the session is resumed or re-identified.

use dioxus_logger::tracing;
use serenity::all::{ConnectionStage, Ready, ShardStageUpdateEvent};

use crate::server::gateway::{connection::ConnectionState, GatewayClient};

/// Handles the ready event when the bot completes its handshake with Discord.
///
/// Fires once after the first identify and again whenever a shard has to re-identify
/// after losing its session. Either way the connection becomes `Ready`.
///
/// # Arguments
/// - `gateway` - Gateway client whose connection state is updated
/// - `ready` - Ready event data containing bot user information
pub fn handle_ready(gateway: &GatewayClient, ready: Ready) {
    mark_ready(gateway);
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}

/// Handles the resumed event when a shard restores its previous session.
pub fn handle_resume(gateway: &GatewayClient) {
    mark_ready(gateway);
    tracing::info!("Discord session resumed");
}

/// Handles a shard stage change by dropping out of `Ready` while the shard is not
/// connected.
pub fn handle_shard_stage_update(gateway: &GatewayClient, event: ShardStageUpdateEvent) {
    handle_stage(gateway, event.new);
}

fn handle_stage(gateway: &GatewayClient, stage: ConnectionStage) {
    if stage == ConnectionStage::Connected {
        return;
    }

    if gateway.connection().transition(ConnectionState::Reconnecting) {
        tracing::warn!("Discord connection lost ({}), reconnecting", stage);
    }
}

fn mark_ready(gateway: &GatewayClient) {
    let connection = gateway.connection();
    if connection.is_ready() {
        return;
    }

    let previous = connection.state();
    if !connection.transition(ConnectionState::Ready) {
        tracing::warn!("Ignoring ready signal while connection is {}", previous);
    }
}
