//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request through
//! Axum's state extraction. Every field is cheap to clone.

use std::sync::Arc;

use crate::server::{bridge::Bridge, gateway::GatewayClient};

#[derive(Clone)]
pub struct AppState {
    /// Gateway client whose cache serves page renders and validates moderation targets.
    pub gateway: GatewayClient,

    /// Hand-off to the gateway executor for moderation actions.
    pub bridge: Bridge,

    /// Audit log reason attached to kicks and bans.
    pub moderation_reason: Arc<str>,
}

impl AppState {
    pub fn new(gateway: GatewayClient, bridge: Bridge, moderation_reason: &str) -> Self {
        Self {
            gateway,
            bridge,
            moderation_reason: Arc::from(moderation_reason),
        }
    }
}
