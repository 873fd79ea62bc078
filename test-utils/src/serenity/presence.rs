//! Test factory for creating Serenity Presence objects.

use serenity::all::{OnlineStatus, Presence};

pub(crate) fn presence_json(
    guild_id: Option<u64>,
    user_id: u64,
    status: OnlineStatus,
) -> serde_json::Value {
    serde_json::json!({
        "user": { "id": user_id.to_string() },
        "guild_id": guild_id.map(|id| id.to_string()),
        "status": status.name(),
        "activities": [],
        "client_status": null,
    })
}

/// Creates a test Serenity Presence as delivered by `presence_update`.
///
/// # Arguments
/// - `guild_id` - Guild the presence update was sent for
/// - `user_id` - User whose status changed
/// - `status` - New status
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
pub fn create_test_presence(guild_id: u64, user_id: u64, status: OnlineStatus) -> Presence {
    serde_json::from_value(presence_json(Some(guild_id), user_id, status))
        .expect("Failed to create test presence - invalid JSON structure")
}
