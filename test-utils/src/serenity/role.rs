//! Test factory for creating Serenity Role objects.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10);
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    role_json(role_id, name, color, position, Permissions::empty(), None)
}

/// Creates a test Serenity Role carrying the given permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy
/// - `permissions` - Permission bits granted by the role
pub fn create_test_role_with_permissions(
    role_id: u64,
    name: &str,
    position: i16,
    permissions: Permissions,
) -> Role {
    role_json(role_id, name, 0, position, permissions, None)
}

/// Creates a test Serenity Role as delivered by role events, tagged with its guild.
///
/// # Arguments
/// - `guild_id` - Guild the role belongs to
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy
pub fn create_test_guild_role(guild_id: u64, role_id: u64, name: &str, position: i16) -> Role {
    role_json(role_id, name, 0, position, Permissions::empty(), Some(guild_id))
}

fn role_json(
    role_id: u64,
    name: &str,
    color: u32,
    position: i16,
    permissions: Permissions,
    guild_id: Option<u64>,
) -> Role {
    let mut value = serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": false,
    });
    if let Some(guild_id) = guild_id {
        value["guild_id"] = serde_json::json!(guild_id.to_string());
    }

    serde_json::from_value(value).expect("Failed to create test role - invalid JSON structure")
}
