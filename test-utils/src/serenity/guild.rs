//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON shaped like a `GUILD_CREATE` payload, which
//! carries the guild's roles, members and presences inline.

use serenity::all::{Guild, OnlineStatus, Role};

use super::{member::TestMember, presence::presence_json};

/// Creates a test Serenity Guild with no roles, members or presences.
///
/// The icon hash is padded to 32 characters (Discord's icon hash format) if it's shorter.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
/// assert_eq!(guild.icon_hash.unwrap().to_string(), "abc12300000000000000000000000000");
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    create_test_guild_with(TestGuild {
        icon_hash: icon_hash.map(str::to_string),
        ..TestGuild::new(guild_id, name, 100000000000000000)
    })
}

/// Customizable contents of a test guild.
///
/// Start from [`TestGuild::new`] and override fields with struct update syntax.
#[derive(Debug, Clone)]
pub struct TestGuild {
    pub guild_id: u64,
    pub name: String,
    pub owner_id: u64,
    pub icon_hash: Option<String>,
    pub roles: Vec<Role>,
    pub members: Vec<TestMember>,
    /// `(user_id, status)` pairs.
    pub presences: Vec<(u64, OnlineStatus)>,
}

impl TestGuild {
    pub fn new(guild_id: u64, name: &str, owner_id: u64) -> Self {
        Self {
            guild_id,
            name: name.to_string(),
            owner_id,
            icon_hash: None,
            roles: Vec::new(),
            members: Vec::new(),
            presences: Vec::new(),
        }
    }
}

/// Creates a test Serenity Guild with the given roles, members and presences.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let guild = create_test_guild_with(TestGuild {
///     roles: vec![create_test_role(1, "@everyone", 0, 0)],
///     members: vec![TestMember::new(1, 2, "alice")],
///     presences: vec![(2, OnlineStatus::Online)],
///     ..TestGuild::new(1, "Test Guild", 2)
/// });
/// ```
pub fn create_test_guild_with(guild: TestGuild) -> Guild {
    // Animated icons carry an "a_" prefix and are 34 characters long
    let formatted_icon = guild.icon_hash.as_deref().map(|hash| {
        if hash.starts_with("a_") {
            format!("{:0<34}", hash)
        } else {
            format!("{:0<32}", hash)
        }
    });

    let roles: Vec<serde_json::Value> = guild
        .roles
        .iter()
        .map(|role| serde_json::to_value(role).expect("Failed to serialize test role"))
        .collect();
    let members: Vec<serde_json::Value> = guild.members.iter().map(TestMember::to_json).collect();
    let presences: Vec<serde_json::Value> = guild
        .presences
        .iter()
        .map(|(user_id, status)| presence_json(None, *user_id, *status))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild.guild_id.to_string(),
        "name": guild.name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": guild.owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": members.len(),
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": presences,
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": members,
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
