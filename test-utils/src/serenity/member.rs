//! Test factory for creating Serenity Member objects.

use serenity::all::{GuildMemberUpdateEvent, GuildMembersChunkEvent, Member, OnlineStatus};

use super::presence::presence_json;

/// Customizable fields of a test guild member.
///
/// Start from [`TestMember::new`] and override fields with struct update syntax.
#[derive(Debug, Clone)]
pub struct TestMember {
    pub guild_id: u64,
    pub user_id: u64,
    pub username: &'static str,
    pub nick: Option<&'static str>,
    pub global_name: Option<&'static str>,
    pub avatar: Option<&'static str>,
    pub bot: bool,
    pub role_ids: &'static [u64],
    /// Raw `UserPublicFlags` bits.
    pub public_flags: u32,
}

impl TestMember {
    /// A human member with no nickname, avatar, roles or flags.
    pub fn new(guild_id: u64, user_id: u64, username: &'static str) -> Self {
        Self {
            guild_id,
            user_id,
            username,
            nick: None,
            global_name: None,
            avatar: None,
            bot: false,
            role_ids: &[],
            public_flags: 0,
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        let roles: Vec<String> = self.role_ids.iter().map(|id| id.to_string()).collect();
        let avatar = self.avatar.map(|hash| format!("{:0<32}", hash));

        serde_json::json!({
            "guild_id": self.guild_id.to_string(),
            "user": {
                "id": self.user_id.to_string(),
                "username": self.username,
                "discriminator": "0",
                "global_name": self.global_name,
                "avatar": avatar,
                "bot": self.bot,
                "public_flags": self.public_flags,
            },
            "nick": self.nick,
            "avatar": null,
            "roles": roles,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
        })
    }
}

/// Creates a test Serenity Member.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let member = create_test_member(TestMember {
///     nick: Some("Ace"),
///     role_ids: &[11, 12],
///     ..TestMember::new(1, 2, "alice")
/// });
/// ```
pub fn create_test_member(member: TestMember) -> Member {
    serde_json::from_value(member.to_json())
        .expect("Failed to create test member - invalid JSON structure")
}

/// Creates a test `GUILD_MEMBER_UPDATE` event carrying the member's new state.
///
/// # Panics
/// - If the JSON cannot be deserialized into the event (indicates invalid test data)
pub fn create_test_member_update(member: TestMember) -> GuildMemberUpdateEvent {
    serde_json::from_value(member.to_json())
        .expect("Failed to create test member update - invalid JSON structure")
}

/// Creates a single-chunk test `GUILD_MEMBERS_CHUNK` event.
///
/// # Arguments
/// - `guild_id` - Guild the chunk was requested for
/// - `members` - Members in the chunk
/// - `presences` - `(user_id, status)` pairs, or `None` when presences were not requested
///
/// # Panics
/// - If the JSON cannot be deserialized into the event (indicates invalid test data)
pub fn create_test_member_chunk(
    guild_id: u64,
    members: Vec<TestMember>,
    presences: Option<Vec<(u64, OnlineStatus)>>,
) -> GuildMembersChunkEvent {
    let members: Vec<serde_json::Value> = members.iter().map(TestMember::to_json).collect();
    let presences: Option<Vec<serde_json::Value>> = presences.map(|presences| {
        presences
            .iter()
            .map(|(user_id, status)| presence_json(Some(guild_id), *user_id, *status))
            .collect()
    });

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "members": members,
        "chunk_index": 0,
        "chunk_count": 1,
        "not_found": [],
        "presences": presences,
        "nonce": null,
    }))
    .expect("Failed to create test member chunk - invalid JSON structure")
}
