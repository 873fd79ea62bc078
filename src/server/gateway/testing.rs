//! Test doubles and snapshot builders for gateway-backed code.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use indexmap::IndexMap;
use serenity::all::Permissions;

use crate::server::{
    error::gateway::GatewayError,
    model::{
        discord::{GuildSnapshot, MemberSnapshot, PresenceStatus, RoleSnapshot},
        moderation::ModerationRequest,
    },
};

use super::{backend::ModerationBackend, connection::ConnectionState, GatewayClient};

/// Which backend primitive a fake response applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeAction {
    Kick,
    Ban,
    Leave,
}

/// Backend that records calls and answers as configured.
///
/// Every action succeeds unless denied or stalled.
#[derive(Default)]
pub struct FakeBackend {
    denials: Mutex<HashMap<FakeAction, String>>,
    stalled: Mutex<HashSet<FakeAction>>,
    calls: Mutex<Vec<ModerationRequest>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes `action` fail with a permission denial carrying `reason`.
    pub fn deny(&self, action: FakeAction, reason: &str) {
        self.denials
            .lock()
            .unwrap()
            .insert(action, reason.to_string());
    }

    /// Makes `action` never complete.
    pub fn stall(&self, action: FakeAction) {
        self.stalled.lock().unwrap().insert(action);
    }

    /// Requests that reached the backend, in arrival order.
    pub fn calls(&self) -> Vec<ModerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, action: FakeAction, request: ModerationRequest) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(request);

        let stalled = self.stalled.lock().unwrap().contains(&action);
        if stalled {
            std::future::pending::<()>().await;
        }

        let denial = self.denials.lock().unwrap().get(&action).cloned();
        match denial {
            Some(reason) => Err(GatewayError::Forbidden(reason)),
            None => Ok(()),
        }
    }
}

#[serenity::async_trait]
impl ModerationBackend for FakeBackend {
    async fn kick(&self, guild_id: u64, member_id: u64, _reason: &str) -> Result<(), GatewayError> {
        self.respond(FakeAction::Kick, ModerationRequest::kick(guild_id, member_id))
            .await
    }

    async fn ban(&self, guild_id: u64, member_id: u64, _reason: &str) -> Result<(), GatewayError> {
        self.respond(FakeAction::Ban, ModerationRequest::ban(guild_id, member_id))
            .await
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), GatewayError> {
        self.respond(FakeAction::Leave, ModerationRequest::leave(guild_id))
            .await
    }
}

/// Gateway client over `backend` with a ready connection and the given guilds cached.
pub fn ready_gateway(backend: Arc<FakeBackend>, guilds: Vec<GuildSnapshot>) -> GatewayClient {
    let gateway = GatewayClient::new(backend);
    gateway.connection().transition(ConnectionState::Connecting);
    gateway.connection().transition(ConnectionState::Ready);
    for guild in guilds {
        gateway.cache().upsert_guild(guild);
    }
    gateway
}

pub fn guild(guild_id: u64, name: &str, members: &[MemberSnapshot]) -> GuildSnapshot {
    let everyone = RoleSnapshot {
        role_id: guild_id,
        name: "@everyone".to_string(),
        position: 0,
        permissions: Permissions::empty(),
    };

    GuildSnapshot {
        guild_id,
        name: name.to_string(),
        icon_url: None,
        owner_id: 1,
        roles: IndexMap::from([(guild_id, everyone)]),
        members: members
            .iter()
            .map(|member| (member.user_id, member.clone()))
            .collect(),
    }
}

pub fn member(user_id: u64, name: &str) -> MemberSnapshot {
    MemberSnapshot {
        user_id,
        username: name.to_string(),
        display_name: name.to_string(),
        is_bot: false,
        avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        banner_url: None,
        status: PresenceStatus::Offline,
        role_ids: Vec::new(),
        badges: Vec::new(),
    }
}

pub fn role(role_id: u64, name: &str, position: i64) -> RoleSnapshot {
    RoleSnapshot {
        role_id,
        name: name.to_string(),
        position,
        permissions: Permissions::empty(),
    }
}
