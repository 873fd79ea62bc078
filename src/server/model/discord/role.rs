//! Discord guild role snapshot.
//!
//! Holds the parts of a serenity `Role` the dashboard needs: identity, display name,
//! hierarchy position and granted permissions. Roles are referenced by members through
//! their ids and resolved against the owning guild snapshot when rendering.

use serenity::all::{Permissions, Role};

/// Discord role within a guild, as last seen by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSnapshot {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name.
    pub name: String,
    /// Role position in the guild's role hierarchy (higher = more important).
    pub position: i64,
    /// Guild-wide permissions granted by the role.
    pub permissions: Permissions,
}

impl RoleSnapshot {
    /// Converts a serenity role received from the gateway into a snapshot.
    ///
    /// # Arguments
    /// - `role` - Role from a guild create or role event
    ///
    /// # Returns
    /// - `RoleSnapshot` - Owned copy of the role's display and permission data
    pub fn from_serenity(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            position: i64::from(role.position),
            permissions: role.permissions,
        }
    }

    /// Whether the role grants the administrator permission.
    pub fn is_administrator(&self) -> bool {
        self.permissions.contains(Permissions::ADMINISTRATOR)
    }
}
