//! Server-side domain models.
//!
//! Discord state lives here as immutable snapshots owned by the gateway cache; moderation
//! requests describe the mutating work handed across the bridge. Both are converted to
//! view DTOs at the service boundary.

pub mod discord;
pub mod moderation;
