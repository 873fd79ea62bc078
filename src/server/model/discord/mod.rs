//! Snapshots of Discord state held in the gateway cache.
//!
//! Each snapshot is an owned copy of the serenity model fields the dashboard reads,
//! converted once when the gateway event arrives.

pub mod badge;
pub mod guild;
pub mod guild_member;
pub mod presence;
pub mod role;

pub use badge::Badge;
pub use guild::GuildSnapshot;
pub use guild_member::MemberSnapshot;
pub use presence::PresenceStatus;
pub use role::RoleSnapshot;
