//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Member, Presence) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would send.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create an empty Serenity Guild
//! - `guild::create_test_guild_with` - Create a Guild with roles, members and presences
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_role_with_permissions` - Create a Role carrying permissions
//! - `member::create_test_member` - Create Serenity Member objects
//! - `member::create_test_member_update` - Create member update events
//! - `member::create_test_member_chunk` - Create member chunk events
//! - `presence::create_test_presence` - Create Serenity Presence objects

pub mod guild;
pub mod member;
pub mod presence;
pub mod role;

pub use guild::create_test_guild;
pub use member::create_test_member;
pub use presence::create_test_presence;
pub use role::create_test_role;
