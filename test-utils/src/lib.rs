//! Guildboard Test Utils
//!
//! Provides shared testing utilities for the guildboard application. Gateway events and
//! cache snapshots are built from serenity models, which have no public constructors; the
//! factories here produce them by deserializing JSON shaped like Discord's payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{guild::{create_test_guild_with, TestGuild}, member::TestMember};
//!
//! #[test]
//! fn test_guild_conversion() {
//!     let guild = create_test_guild_with(TestGuild {
//!         members: vec![TestMember::new(1, 2, "alice")],
//!         ..TestGuild::new(1, "Test Guild", 2)
//!     });
//!
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
