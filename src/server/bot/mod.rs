//! Discord bot connection and gateway event handling.
//!
//! The bot runs on the gateway executor. Its event handler keeps the gateway client's
//! guild cache current and drives the connection state machine; it never talks to the
//! request-handling side directly.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, deletion and roles
//! - `GUILD_MEMBERS` - Receive events about guild member changes (privileged intent)
//! - `GUILD_PRESENCES` - Receive member status changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `GUILD_PRESENCES` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
