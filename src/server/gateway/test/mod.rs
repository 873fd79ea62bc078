use crate::server::{
    error::gateway::GatewayError,
    gateway::{
        testing::{guild, member, ready_gateway, FakeAction, FakeBackend},
        GatewayClient,
    },
    model::moderation::{ModerationOutcome, ModerationRequest},
};

mod ban;
mod kick;
mod read;

const REASON: &str = "Requested by bot.";

/// Guild 1 with members 2 and 3, and guild 4 with no members.
fn two_guilds() -> Vec<crate::server::model::discord::GuildSnapshot> {
    vec![
        guild(1, "Alpha", &[member(2, "alice"), member(3, "bob")]),
        guild(4, "Beta", &[]),
    ]
}
