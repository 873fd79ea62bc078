//! Presence event handler for member status changes.

use dioxus_logger::tracing;
use serenity::all::Presence;

use crate::server::{gateway::GatewayClient, model::discord::PresenceStatus};

/// Handles the presence_update event by updating the member's cached status.
///
/// Presences without a guild (DM or friend presences) and members not in the cache are
/// ignored.
pub fn handle_presence_update(gateway: &GatewayClient, presence: Presence) {
    let Some(guild_id) = presence.guild_id else {
        return;
    };

    let status = PresenceStatus::from(presence.status);
    if !gateway
        .cache()
        .set_presence(guild_id.get(), presence.user.id.get(), status)
    {
        tracing::trace!(
            "Presence update for member {} in guild {} left the cache unchanged",
            presence.user.id,
            guild_id
        );
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::OnlineStatus;
    use test_utils::serenity::presence::create_test_presence;

    use crate::server::gateway::testing::{guild, member, ready_gateway, FakeBackend};

    use super::*;

    /// Tests that a status change reaches the cached member.
    ///
    /// Expected: member shown as do-not-disturb
    #[test]
    fn updates_member_status() {
        let gateway = ready_gateway(
            FakeBackend::new(),
            vec![guild(1, "Guild", &[member(2, "alice")])],
        );

        handle_presence_update(
            &gateway,
            create_test_presence(1, 2, OnlineStatus::DoNotDisturb),
        );

        assert_eq!(gateway.get_member(1, 2).unwrap().status, PresenceStatus::Dnd);
    }

    /// Tests that presences for unknown members leave the cache alone.
    ///
    /// Expected: no member added
    #[test]
    fn ignores_unknown_member() {
        let gateway = ready_gateway(FakeBackend::new(), vec![guild(1, "Guild", &[])]);

        handle_presence_update(&gateway, create_test_presence(1, 7, OnlineStatus::Online));

        assert!(gateway.get_member(1, 7).is_err());
    }
}
