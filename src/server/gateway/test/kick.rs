use super::*;

/// Tests that a granted kick reaches the backend and drops the member from the cache.
///
/// Expected: Ok(Kicked), member 2 gone, member 3 kept
#[tokio::test]
async fn kicks_member_and_updates_cache() {
    let backend = FakeBackend::new();
    let gateway = ready_gateway(backend.clone(), two_guilds());

    let outcome = gateway.kick(1, 2, REASON).await;

    assert_eq!(outcome.unwrap(), ModerationOutcome::Kicked);
    assert_eq!(backend.calls(), vec![ModerationRequest::kick(1, 2)]);
    let members: Vec<u64> = gateway.get_guild(1).unwrap().members.keys().copied().collect();
    assert_eq!(members, vec![3]);
}

/// Tests that a denied kick is reported as Forbidden and leaves the cache alone.
///
/// Expected: Err(Forbidden("Missing Permissions")), member 2 still cached
#[tokio::test]
async fn denied_kick_keeps_member() {
    let backend = FakeBackend::new();
    backend.deny(FakeAction::Kick, "Missing Permissions");
    let gateway = ready_gateway(backend, two_guilds());

    let result = gateway.kick(1, 2, REASON).await;

    assert!(matches!(result, Err(GatewayError::Forbidden(ref reason)) if reason == "Missing Permissions"));
    assert!(gateway.get_member(1, 2).is_ok());
}

/// Tests that kicking an uncached member never reaches the backend.
///
/// Expected: Err(MemberNotFound) and no backend calls
#[tokio::test]
async fn unknown_member_is_not_sent() {
    let backend = FakeBackend::new();
    let gateway = ready_gateway(backend.clone(), two_guilds());

    let result = gateway.kick(1, 999, REASON).await;

    assert!(matches!(result, Err(GatewayError::MemberNotFound { .. })));
    assert!(backend.calls().is_empty());
}

/// Tests that kicking while the connection is not ready fails without a backend call.
///
/// Expected: Err(NotConnected) and no backend calls
#[tokio::test]
async fn refuses_kick_when_not_connected() {
    let backend = FakeBackend::new();
    let gateway = GatewayClient::new(backend.clone());
    for guild in two_guilds() {
        gateway.cache().upsert_guild(guild);
    }

    let result = gateway.kick(1, 2, REASON).await;

    assert!(matches!(result, Err(GatewayError::NotConnected)));
    assert!(backend.calls().is_empty());
}
