use super::*;

/// Tests that a granted ban drops the member from the cache.
///
/// Expected: Ok(Banned) and member 3 gone
#[tokio::test]
async fn bans_member_and_updates_cache() {
    let backend = FakeBackend::new();
    let gateway = ready_gateway(backend.clone(), two_guilds());

    let outcome = gateway.ban(1, 3, REASON).await;

    assert_eq!(outcome.unwrap(), ModerationOutcome::Banned);
    assert_eq!(backend.calls(), vec![ModerationRequest::ban(1, 3)]);
    assert!(matches!(
        gateway.get_member(1, 3),
        Err(GatewayError::MemberNotFound { .. })
    ));
}

/// Tests that a denied ban carries Discord's reason.
///
/// Expected: Err(Forbidden) whose message contains the reason
#[tokio::test]
async fn denied_ban_reports_reason() {
    let backend = FakeBackend::new();
    backend.deny(FakeAction::Ban, "Missing Permissions");
    let gateway = ready_gateway(backend, two_guilds());

    let err = gateway.ban(1, 3, REASON).await.unwrap_err();

    assert_eq!(err.to_string(), "This was not allowed, Missing Permissions");
    assert!(gateway.get_member(1, 3).is_ok());
}

/// Tests that banning an already removed member is NotFound.
///
/// Expected: Ok then Err(MemberNotFound)
#[tokio::test]
async fn second_ban_is_not_found() {
    let gateway = ready_gateway(FakeBackend::new(), two_guilds());

    gateway.ban(1, 3, REASON).await.unwrap();
    let again = gateway.ban(1, 3, REASON).await;

    assert!(matches!(again, Err(GatewayError::MemberNotFound { .. })));
}
