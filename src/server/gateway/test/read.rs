use super::*;

/// Tests that guilds are listed in the order they were cached.
///
/// Expected: ["Alpha", "Beta"]
#[test]
fn lists_cached_guilds() {
    let gateway = ready_gateway(FakeBackend::new(), two_guilds());

    let names: Vec<String> = gateway.list_guilds().iter().map(|g| g.name.clone()).collect();

    assert_eq!(names, vec!["Alpha", "Beta"]);
}

/// Tests lookups of unknown guilds and members.
///
/// Expected: GuildNotFound for guild 999, MemberNotFound for member 999 of guild 1
#[test]
fn reports_unknown_guild_and_member() {
    let gateway = ready_gateway(FakeBackend::new(), two_guilds());

    assert!(matches!(
        gateway.get_guild(999),
        Err(GatewayError::GuildNotFound(999))
    ));
    assert!(matches!(
        gateway.get_member(1, 999),
        Err(GatewayError::MemberNotFound {
            guild_id: 1,
            member_id: 999
        })
    ));
    assert!(matches!(
        gateway.get_member(999, 2),
        Err(GatewayError::GuildNotFound(999))
    ));
}

/// Tests that cache reads keep working while the connection is down.
///
/// Expected: the last known guilds are returned after the connection closes
#[test]
fn reads_stale_cache_when_disconnected() {
    let gateway = ready_gateway(FakeBackend::new(), two_guilds());
    gateway.connection().close();

    assert_eq!(gateway.list_guilds().len(), 2);
    assert_eq!(gateway.get_member(1, 2).unwrap().username, "alice");
}
