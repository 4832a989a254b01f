use super::*;

#[test]
fn role_default_is_public() {
    assert_eq!(Role::default(), Role::Public);
}

#[test]
fn role_parse_round_trips_machine_names() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("investor"), None);
}

#[test]
fn only_startup_and_sponsor_self_register() {
    assert!(Role::Startup.self_registrable());
    assert!(Role::Sponsor.self_registrable());
    assert!(!Role::Admin.self_registrable());
    assert!(!Role::Public.self_registrable());
}

#[test]
fn role_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Sponsor).unwrap(), "\"sponsor\"");
}
