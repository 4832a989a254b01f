use super::*;
use crate::nav::table::{ADMIN_DASHBOARD, CONTRACTS, MY_PROJECTS, PROJECT_DETAIL, USERS};
use crate::types::User;

fn state(role: Option<Role>, loading: bool) -> AuthState {
    AuthState {
        user: role.map(|role| User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
        }),
        loading,
    }
}

#[test]
fn pending_while_loading() {
    let gate = evaluate_gate(&state(Some(Role::Admin), true), ADMIN_DASHBOARD);
    assert_eq!(gate, GateState::Pending);
    assert_eq!(gate.redirect_target(), None);
}

#[test]
fn unauthenticated_redirects_to_login() {
    let gate = evaluate_gate(&state(None, false), MY_PROJECTS);
    assert_eq!(gate, GateState::Unauthenticated);
    assert_eq!(gate.redirect_target(), Some("/login"));
}

#[test]
fn startup_on_admin_page_goes_to_startup_dashboard() {
    let gate = evaluate_gate(&state(Some(Role::Startup), false), ADMIN_DASHBOARD);
    assert_eq!(gate, GateState::Unauthorized(Role::Startup));
    assert_eq!(gate.redirect_target(), Some("/dashboard/startup"));
}

#[test]
fn unauthorized_redirects_follow_role() {
    for (role, target) in [
        (Role::Startup, "/dashboard/startup"),
        (Role::Sponsor, "/dashboard/sponsor"),
        (Role::Public, "/"),
    ] {
        let gate = evaluate_gate(&state(Some(role), false), USERS);
        assert_eq!(gate.redirect_target(), Some(target));
    }
}

#[test]
fn allowed_role_is_authorized() {
    let gate = evaluate_gate(&state(Some(Role::Sponsor), false), CONTRACTS);
    assert_eq!(gate, GateState::Authorized);
    assert_eq!(gate.redirect_target(), None);
}

#[test]
fn unknown_path_sends_signed_in_user_to_own_dashboard() {
    for (role, target) in [
        (Role::Startup, "/dashboard/startup"),
        (Role::Sponsor, "/dashboard/sponsor"),
        (Role::Admin, "/dashboard/admin"),
    ] {
        let gate = evaluate_gate(&state(Some(role), false), "/nowhere");
        assert_eq!(gate, GateState::Unauthorized(role));
        assert_eq!(gate.redirect_target(), Some(target));
    }
}

#[test]
fn template_path_never_authorizes() {
    let gate = evaluate_gate(&state(Some(Role::Admin), false), PROJECT_DETAIL);
    assert_eq!(gate.redirect_target(), Some("/dashboard/admin"));
}

#[test]
fn unknown_path_still_sends_guests_to_login() {
    assert_eq!(evaluate_gate(&state(None, false), "/nowhere").redirect_target(), Some("/login"));
}

#[test]
fn signed_in_target_points_at_dashboard() {
    assert_eq!(signed_in_target(&state(None, false)), None);
    assert_eq!(signed_in_target(&state(Some(Role::Sponsor), false)), Some("/dashboard/sponsor"));
}
