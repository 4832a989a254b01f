use super::*;
use crate::types::User;

fn viewer(email: &str, role: Role) -> AuthState {
    AuthState {
        user: Some(User { id: "v".to_owned(), name: "v".to_owned(), email: email.to_owned(), role }),
        loading: false,
    }
}

#[test]
fn public_projects_are_visible_to_everyone() {
    let store = ProjectStore::seeded();
    let approved = store.get("1").unwrap();
    assert!(detail_visible(approved, &AuthState::default()));
}

#[test]
fn pending_project_visible_to_owner_and_admin_only() {
    let store = ProjectStore::seeded();
    let pending = store.get("3").unwrap();
    assert!(!detail_visible(pending, &AuthState::default()));
    assert!(!detail_visible(pending, &viewer("sponsor@example.com", Role::Sponsor)));
    assert!(detail_visible(pending, &viewer("startup@example.com", Role::Startup)));
    assert!(detail_visible(pending, &viewer("admin@example.com", Role::Admin)));
}
