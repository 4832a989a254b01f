use super::*;
use crate::types::User;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Test".to_owned(),
            email: "t@example.com".to_owned(),
            role,
        }),
        loading: false,
    }
}

fn paths(routes: &[&'static RouteEntry]) -> Vec<&'static str> {
    routes.iter().map(|r| r.path).collect()
}

#[test]
fn anonymous_navbar_offers_login_and_register() {
    let ctx = RouteContext::derive(&AuthState::default());
    assert_eq!(ctx.role, Role::Public);
    assert_eq!(paths(&ctx.navbar), vec!["/", "/login", "/register"]);
    assert_eq!(paths(&ctx.sidebar), vec!["/"]);
    assert_eq!(paths(&ctx.footer), vec!["/"]);
}

#[test]
fn signed_in_navbar_hides_guest_only_links() {
    let ctx = RouteContext::derive(&signed_in(Role::Sponsor));
    assert_eq!(paths(&ctx.navbar), vec!["/"]);
    assert_eq!(paths(&ctx.sidebar), vec!["/", "/dashboard/sponsor", "/contracts"]);
}

#[test]
fn startup_sidebar() {
    let ctx = RouteContext::derive(&signed_in(Role::Startup));
    assert_eq!(
        paths(ctx.surface(Surface::Sidebar)),
        vec!["/", "/dashboard/startup", "/projects/my", "/contracts"]
    );
}

#[test]
fn every_surface_only_shows_role_or_public_routes() {
    for role in [Role::Startup, Role::Sponsor, Role::Admin] {
        let ctx = RouteContext::derive(&signed_in(role));
        for surface in [Surface::Navbar, Surface::Sidebar, Surface::Footer] {
            for route in ctx.surface(surface) {
                assert!(route.roles.contains(&role) || route.roles.contains(&Role::Public));
                assert!(route.on_surface(surface));
            }
        }
    }
}

#[test]
fn derive_recomputes_after_logout() {
    let mut auth = signed_in(Role::Admin);
    let before = RouteContext::derive(&auth);
    auth.logout();
    let after = RouteContext::derive(&auth);
    assert_ne!(before, after);
    assert_eq!(after, RouteContext::derive(&AuthState::default()));
}
