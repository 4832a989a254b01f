use super::*;
use crate::nav::table::{CONTRACTS, HOME, LOGIN, PROJECT_DETAIL, REPORTS, USERS, routes};

#[test]
fn routes_for_role_matches_role_or_public_membership() {
    for role in Role::ALL {
        let visible = routes_for_role(role);
        for route in routes() {
            let expected = route.roles.contains(&role) || route.roles.contains(&Role::Public);
            assert_eq!(
                visible.iter().any(|r| r.path == route.path),
                expected,
                "{} for {role:?}",
                route.path
            );
        }
    }
}

#[test]
fn routes_for_role_preserves_table_order() {
    let table_order: Vec<_> = routes().iter().map(|r| r.path).collect();
    for role in Role::ALL {
        let positions: Vec<_> = routes_for_role(role)
            .iter()
            .map(|r| table_order.iter().position(|p| *p == r.path).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn public_sidebar_shows_only_home() {
    let paths: Vec<_> = routes_for_surface(Role::Public, Surface::Sidebar).iter().map(|r| r.path).collect();
    assert_eq!(paths, vec![HOME]);
}

#[test]
fn admin_sidebar_lists_admin_tools() {
    let paths: Vec<_> = routes_for_surface(Role::Admin, Surface::Sidebar).iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec!["/", "/dashboard/admin", "/users", "/projects/pending", "/reports"]
    );
}

#[test]
fn sponsor_sidebar_excludes_startup_routes() {
    let paths: Vec<_> = routes_for_surface(Role::Sponsor, Surface::Sidebar).iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/", "/dashboard/sponsor", "/contracts"]);
}

#[test]
fn footer_for_admin_includes_reports() {
    let paths: Vec<_> = routes_for_surface(Role::Admin, Surface::Footer).iter().map(|r| r.path).collect();
    assert_eq!(paths, vec![HOME, REPORTS]);
}

#[test]
fn has_access_false_for_unknown_paths() {
    for role in Role::ALL {
        assert!(!has_access("/does-not-exist", role));
        assert!(!has_access("/projects/42", role));
    }
}

#[test]
fn template_paths_are_not_accessible() {
    for role in Role::ALL {
        assert!(!has_access(PROJECT_DETAIL, role));
        assert_eq!(
            check_access(PROJECT_DETAIL, role),
            Err(AccessError::UnknownRoute(PROJECT_DETAIL.to_owned()))
        );
    }
}

#[test]
fn has_access_respects_roles() {
    assert!(has_access(USERS, Role::Admin));
    assert!(!has_access(USERS, Role::Startup));
    assert!(has_access(CONTRACTS, Role::Sponsor));
    assert!(has_access(LOGIN, Role::Admin));
    assert!(has_access(HOME, Role::Public));
}

#[test]
fn check_access_distinguishes_unknown_from_forbidden() {
    assert_eq!(
        check_access("/nowhere", Role::Admin),
        Err(AccessError::UnknownRoute("/nowhere".to_owned()))
    );
    assert_eq!(
        check_access(USERS, Role::Sponsor),
        Err(AccessError::Forbidden { path: USERS.to_owned(), role: Role::Sponsor })
    );
    assert_eq!(check_access(USERS, Role::Admin).map(|r| r.path), Ok(USERS));
}

#[test]
fn match_route_prefers_literal_rows() {
    assert_eq!(match_route("/projects/my").map(|r| r.path), Some("/projects/my"));
    assert_eq!(match_route("/projects/pending/").map(|r| r.path), Some("/projects/pending"));
    assert_eq!(match_route("/projects/42").map(|r| r.path), Some(PROJECT_DETAIL));
    assert_eq!(match_route("/projects"), None);
}

#[test]
fn dashboard_path_per_role() {
    assert_eq!(dashboard_path(Role::Startup), "/dashboard/startup");
    assert_eq!(dashboard_path(Role::Sponsor), "/dashboard/sponsor");
    assert_eq!(dashboard_path(Role::Admin), "/dashboard/admin");
    assert_eq!(dashboard_path(Role::Public), "/");
}

#[test]
fn normalize_collapses_slashes() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("//users//"), "/users");
}
