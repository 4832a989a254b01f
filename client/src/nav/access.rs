//! Role-based route visibility and access checks.
//!
//! All functions are pure over the static table. Unknown paths fail closed.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::table::{self, RouteEntry, Surface};
use crate::types::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    #[error("role {role:?} may not open {path}")]
    Forbidden { path: String, role: Role },
}

/// Routes visible to `role`, in table order.
#[must_use]
pub fn routes_for_role(role: Role) -> Vec<&'static RouteEntry> {
    table::routes().iter().filter(|r| r.visible_to(role)).collect()
}

/// Routes visible to `role` that are linked from `surface`, in table order.
#[must_use]
pub fn routes_for_surface(role: Role, surface: Surface) -> Vec<&'static RouteEntry> {
    routes_for_role(role)
        .into_iter()
        .filter(|r| r.on_surface(surface))
        .collect()
}

/// Resolve `path` by exact table path and check that `role` may open it.
///
/// Parameter rows such as `/projects/[id]` are templates, not paths, and never
/// resolve here.
///
/// # Errors
///
/// `UnknownRoute` when no literal table row has this exact path, `Forbidden`
/// when the row exists but is not visible to `role`.
pub fn check_access(path: &str, role: Role) -> Result<&'static RouteEntry, AccessError> {
    let route = table::find(path)
        .filter(|r| !r.pattern.is_dynamic())
        .ok_or_else(|| AccessError::UnknownRoute(path.to_owned()))?;
    if route.visible_to(role) {
        Ok(route)
    } else {
        Err(AccessError::Forbidden { path: path.to_owned(), role })
    }
}

#[must_use]
pub fn has_access(path: &str, role: Role) -> bool {
    check_access(path, role).is_ok()
}

/// Structural lookup for a concrete request path. Exact (literal) rows win
/// over parameter rows.
#[must_use]
pub fn match_route(path: &str) -> Option<&'static RouteEntry> {
    let normalized = normalize(path);
    table::find(&normalized).or_else(|| {
        table::routes()
            .iter()
            .filter(|r| r.pattern.is_dynamic())
            .find(|r| r.pattern.matches(&normalized))
    })
}

/// Landing page for a role after sign-in or a rejected gate.
#[must_use]
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Startup => table::STARTUP_DASHBOARD,
        Role::Sponsor => table::SPONSOR_DASHBOARD,
        Role::Admin => table::ADMIN_DASHBOARD,
        Role::Public => table::HOME,
    }
}

/// Collapse repeated and trailing slashes; the result always starts with `/`.
#[must_use]
pub fn normalize(path: &str) -> String {
    let joined = super::pattern::split_path(path).collect::<Vec<_>>().join("/");
    format!("/{joined}")
}
