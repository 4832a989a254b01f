//! Role-scoped navigation lists published to the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteProvider` wraps the app layout. It derives a `RouteContext` from the
//! `AuthState` signal in a memo, so navbar, sidebar and footer re-render only
//! when the signed-in role actually changes their contents.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::access::routes_for_surface;
use super::table::{RouteEntry, Surface};
use crate::state::auth::AuthState;
use crate::types::Role;

/// Navigation lists derived for one role.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteContext {
    pub role: Role,
    pub navbar: Vec<&'static RouteEntry>,
    pub sidebar: Vec<&'static RouteEntry>,
    pub footer: Vec<&'static RouteEntry>,
}

impl RouteContext {
    #[must_use]
    pub fn derive(auth: &AuthState) -> Self {
        let role = auth.role();
        let authenticated = auth.is_authenticated();
        let surface = |s: Surface| -> Vec<&'static RouteEntry> {
            routes_for_surface(role, s)
                .into_iter()
                .filter(|r| !(authenticated && r.guest_only))
                .collect()
        };
        Self {
            role,
            navbar: surface(Surface::Navbar),
            sidebar: surface(Surface::Sidebar),
            footer: surface(Surface::Footer),
        }
    }

    #[must_use]
    pub fn surface(&self, surface: Surface) -> &[&'static RouteEntry] {
        match surface {
            Surface::Navbar => &self.navbar,
            Surface::Sidebar => &self.sidebar,
            Surface::Footer => &self.footer,
        }
    }
}

/// Provide a `Memo<RouteContext>` tracking `auth` to all descendants.
#[component]
pub fn RouteProvider(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let routes = Memo::new(move |_| RouteContext::derive(&auth.get()));
    provide_context(routes);
    children()
}

/// Fetch the memo installed by `RouteProvider`.
pub fn use_route_context() -> Memo<RouteContext> {
    expect_context::<Memo<RouteContext>>()
}
