//! Role-scoped side navigation with badges.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::context::use_route_context;
use crate::nav::table::RouteEntry;

#[component]
pub fn Sidebar() -> impl IntoView {
    let routes = use_route_context();
    let location = use_location();

    view! {
        <aside class="sidebar">
            <p class="sidebar__role">{move || routes.get().role.label()}</p>
            <ul class="sidebar__list">
                {move || {
                    let current = location.pathname.get();
                    routes
                        .get()
                        .sidebar
                        .into_iter()
                        .map(|route| sidebar_item(route, current == route.path))
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

fn sidebar_item(route: &'static RouteEntry, active: bool) -> impl IntoView {
    view! {
        <li class="sidebar__item" class:sidebar__item--active=active>
            <a class="sidebar__link" href=route.path>
                {route.label}
            </a>
            {route.badge.map(|badge| view! { <span class="sidebar__badge">{badge.label()}</span> })}
            {route.is_new.then(|| view! { <span class="sidebar__new" aria-hidden="true"></span> })}
        </li>
    }
}
