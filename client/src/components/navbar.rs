//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the role-scoped navbar list from the route context plus the
//! signed-in user's name and a logout action. Logout only clears the session;
//! a protected page then redirects itself through its gate.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::context::use_route_context;
use crate::nav::table::HOME;
use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let routes = use_route_context();
    let location = use_location();

    let on_logout = move |_| auth.update(AuthState::logout);

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=HOME>"تمويل"</a>
            <nav class="navbar__links">
                {move || {
                    let current = location.pathname.get();
                    routes
                        .get()
                        .navbar
                        .into_iter()
                        .map(|route| {
                            let active = current == route.path;
                            view! {
                                <a
                                    class="navbar__link"
                                    class:navbar__link--active=active
                                    href=route.path
                                    aria-current=if active { Some("page") } else { None }
                                >
                                    {route.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <Show when=move || auth.get().is_authenticated()>
                <div class="navbar__user">
                    <span class="navbar__user-name">
                        {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                    <span class="navbar__user-role">{move || auth.get().role().label()}</span>
                    <button class="navbar__logout" on:click=on_logout>
                        "تسجيل الخروج"
                    </button>
                </div>
            </Show>
        </header>
    }
}
