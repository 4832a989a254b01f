//! Page footer with role-scoped links.

use leptos::prelude::*;

use crate::nav::context::use_route_context;

#[component]
pub fn Footer() -> impl IntoView {
    let routes = use_route_context();

    view! {
        <footer class="footer">
            <nav class="footer__links">
                {move || {
                    routes
                        .get()
                        .footer
                        .into_iter()
                        .map(|route| view! { <a class="footer__link" href=route.path>{route.label}</a> })
                        .collect_view()
                }}
            </nav>
            <p class="footer__copy">"© تمويل · منصة ربط المشاريع الناشئة بالمستثمرين"</p>
        </footer>
    }
}
