//! Breadcrumb trail for the current location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::breadcrumb::{derive, should_render};

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let location = use_location();
    let crumbs = Memo::new(move |_| derive(&location.pathname.get()));

    move || {
        let crumbs = crumbs.get();
        if !should_render(&crumbs) {
            return None;
        }
        let last = crumbs.len() - 1;
        let items = crumbs
            .into_iter()
            .enumerate()
            .map(|(i, crumb)| {
                if i == last {
                    view! { <li class="breadcrumb__item" aria-current="page">{crumb.label}</li> }.into_any()
                } else {
                    view! {
                        <li class="breadcrumb__item">
                            <a href=crumb.path>{crumb.label}</a>
                        </li>
                    }
                    .into_any()
                }
            })
            .collect_view();
        Some(view! {
            <nav class="breadcrumb" aria-label="مسار التنقل">
                <ol class="breadcrumb__list">{items}</ol>
            </nav>
        })
    }
}
