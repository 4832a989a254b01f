//! Fallback for paths the router does not know.

use leptos::prelude::*;

use crate::nav::table::HOME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"الصفحة غير موجودة"</h1>
            <p><a href=HOME>"العودة إلى الرئيسية"</a></p>
        </section>
    }
}
