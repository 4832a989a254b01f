//! Public landing page: searchable listing of open and funded projects.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{ProjectFilter, ProjectStore};

/// The category `<select>` uses an empty value for "all".
fn category_from_select(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() { None } else { Some(raw.to_owned()) }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let results = move || {
        let filter = ProjectFilter { query: query.get(), category: category_from_select(&category.get()) };
        projects.with(|store| store.filter(&filter).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="home">
            <div class="home__hero">
                <h1>"استثمر في المشاريع الناشئة"</h1>
                <p>"تمويل تربط أصحاب المشاريع بالمستثمرين في مكان واحد."</p>
            </div>
            <div class="home__filters">
                <input
                    class="home__search"
                    type="search"
                    placeholder="ابحث عن مشروع..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select class="home__category" on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="">"كل الفئات"</option>
                    {move || {
                        projects
                            .with(ProjectStore::categories)
                            .into_iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show
                when=move || !results().is_empty()
                fallback=|| view! { <p class="home__empty">"لا توجد مشاريع مطابقة."</p> }
            >
                <div class="project-grid">
                    {move || {
                        results()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
