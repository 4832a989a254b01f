//! Project detail page plus the owner and admin project lists.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::project_card::{ProjectCard, project_href};
use crate::components::protected_route::ProtectedRoute;
use crate::nav::table::{MY_PROJECTS, PENDING_PROJECTS};
use crate::state::auth::AuthState;
use crate::state::projects::{Project, ProjectStatus, ProjectStore};
use crate::types::Role;
use crate::util::format::{format_sar, progress_style};

/// What the viewer may see on the detail page.
fn detail_visible(project: &Project, auth: &AuthState) -> bool {
    if project.status.is_public() || auth.has_role(&[Role::Admin]) {
        return true;
    }
    auth.user.as_ref().is_some_and(|user| user.email == project.owner_email)
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let project = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let auth = auth.get();
        projects.with(|store| store.get(&id).filter(|p| detail_visible(p, &auth)).cloned())
    };

    move || match project() {
        None => view! { <p class="project-detail__missing">"المشروع غير موجود."</p> }.into_any(),
        Some(project) => {
            let percent = project.progress_percent();
            let viewer_pledge = auth
                .get()
                .user
                .filter(|u| u.role == Role::Sponsor)
                .map(|u| project.pledged_by(&u.email))
                .filter(|amount| *amount > 0);
            view! {
                <article class="project-detail">
                    <h1>{project.title.clone()}</h1>
                    <p class="project-detail__meta">
                        <span>{project.category.clone()}</span>
                        " · "
                        <span>{project.status.label()}</span>
                    </p>
                    <p class="project-detail__summary">{project.summary.clone()}</p>
                    <div class="progress">
                        <div class="progress__fill" style=progress_style(percent)></div>
                    </div>
                    <dl class="project-detail__figures">
                        <dt>"المبلغ المستهدف"</dt>
                        <dd>{format_sar(project.funding_goal)}</dd>
                        <dt>"تم جمع"</dt>
                        <dd>{format_sar(project.raised())}</dd>
                        <dt>"عدد المستثمرين"</dt>
                        <dd>{project.pledges.len()}</dd>
                    </dl>
                    {viewer_pledge
                        .map(|amount| {
                            view! { <p class="project-detail__pledge">"مساهمتك: " {format_sar(amount)}</p> }
                        })}
                </article>
            }
            .into_any()
        }
    }
}

#[component]
pub fn MyProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let mine = move || {
        let email = auth.get().user.map(|u| u.email).unwrap_or_default();
        projects.with(|store| store.owned_by(&email).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <ProtectedRoute path=MY_PROJECTS>
            <section class="page">
                <h1>"مشاريعي"</h1>
                <Show
                    when=move || !mine().is_empty()
                    fallback=|| view! { <p class="page__empty">"لم تضف أي مشروع بعد."</p> }
                >
                    <div class="project-grid">
                        {move || mine().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                    </div>
                </Show>
            </section>
        </ProtectedRoute>
    }
}

#[component]
pub fn PendingProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let info = RwSignal::new(String::new());

    let pending = move || projects.with(|store| store.pending().into_iter().cloned().collect::<Vec<_>>());

    let review = move |id: String, status: ProjectStatus| {
        match projects.try_update(|store| store.set_status(&id, status)) {
            Some(Err(e)) => info.set(e.to_string()),
            Some(Ok(())) => info.set(String::new()),
            None => {}
        }
    };

    view! {
        <ProtectedRoute path=PENDING_PROJECTS>
            <section class="page">
                <h1>"المشاريع المعلقة"</h1>
                <Show when=move || !info.get().is_empty()>
                    <p class="page__message" role="alert">{move || info.get()}</p>
                </Show>
                <Show
                    when=move || !pending().is_empty()
                    fallback=|| view! { <p class="page__empty">"لا توجد مشاريع بانتظار المراجعة."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"المشروع"</th>
                                <th>"صاحب المشروع"</th>
                                <th>"المبلغ المستهدف"</th>
                                <th>"الإجراء"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                pending()
                                    .into_iter()
                                    .map(|project| {
                                        let approve_id = project.id.clone();
                                        let reject_id = project.id.clone();
                                        view! {
                                            <tr>
                                                <td><a href=project_href(&project.id)>{project.title.clone()}</a></td>
                                                <td dir="ltr">{project.owner_email.clone()}</td>
                                                <td>{format_sar(project.funding_goal)}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="button button--approve"
                                                        on:click=move |_| review(approve_id.clone(), ProjectStatus::Approved)
                                                    >
                                                        "قبول"
                                                    </button>
                                                    <button
                                                        class="button button--reject"
                                                        on:click=move |_| review(reject_id.clone(), ProjectStatus::Rejected)
                                                    >
                                                        "رفض"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
        </ProtectedRoute>
    }
}
