//! Role dashboards: one landing page per signed-in role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard is gated on its own route row, so a user who opens another
//! role's dashboard is redirected to theirs by the protected-route gate.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::protected_route::ProtectedRoute;
use crate::nav::table::{ADMIN_DASHBOARD, SPONSOR_DASHBOARD, STARTUP_DASHBOARD};
use crate::state::auth::{AccountStore, AuthState};
use crate::state::projects::{Project, ProjectStore};
use crate::types::Role;
use crate::util::format::format_sar;

/// Headline figures for a startup owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct StartupStats {
    projects: usize,
    pending: usize,
    raised: u64,
    backers: usize,
}

fn startup_stats(store: &ProjectStore, email: &str) -> StartupStats {
    let owned = store.owned_by(email);
    let mut backers: Vec<&str> = owned
        .iter()
        .flat_map(|p| p.pledges.iter().map(|pl| pl.sponsor_email.as_str()))
        .collect();
    backers.sort_unstable();
    backers.dedup();
    StartupStats {
        projects: owned.len(),
        pending: owned.iter().filter(|p| !p.status.is_public()).count(),
        raised: owned.iter().map(|p| p.raised()).sum(),
        backers: backers.len(),
    }
}

/// Headline figures for a sponsor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SponsorStats {
    backed: usize,
    invested: u64,
    open_opportunities: usize,
}

fn sponsor_stats(store: &ProjectStore, email: &str) -> SponsorStats {
    let backed = store.backed_by(email);
    SponsorStats {
        backed: backed.len(),
        invested: backed.iter().map(|p| p.pledged_by(email)).sum(),
        open_opportunities: store
            .public_listing()
            .iter()
            .filter(|p| p.progress_percent() < 100 && p.pledged_by(email) == 0)
            .count(),
    }
}

fn current_email(auth: &AuthState) -> String {
    auth.user.as_ref().map(|u| u.email.clone()).unwrap_or_default()
}

#[component]
fn StatTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{move || value.get()}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}

#[component]
fn ProjectList(#[prop(into)] projects: Signal<Vec<Project>>, empty: &'static str) -> impl IntoView {
    view! {
        <Show
            when=move || !projects.get().is_empty()
            fallback=move || view! { <p class="page__empty">{empty}</p> }
        >
            <div class="project-grid">
                {move || {
                    projects.get().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn StartupDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let stats = Memo::new(move |_| {
        let email = current_email(&auth.get());
        projects.with(|store| startup_stats(store, &email))
    });
    let owned = Signal::derive(move || {
        let email = current_email(&auth.get());
        projects.with(|store| store.owned_by(&email).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <ProtectedRoute path=STARTUP_DASHBOARD>
            <section class="page dashboard">
                <h1>"لوحة تحكم صاحب المشروع"</h1>
                <div class="stat-row">
                    <StatTile label="مشاريعي" value=Signal::derive(move || stats.get().projects.to_string())/>
                    <StatTile label="قيد المراجعة" value=Signal::derive(move || stats.get().pending.to_string())/>
                    <StatTile label="إجمالي التمويل" value=Signal::derive(move || format_sar(stats.get().raised))/>
                    <StatTile label="المستثمرون" value=Signal::derive(move || stats.get().backers.to_string())/>
                </div>
                <h2>"مشاريعي"</h2>
                <ProjectList projects=owned empty="لم تضف أي مشروع بعد."/>
            </section>
        </ProtectedRoute>
    }
}

#[component]
pub fn SponsorDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let stats = Memo::new(move |_| {
        let email = current_email(&auth.get());
        projects.with(|store| sponsor_stats(store, &email))
    });
    let backed = Signal::derive(move || {
        let email = current_email(&auth.get());
        projects.with(|store| store.backed_by(&email).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <ProtectedRoute path=SPONSOR_DASHBOARD>
            <section class="page dashboard">
                <h1>"لوحة تحكم المستثمر"</h1>
                <div class="stat-row">
                    <StatTile label="مشاريع مدعومة" value=Signal::derive(move || stats.get().backed.to_string())/>
                    <StatTile label="إجمالي الاستثمار" value=Signal::derive(move || format_sar(stats.get().invested))/>
                    <StatTile
                        label="فرص متاحة"
                        value=Signal::derive(move || stats.get().open_opportunities.to_string())
                    />
                </div>
                <h2>"استثماراتي"</h2>
                <ProjectList projects=backed empty="لم تستثمر في أي مشروع بعد."/>
            </section>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let accounts = expect_context::<RwSignal<AccountStore>>();
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let summary = Memo::new(move |_| projects.with(ProjectStore::summary));
    let members = Memo::new(move |_| {
        accounts.with(|a| a.count_by_role(Role::Startup) + a.count_by_role(Role::Sponsor))
    });

    view! {
        <ProtectedRoute path=ADMIN_DASHBOARD>
            <section class="page dashboard">
                <h1>"لوحة تحكم الإدارة"</h1>
                <div class="stat-row">
                    <StatTile label="الأعضاء" value=Signal::derive(move || members.get().to_string())/>
                    <StatTile label="بانتظار المراجعة" value=Signal::derive(move || summary.get().pending.to_string())/>
                    <StatTile
                        label="مشاريع منشورة"
                        value=Signal::derive(move || {
                            let s = summary.get();
                            (s.approved + s.funded).to_string()
                        })
                    />
                    <StatTile label="إجمالي التمويل" value=Signal::derive(move || format_sar(summary.get().total_raised))/>
                </div>
            </section>
        </ProtectedRoute>
    }
}
