//! Admin reports: catalogue status counts and funding per category.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::nav::table::REPORTS;
use crate::state::projects::{ProjectStatus, ProjectStore};
use crate::util::format::format_sar;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let summary = Memo::new(move |_| projects.with(ProjectStore::summary));

    let status_rows = move || {
        let s = summary.get();
        [
            (ProjectStatus::Pending, s.pending),
            (ProjectStatus::Approved, s.approved),
            (ProjectStatus::Funded, s.funded),
            (ProjectStatus::Rejected, s.rejected),
        ]
    };

    view! {
        <ProtectedRoute path=REPORTS>
            <section class="page reports">
                <h1>"التقارير"</h1>
                <h2>"حالة المشاريع"</h2>
                <table class="table">
                    <tbody>
                        {move || {
                            status_rows()
                                .into_iter()
                                .map(|(status, count)| view! { <tr><td>{status.label()}</td><td>{count}</td></tr> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <p class="reports__totals">
                    "إجمالي المستهدف: " {move || format_sar(summary.get().total_goal)}
                    " · إجمالي المجموع: " {move || format_sar(summary.get().total_raised)}
                </p>
                <h2>"التمويل حسب الفئة"</h2>
                <table class="table">
                    <tbody>
                        {move || {
                            projects
                                .with(ProjectStore::category_totals)
                                .into_iter()
                                .map(|(category, total)| view! { <tr><td>{category}</td><td>{format_sar(total)}</td></tr> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </ProtectedRoute>
    }
}
