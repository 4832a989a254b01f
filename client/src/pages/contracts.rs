//! Contracts page: pledges involving the signed-in startup owner or sponsor.

use leptos::prelude::*;

use crate::components::project_card::project_href;
use crate::components::protected_route::ProtectedRoute;
use crate::nav::table::CONTRACTS;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectStore;
use crate::types::Role;
use crate::util::format::format_sar;

#[component]
pub fn ContractsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let contracts = move || match auth.get().user {
        Some(user) => projects.with(|store| store.contracts_for(&user)),
        None => Vec::new(),
    };
    // Startups see who backed them; sponsors see whom they backed.
    let counterpart_header = move || if auth.get().role() == Role::Sponsor { "صاحب المشروع" } else { "المستثمر" };

    view! {
        <ProtectedRoute path=CONTRACTS>
            <section class="page">
                <h1>"العقود"</h1>
                <Show
                    when=move || !contracts().is_empty()
                    fallback=|| view! { <p class="page__empty">"لا توجد عقود حتى الآن."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"المشروع"</th>
                                <th>{counterpart_header}</th>
                                <th>"المبلغ"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let sponsor_view = auth.get().role() == Role::Sponsor;
                                contracts()
                                    .into_iter()
                                    .map(|contract| {
                                        let counterpart = if sponsor_view {
                                            contract.owner_email.clone()
                                        } else {
                                            contract.sponsor_email.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=project_href(&contract.project_id)>{contract.project_title}</a>
                                                </td>
                                                <td dir="ltr">{counterpart}</td>
                                                <td>{format_sar(contract.amount)}</td>
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
