//! Admin list of every account known to this session.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::nav::table::USERS;
use crate::state::auth::AccountStore;

#[component]
pub fn UsersPage() -> impl IntoView {
    let accounts = expect_context::<RwSignal<AccountStore>>();

    view! {
        <ProtectedRoute path=USERS>
            <section class="page">
                <h1>"المستخدمون"</h1>
                <p class="page__summary">{move || format!("{} حساب", accounts.with(|a| a.users().len()))}</p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"الاسم"</th>
                            <th>"البريد الإلكتروني"</th>
                            <th>"الدور"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            accounts
                                .with(AccountStore::users)
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <tr>
                                            <td>{user.name}</td>
                                            <td dir="ltr">{user.email}</td>
                                            <td>{user.role.label()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </ProtectedRoute>
    }
}
