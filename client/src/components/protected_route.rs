//! Wrapper that renders its children only for allowed roles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GateState, evaluate_gate, install_gate_redirect};

/// Gate `children` behind the roles of table route `path`; other visitors are
/// redirected to the login page or to their own dashboard.
#[component]
pub fn ProtectedRoute(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = Memo::new(move |_| evaluate_gate(&auth.get(), path));
    install_gate_redirect(gate, use_navigate());

    view! {
        <Show
            when=move || gate.get() == GateState::Authorized
            fallback=move || {
                view! {
                    <div class="gate">
                        <p>
                            {move || match gate.get() {
                                GateState::Pending => "جارٍ التحميل...",
                                _ => "جارٍ التحويل...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
