//! Login page backed by the mock account store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::nav::table::REGISTER;
use crate::state::auth::{AccountStore, AuthState};
use crate::util::auth::install_signed_in_redirect;

const MISSING_FIELDS: &str = "أدخل البريد الإلكتروني وكلمة المرور.";

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let accounts = expect_context::<RwSignal<AccountStore>>();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let outcome =
            accounts.with_untracked(|store| auth.try_update(|state| state.login(store, &email_value, &password_value)));
        match outcome {
            Some(Ok(_)) => info.set(String::new()),
            Some(Err(e)) => {
                log::debug!("login rejected for {email_value}: {e}");
                info.set(e.to_string());
            }
            None => {}
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"تسجيل الدخول"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "البريد الإلكتروني"
                        <input
                            class="auth-input"
                            type="email"
                            dir="ltr"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "كلمة المرور"
                        <input
                            class="auth-input"
                            type="password"
                            dir="ltr"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit">"دخول"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-hint">"ليس لديك حساب؟ " <a href=REGISTER>"أنشئ حساباً"</a></p>
            </div>
        </div>
    }
}
