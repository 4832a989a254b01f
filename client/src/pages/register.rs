//! Registration page for startup owners and sponsors.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::nav::table::LOGIN;
use crate::state::auth::{AccountStore, AuthState, Registration};
use crate::types::Role;
use crate::util::auth::install_signed_in_redirect;

pub const MIN_PASSWORD_LEN: usize = 6;

const MISSING_NAME: &str = "أدخل الاسم الكامل.";
const BAD_EMAIL: &str = "أدخل بريداً إلكترونياً صحيحاً.";
const SHORT_PASSWORD: &str = "يجب ألا تقل كلمة المرور عن 6 أحرف.";
const BAD_ROLE: &str = "اختر نوع الحساب.";

/// Minimal shape check: one `@` with text on both sides and a dot after it.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.contains('@') && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn validate_registration(name: &str, email: &str, password: &str, role: &str) -> Result<Registration, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MISSING_NAME);
    }
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(BAD_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD);
    }
    let role = Role::parse(role).filter(|r| r.self_registrable()).ok_or(BAD_ROLE)?;
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let accounts = expect_context::<RwSignal<AccountStore>>();
    install_signed_in_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Startup.as_str().to_owned());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let registration = match validate_registration(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let outcome = accounts
            .try_update(|store| auth.try_update(|state| state.register(store, registration)))
            .flatten();
        match outcome {
            Some(Ok(_)) => info.set(String::new()),
            Some(Err(e)) => info.set(e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"إنشاء حساب"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "الاسم الكامل"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "البريد الإلكتروني"
                        <input
                            class="auth-input"
                            type="email"
                            dir="ltr"
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
                    <fieldset class="auth-roles">
                        <legend>"نوع الحساب"</legend>
                        {[Role::Startup, Role::Sponsor]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="auth-role">
                                        <input
                                            type="radio"
                                            name="role"
                                            value=option.as_str()
                                            prop:checked=move || role.get() == option.as_str()
                                            on:change=move |_| role.set(option.as_str().to_owned())
                                        />
                                        {option.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                    <button class="auth-button" type="submit">"إنشاء الحساب"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-hint">"لديك حساب؟ " <a href=LOGIN>"سجّل الدخول"</a></p>
            </div>
        </div>
    }
}
