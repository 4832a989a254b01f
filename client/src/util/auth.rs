//! Protected-route gate decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so the decision
//! is a pure function of `AuthState` and the gated table path. Signed-in users
//! are checked with `check_access`; an unknown path rejects every role. The
//! `ProtectedRoute` component only reacts to the outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::nav::access::{check_access, dashboard_path};
use crate::nav::table::LOGIN;
use crate::state::auth::AuthState;
use crate::types::Role;

/// Outcome of evaluating a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Session not resolved yet.
    Pending,
    Unauthenticated,
    /// Signed in, but with a role outside the allowed set.
    Unauthorized(Role),
    Authorized,
}

impl GateState {
    /// Where control should go instead of rendering, if anywhere.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GateState::Pending | GateState::Authorized => None,
            GateState::Unauthenticated => Some(LOGIN),
            GateState::Unauthorized(role) => Some(dashboard_path(role)),
        }
    }
}

#[must_use]
pub fn evaluate_gate(auth: &AuthState, path: &str) -> GateState {
    if auth.loading {
        return GateState::Pending;
    }
    let Some(user) = &auth.user else {
        return GateState::Unauthenticated;
    };
    match check_access(path, user.role) {
        Ok(_) => GateState::Authorized,
        Err(e) => {
            log::debug!("gate rejected: {e}");
            GateState::Unauthorized(user.role)
        }
    }
}

/// Where a signed-in visitor of the login/register pages should go.
#[must_use]
pub fn signed_in_target(auth: &AuthState) -> Option<&'static str> {
    auth.user.as_ref().map(|u| dashboard_path(u.role))
}

/// Navigate away whenever the gate settles on a redirect outcome.
pub fn install_gate_redirect<F>(gate: Memo<GateState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = gate.get().redirect_target() {
            log::debug!("gate redirect to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Send signed-in users from guest pages to their dashboard.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = signed_in_target(&auth.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
