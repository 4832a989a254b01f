//! Auth-session state and the in-memory account store behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is provided as an `RwSignal` context by `App`; route guards,
//! the route context and user-aware components read it. `AccountStore` holds
//! the seed credentials plus accounts registered during this session. Neither
//! is persisted: a reload starts from the seed accounts with nobody signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::types::{Role, User};

/// Password shared by the seed accounts.
pub const SEED_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("البريد الإلكتروني أو كلمة المرور غير صحيحة")]
    InvalidCredentials,
    #[error("البريد الإلكتروني مسجل مسبقاً")]
    EmailAlreadyExists,
    #[error("لا يمكن التسجيل بهذا الدور")]
    RoleNotAllowed(Role),
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the client has resolved the session.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Role of the current user, `Public` when nobody is signed in.
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Public, |u| u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True iff a user is signed in and holds one of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.user.as_ref().is_some_and(|u| roles.contains(&u.role))
    }

    /// Check credentials against `accounts` and sign the user in.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on any mismatch; the current user is left as is.
    pub fn login(&mut self, accounts: &AccountStore, email: &str, password: &str) -> Result<User, AuthError> {
        let user = accounts.authenticate(email, password)?;
        log::info!("signed in {} as {}", user.email, user.role.as_str());
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Create an account in `accounts` and sign it in.
    ///
    /// # Errors
    ///
    /// `EmailAlreadyExists` or `RoleNotAllowed`; the current user is left as is.
    pub fn register(&mut self, accounts: &mut AccountStore, request: Registration) -> Result<User, AuthError> {
        let user = accounts.register(request)?;
        log::info!("registered {} as {}", user.email, user.role.as_str());
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Clear the current user. Safe to call when nobody is signed in.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("signed out {}", user.email);
        }
    }
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Account {
    user: User,
    password: String,
}

/// Mock credential table: seed accounts plus session registrations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AccountStore {
    /// Store holding one seed account per signed-in role.
    #[must_use]
    pub fn seeded() -> Self {
        let seed = [
            ("1", "سارة العتيبي", "startup@example.com", Role::Startup),
            ("2", "خالد الشمري", "sponsor@example.com", Role::Sponsor),
            ("3", "مدير المنصة", "admin@example.com", Role::Admin),
        ];
        let accounts = seed
            .into_iter()
            .map(|(id, name, email, role)| Account {
                user: User { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), role },
                password: SEED_PASSWORD.to_owned(),
            })
            .collect();
        Self { accounts }
    }

    /// Exact credential match; email is compared after normalization.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when no account matches both fields.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        self.accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Add a startup or sponsor account.
    ///
    /// # Errors
    ///
    /// `RoleNotAllowed` for admin/public, `EmailAlreadyExists` for a known email.
    pub fn register(&mut self, request: Registration) -> Result<User, AuthError> {
        if !request.role.self_registrable() {
            return Err(AuthError::RoleNotAllowed(request.role));
        }
        let email = normalize_email(&request.email);
        if self.contains_email(&email) {
            return Err(AuthError::EmailAlreadyExists);
        }
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name.trim().to_owned(),
            email,
            role: request.role,
        };
        self.accounts.push(Account { user: user.clone(), password: request.password });
        Ok(user)
    }

    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        let email = normalize_email(email);
        self.accounts.iter().any(|a| a.user.email == email)
    }

    /// All accounts in creation order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.accounts.iter().map(|a| a.user.clone()).collect()
    }

    #[must_use]
    pub fn count_by_role(&self, role: Role) -> usize {
        self.accounts.iter().filter(|a| a.user.role == role).count()
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
