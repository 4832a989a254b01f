//! Shared domain types for users and roles.
//!
//! DESIGN
//! ======
//! `Role` is a closed enum so route visibility and gate decisions can be
//! matched exhaustively. An absent user is modelled as `Role::Public` rather
//! than a separate option type at every call site.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. A user has exactly one role; `Public` stands for an
/// anonymous visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Public,
    Startup,
    Sponsor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Public, Role::Startup, Role::Sponsor, Role::Admin];

    /// Stable machine name, also used as the dashboard path segment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Startup => "startup",
            Role::Sponsor => "sponsor",
            Role::Admin => "admin",
        }
    }

    /// Arabic display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Public => "زائر",
            Role::Startup => "صاحب مشروع",
            Role::Sponsor => "مستثمر",
            Role::Admin => "مدير المنصة",
        }
    }

    /// Roles a visitor may pick on the registration form.
    #[must_use]
    pub fn self_registrable(self) -> bool {
        matches!(self, Role::Startup | Role::Sponsor)
    }

    /// Parse a machine name produced by [`Role::as_str`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

/// Signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
