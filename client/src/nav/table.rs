//! Static route table: every navigable path, who may see it, and where it is
//! linked from.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is the single source for navbar/sidebar/footer contents, the
//! breadcrumb labels and the roles handed to protected pages. Order is
//! significant: surfaces render entries in table order.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::LazyLock;

use super::pattern::RoutePattern;
use crate::types::Role;

/// Navigation surface a route can be linked from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Navbar,
    Sidebar,
    Footer,
}

/// Small marker rendered next to a sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Unread,
    New,
}

impl Badge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Badge::Unread => "غير مقروء",
            Badge::New => "جديد",
        }
    }
}

/// One row of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: &'static [Role],
    pub surfaces: &'static [Surface],
    pub badge: Option<Badge>,
    pub is_new: bool,
    /// Hidden from navigation once a user is signed in.
    pub guest_only: bool,
    pub pattern: RoutePattern,
}

impl RouteEntry {
    #[must_use]
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&Role::Public) || self.roles.contains(&role)
    }

    #[must_use]
    pub fn on_surface(&self, surface: Surface) -> bool {
        self.surfaces.contains(&surface)
    }
}

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROJECT_DETAIL: &str = "/projects/[id]";
pub const STARTUP_DASHBOARD: &str = "/dashboard/startup";
pub const SPONSOR_DASHBOARD: &str = "/dashboard/sponsor";
pub const ADMIN_DASHBOARD: &str = "/dashboard/admin";
pub const MY_PROJECTS: &str = "/projects/my";
pub const CONTRACTS: &str = "/contracts";
pub const USERS: &str = "/users";
pub const PENDING_PROJECTS: &str = "/projects/pending";
pub const REPORTS: &str = "/reports";

struct RouteDef {
    path: &'static str,
    label: &'static str,
    roles: &'static [Role],
    surfaces: &'static [Surface],
    badge: Option<Badge>,
    is_new: bool,
    guest_only: bool,
}

const PUBLIC: &[Role] = &[Role::Public];

const ROUTE_DEFS: &[RouteDef] = &[
    RouteDef {
        path: HOME,
        label: "الرئيسية",
        roles: PUBLIC,
        surfaces: &[Surface::Navbar, Surface::Sidebar, Surface::Footer],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: PROJECT_DETAIL,
        label: "تفاصيل المشروع",
        roles: PUBLIC,
        surfaces: &[],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: LOGIN,
        label: "تسجيل الدخول",
        roles: PUBLIC,
        surfaces: &[Surface::Navbar],
        badge: None,
        is_new: false,
        guest_only: true,
    },
    RouteDef {
        path: REGISTER,
        label: "إنشاء حساب",
        roles: PUBLIC,
        surfaces: &[Surface::Navbar],
        badge: None,
        is_new: false,
        guest_only: true,
    },
    RouteDef {
        path: STARTUP_DASHBOARD,
        label: "لوحة التحكم",
        roles: &[Role::Startup],
        surfaces: &[Surface::Sidebar],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: SPONSOR_DASHBOARD,
        label: "لوحة التحكم",
        roles: &[Role::Sponsor],
        surfaces: &[Surface::Sidebar],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: ADMIN_DASHBOARD,
        label: "لوحة التحكم",
        roles: &[Role::Admin],
        surfaces: &[Surface::Sidebar],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: MY_PROJECTS,
        label: "مشاريعي",
        roles: &[Role::Startup],
        surfaces: &[Surface::Sidebar],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: CONTRACTS,
        label: "العقود",
        roles: &[Role::Startup, Role::Sponsor],
        surfaces: &[Surface::Sidebar],
        badge: Some(Badge::Unread),
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: USERS,
        label: "المستخدمون",
        roles: &[Role::Admin],
        surfaces: &[Surface::Sidebar],
        badge: None,
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: PENDING_PROJECTS,
        label: "المشاريع المعلقة",
        roles: &[Role::Admin],
        surfaces: &[Surface::Sidebar],
        badge: Some(Badge::Unread),
        is_new: false,
        guest_only: false,
    },
    RouteDef {
        path: REPORTS,
        label: "التقارير",
        roles: &[Role::Admin],
        surfaces: &[Surface::Sidebar, Surface::Footer],
        badge: Some(Badge::New),
        is_new: true,
        guest_only: false,
    },
];

static ROUTES: LazyLock<Vec<RouteEntry>> = LazyLock::new(|| {
    ROUTE_DEFS
        .iter()
        .map(|def| RouteEntry {
            path: def.path,
            label: def.label,
            roles: def.roles,
            surfaces: def.surfaces,
            badge: def.badge,
            is_new: def.is_new,
            guest_only: def.guest_only,
            pattern: RoutePattern::compile(def.path),
        })
        .collect()
});

/// The full table in declaration order.
#[must_use]
pub fn routes() -> &'static [RouteEntry] {
    &ROUTES
}

/// Table row for an exact path, or `None`.
#[must_use]
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    routes().iter().find(|r| r.path == path)
}
