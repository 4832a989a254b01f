//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in `ProtectedRoute` keyed
//! by their own route-table path.

pub mod contracts;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod project;
pub mod register;
pub mod reports;
pub mod users;
