//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`) so pages depend on small
//! focused models provided through Leptos context.

pub mod auth;
pub mod projects;
