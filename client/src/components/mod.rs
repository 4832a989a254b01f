//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome (navigation surfaces, breadcrumb, gate)
//! and shared cards while reading state from Leptos context providers.

pub mod breadcrumb;
pub mod footer;
pub mod navbar;
pub mod project_card;
pub mod protected_route;
pub mod sidebar;
