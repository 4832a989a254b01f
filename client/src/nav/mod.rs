//! Route table and everything derived from it.
//!
//! ARCHITECTURE
//! ============
//! `table` holds the static rows, `pattern` compiles their paths, `access`
//! answers role questions over them, `breadcrumb` turns a path into a trail
//! and `context` publishes role-scoped lists to components.

pub mod access;
pub mod breadcrumb;
pub mod context;
pub mod pattern;
pub mod table;
