//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure decision and formatting logic out of page and
//! component bodies so it can be unit tested without a reactive runtime.

pub mod auth;
pub mod format;
