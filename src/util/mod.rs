//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep validation and route-guard rules out of page code so
//! they can be tested without a browser.

pub mod auth;
pub mod validate;
