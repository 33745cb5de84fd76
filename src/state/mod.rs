//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` and `session` hold the process-wide session; `login` is owned by a
//! single mounted login form.

pub mod auth;
pub mod login;
pub mod session;
