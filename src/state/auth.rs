//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in a single `RwSignal<AuthState>` behind `SessionService`. Route guards
//! and the login form read it through `AuthSnapshot`, never the raw fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Startup session restore in progress.
    pub loading: bool,
    /// Set when a live session was rejected; shown once by the login form.
    pub expired_message: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: self.is_authenticated(),
            expired_message: self.expired_message.clone(),
        }
    }
}

/// Read-only view of the session consumed by the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub expired_message: Option<String>,
}
