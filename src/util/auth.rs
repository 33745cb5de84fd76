//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior and
//! interpret server session checks the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::session::{Navigator, replace_options};

pub const LOGIN_PATH: &str = "/login";

/// Whether a protected route should send the user to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<N>(auth: RwSignal<AuthState>, navigate: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate.navigate(LOGIN_PATH, replace_options());
        }
    });
}

/// What to do with the local session after asking the server about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    /// Nothing learned; keep local state as is.
    Keep,
    /// The server recognizes the session.
    Restore(User),
    /// The server rejected a session the client believed was live.
    Expire,
    /// No session on either side.
    SignedOut,
}

pub fn session_check(locally_authenticated: bool, result: Result<User, ApiError>) -> SessionCheck {
    match result {
        Ok(user) => SessionCheck::Restore(user),
        Err(ApiError::Unauthorized) if locally_authenticated => SessionCheck::Expire,
        Err(ApiError::Unauthorized) => SessionCheck::SignedOut,
        Err(_) => SessionCheck::Keep,
    }
}
