//! Process-wide auth session store and the collaborator seams the login
//! form depends on.
//!
//! DESIGN
//! ======
//! `SessionService` is a `Copy` handle over one `RwSignal<AuthState>` provided
//! via context. Observers subscribe by reading `snapshot()` inside an effect;
//! the signal re-runs them on every change. The login form only sees the
//! `AuthSession` trait, never the signal itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::{LoginFailure, User};
use crate::state::auth::{AuthSnapshot, AuthState};

/// Shown on the login form after a live session is rejected.
pub const SESSION_EXPIRED_MESSAGE: &str = "登入已過期，請重新登入";

/// Auth operations consumed by the login form.
#[allow(async_fn_in_trait)]
pub trait AuthSession {
    fn snapshot(&self) -> AuthSnapshot;

    /// Idempotent.
    fn clear_expired_message(&self);

    /// Resolves `Ok` once the session is authenticated.
    async fn login(&self, email: &str, password: &str) -> Result<(), LoginFailure>;
}

/// Redirect seam; implemented for the router's `use_navigate` closure.
pub trait Navigator {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, options: NavigateOptions) {
        self(path, options);
    }
}

/// Options for a redirect that overwrites the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[derive(Clone, Copy)]
pub struct SessionService {
    state: RwSignal<AuthState>,
    config: StoredValue<ApiConfig>,
}

impl SessionService {
    pub fn new(config: ApiConfig) -> Self {
        let loading = !config.mock_mode();
        Self {
            state: RwSignal::new(AuthState { loading, ..AuthState::default() }),
            config: StoredValue::new(config),
        }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Install a user restored from an existing server session.
    pub fn set_user(&self, user: User) {
        self.state.update(|s| {
            s.user = Some(user);
            s.loading = false;
        });
    }

    /// Startup restore finished without a session.
    pub fn finish_loading(&self) {
        self.state.update(|s| s.loading = false);
    }

    /// Drop the session and leave `message` for the login form.
    pub fn expire(&self, message: &str) {
        leptos::logging::log!("session expired");
        self.state.update(|s| {
            s.user = None;
            s.loading = false;
            s.expired_message = Some(message.to_owned());
        });
    }

    pub async fn logout(&self) {
        api::logout(&self.config()).await;
        self.state.update(|s| s.user = None);
    }
}

impl AuthSession for SessionService {
    fn snapshot(&self) -> AuthSnapshot {
        self.state.with(AuthState::snapshot)
    }

    fn clear_expired_message(&self) {
        if self.state.with_untracked(|s| s.expired_message.is_some()) {
            self.state.update(|s| s.expired_message = None);
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), LoginFailure> {
        let config = self.config();
        let response = api::login(&config, email, password).await?;
        self.set_user(response.user);
        Ok(())
    }
}
