//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side and native builds: stubs, except that mock mode resolves
//! locally everywhere.
//!
//! ERROR HANDLING
//! ==============
//! `login` reports a `LoginFailure` so the form can surface the server's
//! message. The other helpers return `ApiError`; `Unauthorized` is kept
//! distinct so a rejected live session can be expired instead of ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginFailure, LoginResponse, User};
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("session rejected")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available without an api endpoint")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> ApiError {
    if status == 401 { ApiError::Unauthorized } else { ApiError::Status(status) }
}

/// Attach the session cookie. The configured API may live on another origin,
/// where fetch's default `same-origin` mode would drop it.
#[cfg(feature = "hydrate")]
fn with_session(config: &ApiConfig, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    if config.include_credentials() {
        builder.credentials(web_sys::RequestCredentials::Include)
    } else {
        builder
    }
}

#[cfg(feature = "hydrate")]
fn transport_failure(err: impl std::fmt::Display) -> LoginFailure {
    leptos::logging::warn!("login transport error: {err}");
    LoginFailure::transport()
}

/// Log in with `POST /api/auth/login`, or against the mock backend.
///
/// # Errors
///
/// Returns a `LoginFailure` carrying the HTTP status and the server's
/// `{ message }` body when present.
pub async fn login(config: &ApiConfig, email: &str, password: &str) -> Result<LoginResponse, LoginFailure> {
    let Some(url) = config.endpoint(LOGIN_ENDPOINT) else {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(config.mock_latency_ms)).await;
        return super::mock::login(email, password);
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = with_session(config, gloo_net::http::Request::post(&url))
            .json(&LoginRequest { email, password })
            .map_err(transport_failure)?
            .send()
            .await
            .map_err(transport_failure)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LoginFailure::from_body(resp.status(), &body));
        }
        resp.json::<LoginResponse>().await.map_err(transport_failure)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(LoginFailure::transport())
    }
}

/// Fetch the user behind the current session cookie from `/api/auth/me`.
///
/// # Errors
///
/// `Unavailable` in mock mode or off the browser, `Unauthorized` when the
/// server rejects the session, other variants for transport failures.
pub async fn fetch_current_user(config: &ApiConfig) -> Result<User, ApiError> {
    let Some(url) = config.endpoint(ME_ENDPOINT) else {
        return Err(ApiError::Unavailable);
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = with_session(config, gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_status(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout(config: &ApiConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(url) = config.endpoint(LOGOUT_ENDPOINT) {
            let _ = with_session(config, gloo_net::http::Request::post(&url)).send().await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
