//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! The login failure is a declared shape rather than an untyped JSON bag:
//! `response -> data -> message`, each level optional. Extraction goes through
//! one accessor with one fallback.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shown when a login failure carries no usable server message.
pub const LOGIN_FAILED_FALLBACK: &str = "登入失敗，請稍後再試";

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, when the backend reports it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Error body the backend attaches to a rejected request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureData {
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP response attached to a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureResponse {
    pub status: u16,
    pub data: Option<FailureData>,
}

/// A rejected login. `response` is `None` when no response was received.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.display_message())]
pub struct LoginFailure {
    pub response: Option<FailureResponse>,
}

impl LoginFailure {
    /// The request never produced a usable response.
    pub fn transport() -> Self {
        Self::default()
    }

    pub fn from_response(status: u16, data: Option<FailureData>) -> Self {
        Self { response: Some(FailureResponse { status, data }) }
    }

    /// Build a failure from a rejected response's raw body.
    ///
    /// The body is read as the backend's `{ message }` JSON; anything else
    /// leaves `data` empty so the fallback applies.
    pub fn from_body(status: u16, body: &str) -> Self {
        Self::from_response(status, serde_json::from_str::<FailureData>(body).ok())
    }

    pub fn with_message(status: u16, message: impl Into<String>) -> Self {
        Self::from_response(status, Some(FailureData { message: Some(message.into()) }))
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }

    /// Server-provided message, if any. Blank messages count as absent.
    pub fn message(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .data
            .as_ref()?
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }

    /// Text to show the user: the server message or the fixed fallback.
    pub fn display_message(&self) -> &str {
        self.message().unwrap_or(LOGIN_FAILED_FALLBACK)
    }
}
