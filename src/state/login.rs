//! Login form state machine.
//!
//! DESIGN
//! ======
//! `LoginForm` is plain data plus transitions. It never performs I/O: a
//! transition returns the side effect the caller must run (credentials to send,
//! a path to navigate to, an expiry message to clear). The async wiring lives
//! in `pages::login_flow`.
//!
//! ```text
//! idle ──submit(valid)──▶ submitting ──Ok──▶ succeeded
//!  ▲  ╲                        │
//!  │   submit(invalid)         Err
//!  │                           ▼
//!  └──────────────────────── failed ──submit(valid)──▶ submitting
//! ```

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::BTreeMap;

use crate::net::types::LoginFailure;
use crate::state::auth::AuthSnapshot;
use crate::util::validate::validate;

/// Route the form leaves for once the user is authenticated.
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const SUBMIT_LABEL: &str = "登入";
pub const SUBMITTING_LABEL: &str = "登入中...";

/// Form input identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Raw field values as typed. Held only while the form is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Per-field validation messages. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

#[cfg(test)]
impl FieldErrors {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Lifecycle of a single login attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Side effects requested by [`LoginForm::reconcile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Navigate here with replace semantics.
    pub redirect: Option<&'static str>,
    /// The session's expiry message was taken and must be cleared upstream.
    pub clear_expired_message: bool,
}

/// State owned by one mounted login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub field_errors: FieldErrors,
    pub status: SubmissionStatus,
    pub api_error: Option<String>,
    pub expired_message: Option<String>,
    navigated: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field value. Errors stay visible until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.credentials.set(field, value.into());
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    /// Start a submit attempt.
    ///
    /// Returns the credentials to hand to the session's login when the attempt
    /// should proceed, `None` when it is dropped (already submitting) or
    /// blocked by validation errors.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.status == SubmissionStatus::Submitting {
            return None;
        }
        self.field_errors = validate(&self.credentials);
        if !self.field_errors.is_empty() {
            self.status = SubmissionStatus::Idle;
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.api_error = None;
        Some(self.credentials.clone())
    }

    /// Apply the login outcome.
    ///
    /// Returns the navigation target on success unless the form has already
    /// navigated. Outcomes arriving outside `submitting` are ignored.
    pub fn finish_submit(&mut self, result: Result<(), LoginFailure>) -> Option<&'static str> {
        if self.status != SubmissionStatus::Submitting {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.take_navigation()
            }
            Err(failure) => {
                self.status = SubmissionStatus::Failed;
                self.api_error = Some(failure.display_message().to_owned());
                None
            }
        }
    }

    /// Align the form with the current session snapshot.
    pub fn reconcile(&mut self, snapshot: &AuthSnapshot) -> Reconciliation {
        let mut outcome = Reconciliation::default();
        if let Some(message) = snapshot.expired_message.as_ref() {
            self.expired_message = Some(message.clone());
            outcome.clear_expired_message = true;
        }
        if snapshot.is_authenticated {
            outcome.redirect = self.take_navigation();
        }
        outcome
    }

    pub fn dismiss_expired_message(&mut self) {
        self.expired_message = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Inputs and the submit control are disabled only while submitting.
    pub fn controls_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    fn take_navigation(&mut self) -> Option<&'static str> {
        if self.navigated {
            return None;
        }
        self.navigated = true;
        Some(DASHBOARD_PATH)
    }
}

#[cfg(test)]
impl LoginForm {
    pub(crate) fn has_navigated(&self) -> bool {
        self.navigated
    }
}
