//! Async drivers connecting `LoginForm` to the session and the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` calls `submit` from its submit handler and `reconcile` from an
//! effect over the session snapshot. Both reach the form through `FormHandle`,
//! which yields `None` once the form is gone, so a login resolving after
//! teardown is dropped instead of touching dead state.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;

use crate::state::login::LoginForm;
use crate::state::session::{AuthSession, Navigator, replace_options};

/// Access to a possibly torn-down login form.
pub trait FormHandle {
    /// Run `f` against the live form, or return `None` if it no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R>;
}

impl FormHandle for RwSignal<LoginForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormHandle for Rc<RefCell<LoginForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormHandle for Weak<RefCell<LoginForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        let form = self.upgrade()?;
        Some(f(&mut form.borrow_mut()))
    }
}

/// Run one submit attempt to completion.
///
/// Dropped attempts (already submitting, validation errors) return without
/// calling the session.
pub async fn submit<H, S, N>(form: &H, session: &S, navigator: &N)
where
    H: FormHandle,
    S: AuthSession,
    N: Navigator,
{
    let Some(Some(credentials)) = form.with_form(LoginForm::begin_submit) else {
        return;
    };
    leptos::logging::log!("login attempt: email={}", credentials.email);

    let result = session.login(&credentials.email, &credentials.password).await;
    if let Err(failure) = &result {
        leptos::logging::warn!("login rejected: status={:?} message={}", failure.status(), failure);
    }

    match form.with_form(|f| f.finish_submit(result)) {
        Some(Some(path)) => navigator.navigate(path, replace_options()),
        Some(None) => {}
        None => leptos::logging::log!("login resolved after form teardown; ignoring"),
    }
}

/// Align the form with the session's current snapshot.
///
/// Takes a pending expiry message (clearing it upstream) and redirects an
/// already-authenticated user away from the form.
pub fn reconcile<H, S, N>(form: &H, session: &S, navigator: &N)
where
    H: FormHandle,
    S: AuthSession,
    N: Navigator,
{
    let snapshot = session.snapshot();
    let Some(outcome) = form.with_form(|f| f.reconcile(&snapshot)) else {
        return;
    };
    if outcome.clear_expired_message {
        session.clear_expired_message();
    }
    if let Some(path) = outcome.redirect {
        navigator.navigate(path, replace_options());
    }
}
