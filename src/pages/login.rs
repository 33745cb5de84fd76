//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `LoginForm` for as long as the route is mounted. Submission and
//! session reconciliation go through `login_flow`; this module only binds
//! the form state to the rendered controls.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::notice::{Notice, NoticeKind};
use crate::config::{ApiConfig, TEST_ACCOUNT_HINT};
use crate::pages::login_flow;
use crate::state::login::{Field, LoginForm};
use crate::state::session::SessionService;

/// Hint text for the current configuration, if any.
pub(crate) fn account_hint(config: &ApiConfig) -> Option<&'static str> {
    config.mock_mode().then_some(TEST_ACCOUNT_HINT)
}

/// Login page with email/password fields and session-aware redirects.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::new());
    let hint = account_hint(&session.config());

    // Runs at mount and again on every session change.
    let navigate_reconcile = navigate.clone();
    Effect::new(move || login_flow::reconcile(&form, &session, &navigate_reconcile));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            login_flow::submit(&form, &session, &navigate).await;
        });
    };

    let set_field = move |field: Field| Callback::new(move |value: String| form.update(|f| f.set_field(field, value)));
    let disabled = Signal::derive(move || form.with(LoginForm::controls_disabled));
    let field_value = move |field: Field| Signal::derive(move || form.with(|f| f.credentials.get(field).to_owned()));
    let field_error = move |field: Field| Signal::derive(move || form.with(|f| f.field_error(field)));
    let on_dismiss_expired = Callback::new(move |()| form.update(LoginForm::dismiss_expired_message));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"登入"</h1>
                <Show when=move || form.with(|f| f.expired_message.is_some())>
                    <Notice
                        kind=NoticeKind::Info
                        text=Signal::derive(move || form.with(|f| f.expired_message.clone().unwrap_or_default()))
                        on_dismiss=on_dismiss_expired
                    />
                </Show>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <FormField
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        value=field_value(Field::Email)
                        error=field_error(Field::Email)
                        disabled=disabled
                        on_input=set_field(Field::Email)
                    />
                    <FormField
                        field=Field::Password
                        label="密碼"
                        input_type="password"
                        autocomplete="current-password"
                        value=field_value(Field::Password)
                        error=field_error(Field::Password)
                        disabled=disabled
                        on_input=set_field(Field::Password)
                    />
                    <Show when=move || form.with(|f| f.api_error.is_some())>
                        <Notice
                            kind=NoticeKind::Error
                            text=Signal::derive(move || form.with(|f| f.api_error.clone().unwrap_or_default()))
                        />
                    </Show>
                    <button class="login-button" type="submit" prop:disabled=move || disabled.get()>
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
                {hint.map(|text| view! { <Notice kind=NoticeKind::Hint text=Signal::stored(text.to_owned())/> })}
            </div>
        </div>
    }
}
