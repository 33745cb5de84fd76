//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Target of every successful login. Re-checks the server session on mount;
//! a rejected live session is expired so the login form can explain why the
//! user was sent back.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionService;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` when the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = session.state();
    install_unauth_redirect(auth, use_navigate());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::SESSION_EXPIRED_MESSAGE;
        use crate::util::auth::{SessionCheck, session_check};

        let config = session.config();
        let result = crate::net::api::fetch_current_user(&config).await;
        let locally_authenticated = auth.with_untracked(|s| s.is_authenticated());
        match session_check(locally_authenticated, result) {
            SessionCheck::Restore(user) => session.set_user(user),
            SessionCheck::Expire => session.expire(SESSION_EXPIRED_MESSAGE),
            SessionCheck::SignedOut => session.finish_loading(),
            SessionCheck::Keep => {}
        }
    });

    let user_name = move || auth.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_email = move || auth.with(|s| s.user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default());

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <Show
            when=move || auth.with(|s| !s.loading && s.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.with(|s| s.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Dashboard"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">
                        {user_name}
                        " ("
                        <span class="toolbar__self-email">{user_email}</span>
                        ")"
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
            </div>
        </Show>
    }
}
