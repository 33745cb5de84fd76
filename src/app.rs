//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionService;

/// HTML shell for hosts that render the app server-side before hydrating.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-Hant">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionService::new(ApiConfig::from_env());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    restore_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/signin-client.css"/>
        <Title text="登入"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Pick up an existing server session so `/login` can redirect straight away.
#[cfg(feature = "hydrate")]
fn restore_session(session: SessionService) {
    use crate::util::auth::{SessionCheck, session_check};

    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_current_user(&session.config()).await;
        match session_check(false, result) {
            SessionCheck::Restore(user) => session.set_user(user),
            SessionCheck::Expire | SessionCheck::SignedOut | SessionCheck::Keep => session.finish_loading(),
        }
    });
}
