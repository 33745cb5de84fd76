//! Banner used for the API error, the expiry message, and the mock hint.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
    Hint,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "notice notice--error",
            Self::Info => "notice notice--info",
            Self::Hint => "notice notice--hint",
        }
    }
}

/// A single-line notice. Renders a close button when `on_dismiss` is given.
#[component]
pub fn Notice(
    kind: NoticeKind,
    #[prop(into)] text: Signal<String>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let role = if kind == NoticeKind::Error { "alert" } else { "status" };
    view! {
        <div class=kind.class() role=role>
            <span class="notice__text">{move || text.get()}</span>
            {on_dismiss.map(|cb| {
                view! {
                    <button class="notice__dismiss" type="button" aria-label="關閉" on:click=move |_| cb.run(())>
                        "×"
                    </button>
                }
            })}
        </div>
    }
}
