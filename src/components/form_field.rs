//! Labeled text input with an inline validation message.

use leptos::prelude::*;

use crate::state::login::Field;

/// A labeled input bound to one login field.
#[component]
pub fn FormField(
    field: Field,
    label: &'static str,
    #[prop(into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let id = format!("login-{}", field.name());
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();
    let label_for = id.clone();

    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label" for=label_for>{label}</label>
            <input
                id=id
                name=field.name()
                class="form-field__input"
                type=input_type
                autocomplete=autocomplete
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=move || error.get().map(|_| described_by.clone())
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p id=error_id.clone() class="form-field__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
