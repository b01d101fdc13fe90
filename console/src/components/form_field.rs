//! Labelled input bound to one field of a [`FormState`].

use leptos::prelude::*;
use wire::{FieldKind, FieldSpec};

use crate::state::form::FormState;

/// Renders a text/email/password/number input, or a `<select>` for group
/// choices, with its validation message underneath.
#[component]
pub fn FormField(
    field: FieldSpec,
    form: RwSignal<FormState>,
    /// Choices for `FieldKind::GroupSelect`.
    #[prop(optional, into)]
    options: Option<Signal<Vec<String>>>,
) -> impl IntoView {
    let name = field.name;
    let required = field.is_required();
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(name, event_target_value(&ev)));

    let control = if field.kind == FieldKind::GroupSelect {
        let placeholder = field.placeholder;
        view! {
            <select
                id=name
                name=name
                class=move || form.with(|f| f.input_class(name))
                prop:value=move || form.with(|f| f.value(name))
                on:change=on_input
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .map(|opts| opts.get())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|opt| { let value = opt.clone(); view! { <option value=value>{opt}</option> } })
                        .collect_view()
                }}
            </select>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type=field.kind.input_type()
                placeholder=field.placeholder
                class=move || form.with(|f| f.input_class(name))
                prop:value=move || form.with(|f| f.value(name))
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name>
                {field.label}
                {required.then_some(view! { <span class="form-field__required">"*"</span> })}
            </label>
            {control}
            <Show when=move || form.with(|f| f.visible_error(name).is_some())>
                <p class="form-field__error">{move || form.with(|f| f.visible_error(name).unwrap_or_default())}</p>
            </Show>
        </div>
    }
}

/// Claim the form for submission, returning the payload when it is valid.
pub fn begin_submit<T>(form: RwSignal<FormState>, build: impl FnOnce(&FormState) -> T) -> Option<T> {
    form.try_update(|f| {
        if !f.can_submit() {
            f.touch_all();
            return None;
        }
        f.submitting = true;
        Some(build(f))
    })
    .flatten()
}
