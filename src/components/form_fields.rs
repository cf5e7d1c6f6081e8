//! Form Field Components
//!
//! Inputs bound to one field of a [`FormState`] draft, plus the modal
//! that wraps every create/edit form.

use leptos::prelude::*;
use planner_core::domain::{Choice, Draft};
use planner_core::FormState;

/// Two-way binding of a text field in the draft
pub fn bind_text<D>(
    form: RwSignal<FormState<D>>,
    get: fn(&D) -> &String,
    set: fn(&mut D) -> &mut String,
) -> (Signal<String>, Callback<String>)
where
    D: Draft + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(&f.draft).clone()));
    let on_input = Callback::new(move |input: String| form.update(|f| f.edit(|draft| *set(draft) = input)));
    (value, on_input)
}

pub fn bind_choice<D, C>(
    form: RwSignal<FormState<D>>,
    get: fn(&D) -> C,
    set: fn(&mut D, C),
) -> (Signal<C>, Callback<C>)
where
    D: Draft + Send + Sync + 'static,
    C: Choice + Send + Sync,
{
    let value = Signal::derive(move || form.with(|f| get(&f.draft)));
    let on_change = Callback::new(move |choice: C| form.update(|f| f.edit(|draft| set(draft, choice))));
    (value, on_change)
}

pub fn bind_flag<D>(form: RwSignal<FormState<D>>, get: fn(&D) -> bool, set: fn(&mut D, bool)) -> (Signal<bool>, Callback<bool>)
where
    D: Draft + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(&f.draft)));
    let on_change = Callback::new(move |flag: bool| form.update(|f| f.edit(|draft| set(draft, flag))));
    (value, on_change)
}

#[component]
pub fn TextField(
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="form-input"
            type=input_type
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextArea(#[prop(into)] placeholder: String, value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <textarea
            class="form-input"
            rows="3"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}

/// Dropdown over a fixed list of free-text categories
#[component]
pub fn OptionSelect(
    #[prop(into)] placeholder: String,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <select
            class="form-input"
            required=required
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
            {options.iter().map(|option| {
                let option = *option;
                view! {
                    <option value=option selected=move || value.get() == option>{option}</option>
                }
            }).collect_view()}
        </select>
    }
}

/// Dropdown over a closed enumeration
#[component]
pub fn ChoiceSelect<C>(value: Signal<C>, on_change: Callback<C>) -> impl IntoView
where
    C: Choice + Send + Sync,
{
    view! {
        <select
            class="form-input"
            on:change=move |ev| {
                if let Some(choice) = C::parse(&event_target_value(&ev)) {
                    on_change.run(choice);
                }
            }
        >
            {C::ALL.iter().map(|choice| {
                let choice = *choice;
                view! {
                    <option value=choice.as_str() selected=move || value.get() == choice>
                        {choice.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// 1 to 5 stars, or none
#[component]
pub fn RatingSelect(options: &'static [u32], value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <select class="form-input" on:change=move |ev| on_change.run(event_target_value(&ev))>
            <option value="" selected=move || value.get().is_empty()>"Rating (optional)"</option>
            {options.iter().map(|stars| {
                let wire = stars.to_string();
                let current = wire.clone();
                let label = format!("{} {}", "⭐".repeat(*stars as usize), stars);
                view! {
                    <option value=wire selected=move || value.get() == current>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CheckboxField(#[prop(into)] label: String, value: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// Create/edit modal. The title and button read "Edit"/"Update" while
/// editing an existing record.
#[component]
pub fn FormModal<D>(
    form: RwSignal<FormState<D>>,
    noun: &'static str,
    on_submit: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView
where
    D: Draft + Send + Sync + 'static,
{
    let editing = move || form.with(|f| f.is_editing());

    view! {
        <Show when=move || form.with(|f| f.is_visible())>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>{move || if editing() { format!("Edit {noun}") } else { format!("Add {noun}") }}</h3>
                    <form
                        class="modal-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        {children()}
                        <div class="modal-actions">
                            <button type="submit" class="btn-primary">
                                {move || if editing() { "Update" } else { "Add" }}
                            </button>
                            <button type="button" class="btn-secondary" on:click=move |_| form.update(|f| f.close())>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
