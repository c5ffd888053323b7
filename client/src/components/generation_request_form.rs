//! Form for drafting and submitting a new generation request.
//!
//! DESIGN
//! ======
//! The draft lives in a local `RwSignal<FormState>`. Every handler builds a
//! `FormMsg`, runs it through `FormState::reduce`, and writes the returned
//! state back. A submitted spec is handed to the `GenerationController`.

use leptos::prelude::*;

use crate::components::chipset::Chipset;
use crate::controller::GenerationController;
use crate::state::form::{Field, FormMsg, FormState};

/// Collapsible request form with text and style chip inputs.
#[component]
pub fn GenerationRequestForm() -> impl IntoView {
    let controller = expect_context::<GenerationController>();
    let form = RwSignal::new(FormState::default());

    let dispatch = Callback::new(move |msg: FormMsg| {
        let update = form.with_untracked(|state| state.reduce(msg));
        form.set(update.state);
        if let Some(spec) = update.submitted {
            controller.create(spec);
        }
    });

    let texts = Signal::derive(move || form.with(|f| f.entries(Field::Texts).to_vec()));
    let styles = Signal::derive(move || form.with(|f| f.entries(Field::Styles).to_vec()));
    let can_submit = move || form.with(|f| !f.spec.texts.is_empty());

    view! {
        <section class="request-form" class:request-form--expanded=move || form.with(|f| f.expanded)>
            <header class="request-form__header" on:click=move |_| dispatch.run(FormMsg::ToggleExpanded)>
                <span class="material-icons">
                    {move || if form.with(|f| f.expanded) { "expand_less" } else { "expand_more" }}
                </span>
                <h2>"New request"</h2>
            </header>
            <Show when=move || form.with(|f| f.expanded)>
                <div class="request-form__body">
                    <FieldInput field=Field::Texts label="Texts" form=form dispatch=dispatch multiline=true/>
                    <Chipset
                        items=texts
                        on_remove=Callback::new(move |value| dispatch.run(FormMsg::Remove(Field::Texts, value)))
                    />
                    <FieldInput field=Field::Styles label="Styles" form=form dispatch=dispatch/>
                    <Chipset
                        items=styles
                        on_remove=Callback::new(move |value| dispatch.run(FormMsg::Remove(Field::Styles, value)))
                    />
                    <div class="request-form__footer">
                        <span class="request-form__estimate">
                            {move || format!("{} steps", form.with(FormState::estimated_steps))}
                        </span>
                        <button
                            class="btn btn--primary"
                            disabled=move || !can_submit()
                            on:click=move |_| dispatch.run(FormMsg::Submit)
                        >
                            "Submit"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}

/// One labelled input plus its add button. Enter commits the entry.
#[component]
fn FieldInput(
    field: Field,
    label: &'static str,
    form: RwSignal<FormState>,
    dispatch: Callback<FormMsg>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.input(field).to_owned());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            dispatch.run(FormMsg::Add(field));
        }
    };

    let input = if multiline {
        view! {
            <textarea
                class="request-form__input"
                rows="2"
                prop:value=value
                on:input=move |ev| dispatch.run(FormMsg::Input(field, event_target_value(&ev)))
                on:keydown=on_keydown
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="request-form__input"
                type="text"
                prop:value=value
                on:input=move |ev| dispatch.run(FormMsg::Input(field, event_target_value(&ev)))
                on:keydown=on_keydown
            />
        }
        .into_any()
    };

    view! {
        <label class="request-form__label">
            {label}
            <div class="request-form__row">
                {input}
                <button class="btn material-icons" title="Add" on:click=move |_| dispatch.run(FormMsg::Add(field))>
                    "add"
                </button>
            </div>
        </label>
    }
}
