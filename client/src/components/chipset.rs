//! Removable chip list for draft texts and styles.

use leptos::prelude::*;

/// Renders one chip per entry. Clicking a chip's close button reports the
/// entry's value through `on_remove`; the owner decides what removal means.
#[component]
pub fn Chipset(#[prop(into)] items: Signal<Vec<String>>, on_remove: Callback<String>) -> impl IntoView {
    view! {
        <div class="chipset">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let value = item.clone();
                        view! {
                            <span class="chip">
                                <span class="chip__text">{item}</span>
                                <button
                                    class="chip__remove material-icons"
                                    title="Remove"
                                    aria-label="Remove"
                                    on:click=move |_| on_remove.run(value.clone())
                                >
                                    "close"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
