//! Landing page: request form, request list, and refresh controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It reads the `GenerationController` and auth signal from
//! context; the controller was started by `App`, so this page only renders
//! and forwards header interactions.

use leptos::prelude::*;

use crate::components::generation_request_form::GenerationRequestForm;
use crate::components::generation_requests::GenerationRequests;
use crate::controller::GenerationController;
use crate::state::auth::AuthState;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let controller = expect_context::<GenerationController>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let token_draft = RwSignal::new(auth.get_untracked().token.unwrap_or_default());

    // Tokens set in another tab land in `auth`; mirror them into the field.
    Effect::new(move || token_draft.set(auth.with(|a| a.token.clone()).unwrap_or_default()));

    let save_token = move || crate::util::auth::set_token(auth, Some(token_draft.get_untracked().as_str()));
    let clear_token = move |_| {
        token_draft.set(String::new());
        crate::util::auth::set_token(auth, None);
    };

    view! {
        <div class="requests-page">
            <header class="toolbar">
                <h1 class="toolbar__title">"Generation requests"</h1>
                <label class="toolbar__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || controller.auto_refresh()
                        on:change=move |ev| controller.set_auto_refresh(event_target_checked(&ev))
                    />
                    "Auto refresh"
                </label>
                <button
                    class="btn btn--icon material-icons"
                    title="Refresh"
                    aria-label="Refresh"
                    on:click=move |_| controller.refresh()
                >
                    "refresh"
                </button>
                <div class="toolbar__token">
                    <input
                        class="toolbar__token-input"
                        type="password"
                        placeholder="API token"
                        prop:value=move || token_draft.get()
                        on:input=move |ev| token_draft.set(event_target_value(&ev))
                        on:change=move |_| save_token()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_token();
                            }
                        }
                    />
                    <Show when=move || auth.with(AuthState::has_token)>
                        <button class="btn btn--icon material-icons" title="Forget token" on:click=clear_token>
                            "logout"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="requests-page__content">
                <GenerationRequestForm/>
                <GenerationRequests/>
            </main>
        </div>
    }
}
