//! Request list rendered from the controller's `RequestsState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is rebuilt from scratch on every draw. Each row gets a fresh
//! `RequestView` computed from the request and the current auth state.

use leptos::prelude::*;

use crate::components::generation_request::GenerationRequest;
use crate::controller::GenerationController;
use crate::state::requests::RequestView;

/// All generation requests, newest first as returned by the service.
#[component]
pub fn GenerationRequests() -> impl IntoView {
    let controller = expect_context::<GenerationController>();
    let requests = controller.requests();
    let auth = controller.auth();

    let views = move || {
        let has_token = auth.with(|a| a.has_token());
        requests.with(|state| {
            state
                .items
                .iter()
                .map(|request| RequestView::build(request, has_token, state.is_expanded(request.id)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="requests">
            {move || {
                requests
                    .with(|s| s.error.clone())
                    .map(|message| view! { <div class="requests__error">{message}</div> })
            }}
            <Show when=move || requests.with(|s| s.is_loading() && !s.loaded)>
                <div class="requests__loading">"Loading..."</div>
            </Show>
            <Show when=move || requests.with(|s| s.loaded && s.items.is_empty())>
                <div class="requests__empty">"No generation requests yet."</div>
            </Show>
            <ul class="requests__list">
                {move || {
                    views()
                        .into_iter()
                        .map(|view| view! { <GenerationRequest view=view/> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
