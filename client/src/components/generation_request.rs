//! One request row: summary plus its optional details panel.

use leptos::prelude::*;

use crate::components::request_details::RequestDetails;
use crate::components::request_summary::RequestSummary;
use crate::controller::GenerationController;
use crate::net::api::RequestAction;
use crate::state::requests::RequestView;

/// Wires summary callbacks to the controller and shows details when expanded.
#[component]
pub fn GenerationRequest(view: RequestView) -> impl IntoView {
    let controller = expect_context::<GenerationController>();
    let RequestView { id, request, summary, details, expanded } = view;

    let on_expand = Callback::new(move |open: bool| controller.set_expanded(id, open));
    let on_action = Callback::new(move |action: RequestAction| match action {
        RequestAction::Cancel => controller.cancel(&request),
        RequestAction::Retry => controller.retry(&request),
        RequestAction::Delete => controller.delete(&request),
        RequestAction::Publish => controller.publish(&request),
        RequestAction::Unpublish => controller.unpublish(&request),
    });

    view! {
        <li class="request" class:request--expanded=expanded>
            <RequestSummary summary=summary expanded=expanded on_expand=on_expand on_action=on_action/>
            {expanded.then(|| view! { <RequestDetails details=details/> })}
        </li>
    }
}
