//! Details panel: indexed generation steps and result previews.

use leptos::prelude::*;

use crate::components::request_step::RequestStep;
use crate::state::requests::{DetailsView, PreviewPanel};
use crate::util::details::MediaKind;

#[component]
pub fn RequestDetails(details: DetailsView) -> impl IntoView {
    let DetailsView { steps, panels } = details;

    view! {
        <div class="request-details">
            <ol class="request-details__steps">
                {steps.into_iter().map(|step| view! { <RequestStep step=step/> }).collect_view()}
            </ol>
            <div class="request-details__results">
                {panels.into_iter().map(preview_panel).collect_view()}
            </div>
        </div>
    }
}

fn preview_panel(panel: PreviewPanel) -> AnyView {
    match panel.kind {
        MediaKind::Image => {
            let href = panel.url.clone();
            view! {
            <a class="request-details__panel" href=href target="_blank">
                <img src=panel.url alt="Result"/>
            </a>
            }
            .into_any()
        }
        MediaKind::Video => view! {
            <div class="request-details__panel">
                <video src=panel.url controls=true></video>
            </div>
        }
        .into_any(),
    }
}
