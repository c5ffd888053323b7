//! Summary row for one generation request.
//!
//! Pure presentation of a `SummaryView`. Expansion and lifecycle actions are
//! reported upward through callbacks; nothing here talks to the service.

use leptos::prelude::*;

use crate::net::api::RequestAction;
use crate::state::requests::SummaryView;

#[component]
pub fn RequestSummary(
    summary: SummaryView,
    expanded: bool,
    /// Receives the new expanded state.
    on_expand: Callback<bool>,
    on_action: Callback<RequestAction>,
) -> impl IntoView {
    let SummaryView { name, status, steps_completed, steps_total, percent, preview_url, expandable, actions } =
        summary;
    let status_class = format!("request-summary__status request-summary__status--{}", status.kind.css_class());
    let progress_width = format!("width: {percent:.1}%");
    let active = status.kind.is_active();

    view! {
        <div class="request-summary">
            <img class="request-summary__preview" src=preview_url alt=name.clone()/>
            <div class="request-summary__body">
                <span class="request-summary__name">{name}</span>
                <span class=status_class>
                    <span class="request-summary__readable">{status.readable}</span>
                    <time class="request-summary__time">{status.datetime}</time>
                </span>
                <div class="request-summary__progress" class:request-summary__progress--active=active>
                    <div class="request-summary__bar" style=progress_width></div>
                </div>
                <span class="request-summary__steps">{format!("{steps_completed} / {steps_total}")}</span>
            </div>
            <div class="request-summary__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class="btn btn--icon material-icons"
                                title=action.label()
                                aria-label=action.label()
                                on:click=move |_| on_action.run(action)
                            >
                                {action.icon()}
                            </button>
                        }
                    })
                    .collect_view()}
                {expandable
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--icon material-icons request-summary__expand"
                                title=if expanded { "Hide details" } else { "Show details" }
                                on:click=move |_| on_expand.run(!expanded)
                            >
                                {if expanded { "expand_less" } else { "expand_more" }}
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
