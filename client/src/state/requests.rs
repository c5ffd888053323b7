//! Request-list state and the per-request view-models rendered from it.
//!
//! DESIGN
//! ======
//! The list is replaced wholesale on every draw; nothing is diffed. Rendering
//! goes through [`RequestView::build`], a pure function of one request and
//! the auth state, so components hold no derivation logic of their own.
//! Expansion is the one piece of UI state that outlives a draw: it is kept
//! as a set of request ids and pruned to the ids present in the new list.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::collections::BTreeSet;

use crate::net::api::RequestAction;
use crate::net::types::GenerationRequest;
use crate::util::details::{self, IndexedStep, MediaKind};
use crate::util::env::PLACEHOLDER_IMAGE;
use crate::util::status::{self, DisplayStatus, StatusKind};

/// Shared request-list state owned by the controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestsState {
    pub items: Vec<GenerationRequest>,
    /// Ids whose details panel is open.
    pub expanded: BTreeSet<i64>,
    /// List fetches dispatched and not yet answered.
    in_flight: u32,
    /// Set once the first list has been drawn.
    pub loaded: bool,
    /// Message of the last failed service call, cleared by the next draw.
    pub error: Option<String>,
}

impl RequestsState {
    /// Replace the rendered list with `items`. Answers one outstanding fetch.
    pub fn draw(&mut self, items: Vec<GenerationRequest>) {
        self.expanded.retain(|id| items.iter().any(|r| r.id == *id));
        self.items = items;
        self.finish_fetch();
        self.loaded = true;
        self.error = None;
    }

    /// Record a failed call, leaving the current list in place.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Mark one list fetch as answered, whether it succeeded or not.
    pub fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// `true` while any list fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn set_expanded(&mut self, id: i64, expanded: bool) {
        if expanded {
            self.expanded.insert(id);
        } else {
            self.expanded.remove(&id);
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }
}

/// One preview panel in the details view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewPanel {
    pub kind: MediaKind,
    pub url: String,
}

/// Everything the summary row shows.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub name: String,
    pub status: DisplayStatus,
    pub steps_completed: String,
    pub steps_total: String,
    pub percent: f64,
    pub preview_url: String,
    pub expandable: bool,
    pub actions: Vec<RequestAction>,
}

/// Everything the details panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailsView {
    pub steps: Vec<IndexedStep>,
    pub panels: Vec<PreviewPanel>,
}

/// Render model for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestView {
    pub id: i64,
    pub request: GenerationRequest,
    pub summary: SummaryView,
    pub details: DetailsView,
    pub expanded: bool,
}

impl RequestView {
    #[must_use]
    pub fn build(request: &GenerationRequest, has_token: bool, expanded: bool) -> Self {
        Self {
            id: request.id,
            request: request.clone(),
            summary: SummaryView::build(request, has_token),
            details: DetailsView::build(request),
            expanded,
        }
    }
}

impl SummaryView {
    #[must_use]
    pub fn build(request: &GenerationRequest, has_token: bool) -> Self {
        let preview_url = request
            .preview
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_owned();

        Self {
            name: request.display_name(),
            status: status::display_status(request),
            steps_completed: status::steps_label(request.steps_completed),
            steps_total: status::steps_label(request.steps_total),
            percent: status::progress_percent(request.steps_completed, request.steps_total),
            preview_url,
            expandable: has_token || details::has_details(request),
            actions: available_actions(request, has_token),
        }
    }
}

impl DetailsView {
    #[must_use]
    pub fn build(request: &GenerationRequest) -> Self {
        let urls = details::result_urls(request);
        let panels = if urls.is_empty() {
            vec![PreviewPanel { kind: MediaKind::Image, url: PLACEHOLDER_IMAGE.to_owned() }]
        } else {
            urls.into_iter()
                .map(|url| PreviewPanel { kind: details::media_kind(&url), url })
                .collect()
        };
        Self { steps: details::indexed_steps(request), panels }
    }
}

/// Lifecycle actions offered for a request. Token holders only.
#[must_use]
pub fn available_actions(request: &GenerationRequest, has_token: bool) -> Vec<RequestAction> {
    if !has_token {
        return Vec::new();
    }
    let mut actions = Vec::new();
    match status::display_status(request).kind {
        StatusKind::Queued | StatusKind::Started => actions.push(RequestAction::Cancel),
        StatusKind::Failed => actions.push(RequestAction::Retry),
        StatusKind::Completed => actions.push(if request.published.is_some() {
            RequestAction::Unpublish
        } else {
            RequestAction::Publish
        }),
    }
    actions.push(RequestAction::Delete);
    actions
}
