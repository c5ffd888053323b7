use super::*;
use crate::net::types::{GenerationSpec, ImageSpec, VideoSpec};

fn request(id: i64) -> GenerationRequest {
    GenerationRequest { id, created: Some("2021-09-12T10:00:00".into()), ..GenerationRequest::default() }
}

// =============================================================
// RequestsState
// =============================================================

#[test]
fn draw_replaces_items_wholesale() {
    let mut state = RequestsState::default();
    state.draw(vec![request(1), request(2)]);
    state.draw(vec![request(3)]);
    assert_eq!(state.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    assert!(state.loaded);
    assert!(!state.is_loading());
}

#[test]
fn draw_clears_error() {
    let mut state = RequestsState::default();
    state.fail("service responded 500".to_owned());
    state.draw(Vec::new());
    assert!(state.error.is_none());
}

#[test]
fn fail_keeps_previous_items() {
    let mut state = RequestsState::default();
    state.draw(vec![request(1)]);
    state.fail("network error: offline".to_owned());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("network error: offline"));
}

#[test]
fn overlapping_fetches_stay_loading_until_last_answer() {
    let mut state = RequestsState::default();
    state.begin_fetch();
    state.begin_fetch();
    state.draw(vec![request(1)]);
    assert!(state.is_loading());
    state.draw(vec![request(1), request(2)]);
    assert!(!state.is_loading());
}

#[test]
fn failed_fetch_still_finishes() {
    let mut state = RequestsState::default();
    state.begin_fetch();
    state.finish_fetch();
    state.fail("service responded 502".to_owned());
    assert!(!state.is_loading());
}

#[test]
fn unmatched_finish_does_not_underflow() {
    let mut state = RequestsState::default();
    state.draw(Vec::new());
    state.finish_fetch();
    state.begin_fetch();
    assert!(state.is_loading());
}

#[test]
fn expansion_survives_draw_for_present_ids() {
    let mut state = RequestsState::default();
    state.draw(vec![request(1), request(2)]);
    state.set_expanded(1, true);
    state.set_expanded(2, true);
    state.draw(vec![request(1)]);
    assert!(state.is_expanded(1));
    assert!(!state.is_expanded(2));
}

#[test]
fn set_expanded_false_collapses() {
    let mut state = RequestsState::default();
    state.set_expanded(4, true);
    state.set_expanded(4, false);
    assert!(!state.is_expanded(4));
}

// =============================================================
// SummaryView
// =============================================================

#[test]
fn summary_uses_placeholder_without_preview() {
    let view = SummaryView::build(&request(1), false);
    assert_eq!(view.preview_url, PLACEHOLDER_IMAGE);
    assert_eq!(view.steps_completed, "?");
    assert_eq!(view.steps_total, "?");
    assert_eq!(view.percent, 0.0);
}

#[test]
fn summary_reports_progress() {
    let r = GenerationRequest {
        steps_completed: Some(5),
        steps_total: Some(20),
        preview: Some("/files/x-preview.png".into()),
        ..request(1)
    };
    let view = SummaryView::build(&r, false);
    assert_eq!(view.percent, 25.0);
    assert_eq!(view.steps_completed, "5");
    assert_eq!(view.steps_total, "20");
    assert_eq!(view.preview_url, "/files/x-preview.png");
}

#[test]
fn summary_expandable_with_token_or_results() {
    assert!(!SummaryView::build(&request(1), false).expandable);
    assert!(SummaryView::build(&request(1), true).expandable);

    let with_results = GenerationRequest { results: vec!["/files/a.mp4".into()], ..request(1) };
    assert!(SummaryView::build(&with_results, false).expandable);
}

// =============================================================
// DetailsView
// =============================================================

#[test]
fn details_fall_back_to_single_placeholder() {
    let view = DetailsView::build(&request(1));
    assert_eq!(view.panels, vec![PreviewPanel { kind: MediaKind::Image, url: PLACEHOLDER_IMAGE.to_owned() }]);
}

#[test]
fn details_render_one_panel_per_result() {
    let r = GenerationRequest {
        results: vec!["/files/a.png".into(), "/files/a.mp4".into()],
        ..request(1)
    };
    let view = DetailsView::build(&r);
    assert_eq!(
        view.panels,
        vec![
            PreviewPanel { kind: MediaKind::Image, url: "/files/a.png".into() },
            PreviewPanel { kind: MediaKind::Video, url: "/files/a.mp4".into() },
        ]
    );
}

#[test]
fn details_list_every_step() {
    let image = ImageSpec { texts: vec!["a".into()], ..ImageSpec::default() };
    let r = GenerationRequest {
        spec: Some(GenerationSpec {
            images: vec![image.clone()],
            videos: vec![VideoSpec { steps: vec![image.clone(), image] }],
        }),
        ..request(1)
    };
    assert_eq!(DetailsView::build(&r).steps.len(), 3);
}

// =============================================================
// available_actions
// =============================================================

#[test]
fn no_actions_without_token() {
    assert!(available_actions(&request(1), false).is_empty());
}

#[test]
fn active_requests_can_be_cancelled() {
    assert_eq!(available_actions(&request(1), true), vec![RequestAction::Cancel, RequestAction::Delete]);
    let started = GenerationRequest { started: Some("2021-09-12T10:01:00".into()), ..request(1) };
    assert_eq!(available_actions(&started, true), vec![RequestAction::Cancel, RequestAction::Delete]);
}

#[test]
fn failed_requests_can_be_retried() {
    let failed = GenerationRequest { failed: Some("2021-09-12T10:01:00".into()), ..request(1) };
    assert_eq!(available_actions(&failed, true), vec![RequestAction::Retry, RequestAction::Delete]);
}

#[test]
fn completed_requests_toggle_publication() {
    let completed = GenerationRequest { completed: Some("2021-09-12T11:00:00".into()), ..request(1) };
    assert_eq!(available_actions(&completed, true), vec![RequestAction::Publish, RequestAction::Delete]);

    let published = GenerationRequest { published: Some("2021-09-12T12:00:00".into()), ..completed };
    assert_eq!(available_actions(&published, true), vec![RequestAction::Unpublish, RequestAction::Delete]);
}

#[test]
fn request_view_carries_expansion() {
    let view = RequestView::build(&request(9), true, true);
    assert_eq!(view.id, 9);
    assert!(view.expanded);
}
